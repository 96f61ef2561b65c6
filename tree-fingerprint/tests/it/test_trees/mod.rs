// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Small forests shared by several tests.

use tree_fingerprint::paths::Chain;
use tree_fingerprint::tree::Forest;
use tree_fingerprint::tree::Node;

pub fn leaf(label: &str) -> Node {
    Node::new(label)
}

pub fn node(label: &str, children: Vec<Node>) -> Node {
    Node::with_children(label, children)
}

pub fn chain(labels: &[&str]) -> Chain {
    Chain::new(labels.iter().copied()).expect("chain must not be empty")
}

pub fn parse(text: &str) -> Forest {
    Forest::parse(text).expect("test forest must parse")
}

/// Two programs:
///
///   - `Program` with children `Decl` and `Stmt`, where `Stmt` has a `Decl` child
///   - `Program` with two `Decl` children
pub fn programs() -> Forest {
    vec![
        node("Program", vec![leaf("Decl"), node("Stmt", vec![leaf("Decl")])]),
        node("Program", vec![leaf("Decl"), leaf("Decl")]),
    ]
    .into_iter()
    .collect()
}

/// A single expression that recurses through a `Term`.
pub fn expressions() -> Forest {
    parse(
        r#"
Expr
| Term
| | Expr
| | | Literal
| Literal
"#,
    )
}
