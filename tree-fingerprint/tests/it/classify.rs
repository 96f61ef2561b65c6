// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use itertools::Itertools;
use maplit::hashmap;
use pretty_assertions::assert_eq;
use tree_fingerprint::classify::classify;
use tree_fingerprint::classify::Classification;
use tree_fingerprint::classify::Membership;
use tree_fingerprint::classify::NodeClass;
use tree_fingerprint::subpaths::decompose;

use crate::test_trees::chain;

fn classify_chains(chains: &[&[&str]]) -> Classification {
    let decomposition = decompose(chains.iter().map(|labels| chain(labels))).unwrap();
    classify(&decomposition.subpaths)
}

#[test]
fn can_classify_acyclic_labels() {
    let classification =
        classify_chains(&[&["Program", "Decl"], &["Program", "Stmt", "Decl"]]);
    let classes = classification.iter().collect::<std::collections::HashMap<_, _>>();
    assert_eq!(
        hashmap! {
            "Program" => NodeClass::InternalAcyclic,
            "Stmt" => NodeClass::InternalAcyclic,
            "Decl" => NodeClass::LeafAcyclic,
        },
        classes
    );
    assert_eq!(vec!["Program", "Decl", "Stmt"], classification.labels().collect_vec());
}

#[test]
fn can_classify_cyclic_labels() {
    let classification = classify_chains(&[&["Expr", "Term", "Expr", "Literal"]]);
    assert_eq!(Some(NodeClass::InternalCyclic), classification.get("Expr"));
    assert_eq!(Some(NodeClass::InternalAcyclic), classification.get("Term"));
    assert_eq!(Some(NodeClass::LeafAcyclic), classification.get("Literal"));
    assert_eq!(None, classification.get("Missing"));
}

#[test]
fn classification_is_total_and_disjoint() {
    let classification = classify_chains(&[
        &["Program", "Stmt", "Expr", "Term", "Expr", "Literal"],
        &["Program", "Stmt", "Block", "Stmt", "Expr", "Name"],
        &["Program", "Decl", "Name"],
        &["Block", "Block"],
    ]);
    assert!(!classification.is_empty());
    for (label, class) in classification.iter() {
        let memberships = class.memberships();
        assert_eq!(2, memberships.len(), "{}", label);
        assert!(
            memberships.contains(Membership::Internal) != memberships.contains(Membership::Leaf),
            "{}",
            label
        );
        assert!(
            memberships.contains(Membership::Acyclic) != memberships.contains(Membership::Cyclic),
            "{}",
            label
        );
    }
    let all = classification.labels().collect_vec();
    let internal = classification.labels_with(Membership::Internal).collect_vec();
    let leaf = classification.labels_with(Membership::Leaf).collect_vec();
    assert_eq!(all.len(), internal.len() + leaf.len());
    for label in classification.labels_with(Membership::Cyclic) {
        assert!(internal.contains(&label), "{}", label);
    }
}

#[test]
fn self_loop_is_cyclic() {
    let classification = classify_chains(&[&["Block", "Block", "Stmt"]]);
    assert_eq!(Some(NodeClass::InternalCyclic), classification.get("Block"));
    assert_eq!(Some(NodeClass::LeafAcyclic), classification.get("Stmt"));
}

#[test]
fn node_classes_have_listing_names() {
    assert_eq!("internal-cyclic", NodeClass::InternalCyclic.to_string());
    assert_eq!(
        vec!["internal", "cyclic"],
        NodeClass::InternalCyclic
            .memberships()
            .iter()
            .map(Membership::name)
            .collect_vec()
    );
}

#[test]
fn loop_cut_at_a_later_cyclic_label_does_not_make_its_root_cyclic() {
    let classification = classify_chains(&[&["X", "B", "Y", "B"], &["A", "B", "C", "A"]]);
    assert_eq!(Some(NodeClass::InternalAcyclic), classification.get("A"));
    assert_eq!(Some(NodeClass::InternalCyclic), classification.get("B"));
    assert_eq!(vec!["B"], classification.labels_with(Membership::Cyclic).collect_vec());
}
