// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use itertools::Itertools;
use pretty_assertions::assert_eq;
use tree_fingerprint::classify::Membership;
use tree_fingerprint::classify::NodeClass;
use tree_fingerprint::stats::Bounds;
use tree_fingerprint::tree::Forest;
use tree_fingerprint::Analysis;
use tree_fingerprint::AnalysisOptions;
use tree_fingerprint::Stage;
use tree_fingerprint::StructuralError;

use crate::test_trees::expressions;
use crate::test_trees::parse;
use crate::test_trees::programs;

#[test]
fn can_analyze_programs() {
    let analysis = Analysis::run(&programs(), &AnalysisOptions::new()).unwrap();

    assert_eq!(
        "Program\n| Decl\n| Stmt\n| | Decl\n",
        analysis.consolidated().unwrap().to_string()
    );

    let fingerprint = analysis.fingerprint();
    assert_eq!(Some(Bounds { min: 1, max: 2 }), fingerprint.edge("Program", "Decl"));
    assert_eq!(Some(Bounds { min: 1, max: 1 }), fingerprint.edge("Program", "Stmt"));
    assert_eq!(Some(Bounds { min: 1, max: 1 }), fingerprint.edge("Stmt", "Decl"));
    assert_eq!(3, fingerprint.edges.len());

    let classification = analysis.classification();
    assert_eq!(Some(NodeClass::LeafAcyclic), classification.get("Decl"));
    assert_eq!(Some(NodeClass::InternalAcyclic), classification.get("Stmt"));
    assert_eq!(Some(NodeClass::InternalAcyclic), classification.get("Program"));
    assert!(classification
        .labels_with(Membership::Cyclic)
        .next()
        .is_none());

    let subtrees = analysis
        .subtrees()
        .map(|(label, tree)| (label, tree.to_string()))
        .collect_vec();
    assert_eq!(
        vec![
            ("Program", "Program\n| Decl\n| Stmt\n| | Decl\n".to_string()),
            ("Stmt", "Stmt\n| Decl\n".to_string()),
        ],
        subtrees
    );
    assert!(analysis.cyclic_labels().is_empty());
}

#[test]
fn can_analyze_recursive_expressions() {
    let analysis = Analysis::run(&expressions(), &AnalysisOptions::new()).unwrap();
    assert_eq!(vec!["Expr"], analysis.cyclic_labels().iter().collect_vec());
    assert_eq!(
        vec!["Expr -> Term -> Expr", "Expr -> Literal"],
        analysis
            .subpaths()
            .iter()
            .map(|subpath| subpath.to_string())
            .collect_vec()
    );
    assert_eq!(
        vec!["Expr"],
        analysis
            .classification()
            .labels_with(Membership::Cyclic)
            .collect_vec()
    );
    assert_eq!(Some(Bounds { min: 1, max: 2 }), analysis.fingerprint().path("Expr"));
    assert_eq!(
        vec![
            ("Expr", "Expr\n| Term\n| | Expr\n| Literal\n".to_string()),
            ("Term", "Term\n| Expr\n".to_string()),
        ],
        analysis
            .subtrees()
            .map(|(label, tree)| (label, tree.to_string()))
            .collect_vec()
    );
}

#[test]
fn anchor_and_truncate_apply_to_consolidation_only() {
    let forest = parse(
        "Program\n| Stmt\n| | Expr\n| | | Call\n| | | | Expr\n| | | | | Name\n| Expr\n| | Literal\n",
    );
    let options = AnalysisOptions::new()
        .with_anchor("Expr")
        .with_truncate(vec!["Call"]);
    let analysis = Analysis::run(&forest, &options).unwrap();
    assert_eq!(
        "Expr\n| Call\n| Name\n| Literal\n",
        analysis.consolidated().unwrap().to_string()
    );
    assert!(analysis.cyclic_labels().is_empty());
    // The fingerprint still sees the whole forest.
    assert_eq!(Some(Bounds { min: 1, max: 1 }), analysis.fingerprint().edge("Call", "Expr"));
    assert_eq!(Some(Bounds { min: 1, max: 2 }), analysis.fingerprint().path("Expr"));
}

#[test]
fn empty_forest_has_empty_analysis() {
    let analysis = Analysis::run(&Forest::new(), &AnalysisOptions::new()).unwrap();
    assert!(analysis.consolidated().is_none());
    assert!(analysis.subpaths().is_empty());
    assert!(analysis.classification().is_empty());
    assert!(analysis.fingerprint().is_empty());
}

#[test]
fn missing_anchor_has_empty_subpaths() {
    let options = AnalysisOptions::new().with_anchor("Missing");
    let analysis = Analysis::run(&programs(), &options).unwrap();
    assert_eq!("Missing\n", analysis.consolidated().unwrap().to_string());
    assert!(analysis.subpaths().is_empty());
    assert!(!analysis.fingerprint().is_empty());
}

#[test]
fn mismatched_roots_abort_analysis() {
    let forest = parse("Program\n| Decl\nModule\n");
    assert_eq!(
        Some(StructuralError::UnexpectedLabel {
            stage: Stage::Consolidation,
            expected: "Program".to_string(),
            actual: "Module".to_string(),
        }),
        Analysis::run(&forest, &AnalysisOptions::new()).err()
    );
}
