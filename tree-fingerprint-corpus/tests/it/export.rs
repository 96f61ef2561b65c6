// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use std::path::Path;

use pretty_assertions::assert_eq;
use tree_fingerprint::tree::Forest;
use tree_fingerprint::Analysis;
use tree_fingerprint::AnalysisOptions;
use tree_fingerprint_corpus::export::file_stem;
use tree_fingerprint_corpus::ArtifactWriter;

fn programs() -> Forest {
    Forest::parse("Program\n| Decl\n| Stmt\n| | Decl\nProgram\n| Decl\n| Decl\n").unwrap()
}

fn read(root: &Path, name: &str) -> String {
    std::fs::read_to_string(root.join(name)).unwrap()
}

#[test]
fn can_write_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let analysis = Analysis::run(&programs(), &AnalysisOptions::new()).unwrap();
    let writer = ArtifactWriter::new(dir.path().join("data"));
    let written = writer.write(&analysis).unwrap();
    assert_eq!(14, written.len());
    assert!(written.iter().all(|path| path.starts_with(writer.root())));

    let root = writer.root();
    let edges = "Program Decl 1 2\nProgram Stmt 1 1\nStmt Decl 1 1\n";
    assert_eq!(edges, read(root, "edge_counts.txt"));
    assert_eq!(edges, read(root, "adjacency_counts.txt"));
    assert_eq!("Program 1 1\nDecl 1 1\nStmt 1 1\n", read(root, "path_counts.txt"));

    assert_eq!("Program\nDecl\nStmt\n", read(root, "nodes/all.txt"));
    assert_eq!("Program\nStmt\n", read(root, "nodes/internal.txt"));
    assert_eq!("Decl\n", read(root, "nodes/leaf.txt"));
    assert_eq!("Program\nDecl\nStmt\n", read(root, "nodes/acyclic.txt"));
    assert_eq!("", read(root, "nodes/cyclic.txt"));

    let subpaths = "Program -> Decl\nProgram -> Stmt -> Decl\nStmt -> Decl\n";
    assert_eq!(subpaths, read(root, "paths/subpaths/all.txt"));
    assert_eq!(subpaths, read(root, "paths/subpaths/acyclic.txt"));
    assert_eq!("", read(root, "paths/subpaths/cyclic.txt"));

    assert_eq!(
        "Program\n| Decl\n| Stmt\n| | Decl\n",
        read(root, "trees/consolidated.txt")
    );
    assert_eq!(
        "Program\n| Decl\n| Stmt\n| | Decl\n",
        read(root, "trees/subtrees/Program.txt")
    );
    assert_eq!("Stmt\n| Decl\n", read(root, "trees/subtrees/Stmt.txt"));
}

#[test]
fn cyclic_artifacts_are_split_out() {
    let dir = tempfile::tempdir().unwrap();
    let forest = Forest::parse("Expr\n| Term\n| | Expr\n| | | Literal\n| Literal\n").unwrap();
    let analysis = Analysis::run(&forest, &AnalysisOptions::new()).unwrap();
    ArtifactWriter::new(dir.path()).write(&analysis).unwrap();

    assert_eq!("Expr -> Term -> Expr\n", read(dir.path(), "paths/subpaths/cyclic.txt"));
    assert_eq!("Expr -> Literal\n", read(dir.path(), "paths/subpaths/acyclic.txt"));
    assert_eq!("Expr\n", read(dir.path(), "nodes/cyclic.txt"));
    assert_eq!(
        "Expr\n| Term\n| | Expr\n| Literal\n",
        read(dir.path(), "trees/subtrees/Expr.txt")
    );
    assert_eq!("Term\n| Expr\n", read(dir.path(), "trees/subtrees/Term.txt"));
    assert!(!dir.path().join("trees/subtrees/Literal.txt").exists());
}

#[test]
fn empty_analysis_writes_empty_tables() {
    let dir = tempfile::tempdir().unwrap();
    let analysis = Analysis::run(&Forest::new(), &AnalysisOptions::new()).unwrap();
    let written = ArtifactWriter::new(dir.path()).write(&analysis).unwrap();
    assert_eq!(11, written.len());
    assert_eq!("", read(dir.path(), "edge_counts.txt"));
    assert!(!dir.path().join("trees/consolidated.txt").exists());
}

#[test]
fn labels_are_safe_file_stems() {
    assert_eq!("Stmt", file_stem("Stmt"));
    assert_eq!("a_b_c", file_stem("a/b\\c"));
}
