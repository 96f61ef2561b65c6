// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tree_fingerprint::tree::ParseTreeError;
use tree_fingerprint_corpus::CorpusLoader;
use tree_fingerprint_corpus::FileStatus;
use tree_fingerprint_corpus::LoadError;

fn corpus(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        let path = dir.path().join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }
    dir
}

fn relative(dir: &TempDir, paths: Vec<PathBuf>) -> Vec<String> {
    paths
        .iter()
        .map(|path| {
            path.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn directories_are_loaded_in_file_name_order() {
    let dir = corpus(&[
        ("b.txt", "B\n"),
        ("a.txt", "A\n"),
        ("nested/c.txt", "C\n| D\n"),
        ("notes.md", "Ignored\n"),
    ]);
    let loader = CorpusLoader::new();
    assert_eq!(
        vec!["a.txt", "b.txt", "nested/c.txt"],
        relative(&dir, loader.source_files(&[dir.path()]).unwrap())
    );

    let forest = loader.load(&[dir.path()]).unwrap();
    let roots: Vec<&str> = forest.iter().map(|tree| tree.label()).collect();
    assert_eq!(vec!["A", "B", "C"], roots);
}

#[test]
fn extension_filters_directory_contents_only() {
    let dir = corpus(&[("a.tree", "A\n"), ("b.txt", "B\n")]);
    let loader = CorpusLoader::new().with_extension("tree");
    assert_eq!("tree", loader.extension());
    assert_eq!(
        vec!["a.tree", "b.txt"],
        relative(
            &dir,
            loader
                .source_files(&[dir.path().to_path_buf(), dir.path().join("b.txt")])
                .unwrap()
        )
    );
}

#[test]
fn files_reached_twice_are_loaded_once() {
    let dir = corpus(&[("a.txt", "A\n")]);
    let forest = CorpusLoader::new()
        .load(&[dir.path().join("a.txt"), dir.path().to_path_buf()])
        .unwrap();
    assert_eq!(1, forest.len());
}

#[test]
fn empty_files_are_reported_and_skipped() {
    let dir = corpus(&[("a.txt", "A\n| B\nA\n"), ("b.txt", "\n\n")]);
    let mut statuses = Vec::new();
    let forest = CorpusLoader::new()
        .load_with_status(&[dir.path()], |path, status| {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            let status = match status {
                FileStatus::Loaded(trees) => format!("loaded {}", trees),
                FileStatus::Empty => "empty".to_string(),
                FileStatus::Failed(_) => "failed".to_string(),
            };
            statuses.push(format!("{}: {}", name, status));
        })
        .unwrap();
    assert_eq!(vec!["a.txt: loaded 2", "b.txt: empty"], statuses);
    assert_eq!(2, forest.len());
}

#[test]
fn parse_errors_name_the_file() {
    let dir = corpus(&[("a.txt", "A\n"), ("b.txt", "B\n| | C\n"), ("c.txt", "C\n")]);
    let mut failed = Vec::new();
    let result = CorpusLoader::new().load_with_status(&[dir.path()], |path, status| {
        if let FileStatus::Failed(_) = status {
            failed.push(path.to_path_buf());
        }
    });
    let bad = dir.path().join("b.txt");
    assert_eq!(vec![bad.clone()], failed);
    match result {
        Err(LoadError::Parse { path, source }) => {
            assert_eq!(bad, path);
            assert_eq!(ParseTreeError::DepthJump { line: 2, depth: 2 }, source);
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn missing_paths_are_errors() {
    let dir = corpus(&[]);
    let missing = dir.path().join("missing");
    match CorpusLoader::new().load(&[&missing]) {
        Err(LoadError::MissingPath(path)) => assert_eq!(missing, path),
        other => panic!("expected a missing path error, got {:?}", other),
    }
}
