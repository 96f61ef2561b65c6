// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Writes the results of an analysis as a directory of text artifacts.
//!
//! ```text
//! <root>/
//!   adjacency_counts.txt      <parent> <child> <min> <max>
//!   edge_counts.txt           same table as adjacency_counts.txt
//!   path_counts.txt           <label> <min> <max>
//!   nodes/{all,internal,leaf,acyclic,cyclic}.txt
//!   paths/subpaths/{all,acyclic,cyclic}.txt
//!   trees/consolidated.txt
//!   trees/subtrees/<label>.txt  one per internal label
//! ```
//!
//! Each file is rewritten from scratch.  If writing fails halfway, the files written so far are
//! left in place.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use log::info;
use thiserror::Error;
use tree_fingerprint::classify::Membership;
use tree_fingerprint::Analysis;

#[derive(Debug, Error)]
#[error("cannot write {path}")]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Writes analysis artifacts below a root directory.
#[derive(Clone, Debug)]
pub struct ArtifactWriter {
    root: PathBuf,
}

impl ArtifactWriter {
    pub fn new<P: Into<PathBuf>>(root: P) -> ArtifactWriter {
        ArtifactWriter { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes every artifact of an analysis.  Returns the paths of the files written.
    pub fn write(&self, analysis: &Analysis) -> Result<Vec<PathBuf>, ExportError> {
        let mut written = Vec::new();

        let fingerprint = analysis.fingerprint();
        for name in &["adjacency_counts.txt", "edge_counts.txt"] {
            written.push(self.write_file(name, |w| fingerprint.write_edge_counts(w))?);
        }
        written.push(self.write_file("path_counts.txt", |w| fingerprint.write_path_counts(w))?);

        let classification = analysis.classification();
        written.push(self.write_file("nodes/all.txt", |w| {
            write_lines(w, classification.labels())
        })?);
        for membership in Membership::all() {
            let name = format!("nodes/{}.txt", membership.name());
            written.push(self.write_file(&name, |w| {
                write_lines(w, classification.labels_with(membership))
            })?);
        }

        let subpaths = analysis.subpaths();
        written.push(self.write_file("paths/subpaths/all.txt", |w| {
            write_lines(w, subpaths.iter())
        })?);
        written.push(self.write_file("paths/subpaths/acyclic.txt", |w| {
            write_lines(w, subpaths.iter().filter(|subpath| !subpath.is_cyclic()))
        })?);
        written.push(self.write_file("paths/subpaths/cyclic.txt", |w| {
            write_lines(w, subpaths.iter().filter(|subpath| subpath.is_cyclic()))
        })?);

        if let Some(tree) = analysis.consolidated() {
            written.push(self.write_file("trees/consolidated.txt", |w| write!(w, "{}", tree))?);
        }
        for (label, tree) in analysis.subtrees() {
            let name = format!("trees/subtrees/{}.txt", file_stem(label));
            written.push(self.write_file(&name, |w| write!(w, "{}", tree))?);
        }

        info!(
            "wrote {} artifacts to {}",
            written.len(),
            self.root.display()
        );
        Ok(written)
    }

    fn write_file<F>(&self, name: &str, contents: F) -> Result<PathBuf, ExportError>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let path = self.root.join(name);
        match create_and_write(&path, contents) {
            Ok(()) => Ok(path),
            Err(source) => Err(ExportError { path, source }),
        }
    }
}

fn create_and_write<F>(path: &Path, contents: F) -> std::io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    contents(&mut writer)?;
    writer.flush()
}

fn write_lines<W, I>(writer: &mut W, lines: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Labels become file names; path separators in them do not.
pub fn file_stem(label: &str) -> String {
    label.replace(|c: char| c == '/' || c == '\\', "_")
}

