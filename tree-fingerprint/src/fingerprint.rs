// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Occurrence bounds over a raw forest.
//!
//! The [aggregator][] walks every tree of a forest, with every instance preserved, and records two
//! kinds of bounds:
//!
//!   - **Edge bounds.**  For each occurrence of a parent label, count how many of its immediate
//!     children carry each child label.  For every `(parent, child)` pair, the bounds span those
//!     per-occurrence counts.  An occurrence with no such child does not contribute a zero; it
//!     does not contribute at all.
//!
//!   - **Path bounds.**  For each root-to-leaf chain, count how often each label occurs on it.
//!     For every label, the bounds span those per-chain counts, over the chains that contain it.
//!
//! This must run on the raw forest.  The consolidated tree has already merged away every
//! multiplicity these bounds describe.
//!
//! Both tables can be written to and read back from their text form, which has one
//! `<fields> <min> <max>` line per entry.
//!
//! [aggregator]: fn.aggregate.html

use std::io::BufRead;
use std::io::Write;

use fxhash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::stats::Bounds;
use crate::stats::BoundsTable;
use crate::stats::TableKey;
use crate::tree::Forest;
use crate::tree::Node;

/// Edge and path bounds of a forest.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FingerprintTable {
    pub edges: BoundsTable<(String, String)>,
    pub paths: BoundsTable<String>,
}

impl FingerprintTable {
    pub fn new() -> FingerprintTable {
        FingerprintTable::default()
    }

    /// Computes the bounds of a forest in a single depth-first traversal.
    pub fn aggregate(forest: &Forest) -> FingerprintTable {
        let mut edges: BoundsTable<(&str, &str)> = BoundsTable::new();
        let mut paths: BoundsTable<&str> = BoundsTable::new();

        // The labels of the chain from the current root down to the node being visited.
        let mut chain: Vec<&str> = Vec::new();
        let mut chain_counts: Vec<(&str, usize)> = Vec::new();
        let mut stack: Vec<(usize, &Node)> = forest.iter().rev().map(|tree| (0, tree)).collect();
        while let Some((depth, node)) = stack.pop() {
            chain.truncate(depth);
            chain.push(node.label());

            let mut child_counts: SmallVec<[(&str, usize); 8]> = SmallVec::new();
            for child in node.children() {
                match child_counts
                    .iter_mut()
                    .find(|(label, _)| *label == child.label())
                {
                    Some((_, count)) => *count += 1,
                    None => child_counts.push((child.label(), 1)),
                }
            }
            for (child, count) in child_counts {
                edges.record((node.label(), child), count);
            }

            if node.is_leaf() {
                count_labels(&chain, &mut chain_counts);
                for (label, count) in chain_counts.drain(..) {
                    paths.record(label, count);
                }
            }

            stack.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| (depth + 1, child)),
            );
        }

        FingerprintTable {
            edges: edges.map_keys(|(parent, child)| (parent.to_string(), child.to_string())),
            paths: paths.map_keys(str::to_string),
        }
    }

    /// The bounds on how many `child`-labeled children a `parent`-labeled node has.
    pub fn edge(&self, parent: &str, child: &str) -> Option<Bounds> {
        self.edges.get(&(parent.to_string(), child.to_string()))
    }

    /// The bounds on how often `label` occurs along one root-to-leaf chain.
    pub fn path(&self, label: &str) -> Option<Bounds> {
        self.paths.get(label)
    }

    /// The child labels of every parent label, in the order the edges were first recorded.
    pub fn edge_lists(&self) -> Vec<(&str, Vec<&str>)> {
        let mut lists: Vec<(&str, Vec<&str>)> = Vec::new();
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        for (parent, child) in self.edges.keys() {
            let position = *index.entry(parent.as_str()).or_insert_with(|| {
                lists.push((parent.as_str(), Vec::new()));
                lists.len() - 1
            });
            lists[position].1.push(child.as_str());
        }
        lists
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.paths.is_empty()
    }

    /// Writes the edge bounds, one `<parent> <child> <min> <max>` line per pair.
    pub fn write_edge_counts<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{}", self.edges.display())
    }

    /// Writes the path bounds, one `<label> <min> <max>` line per label.
    pub fn write_path_counts<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{}", self.paths.display())
    }

    /// Reads a table back from the output of [`write_edge_counts`][] and
    /// [`write_path_counts`][].
    ///
    /// [`write_edge_counts`]: #method.write_edge_counts
    /// [`write_path_counts`]: #method.write_path_counts
    pub fn read<E, P>(edge_counts: E, path_counts: P) -> Result<FingerprintTable, ReadTableError>
    where
        E: BufRead,
        P: BufRead,
    {
        Ok(FingerprintTable {
            edges: read_edge_counts(edge_counts)?,
            paths: read_path_counts(path_counts)?,
        })
    }
}

/// Counts each label of a chain, in the order labels first occur on it.
fn count_labels<'a>(chain: &[&'a str], counts: &mut Vec<(&'a str, usize)>) {
    counts.clear();
    for label in chain {
        match counts.iter_mut().find(|(seen, _)| seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((*label, 1)),
        }
    }
}

impl std::ops::AddAssign<Self> for FingerprintTable {
    fn add_assign(&mut self, rhs: Self) {
        self.edges += rhs.edges;
        self.paths += rhs.paths;
    }
}

impl std::ops::AddAssign<&Self> for FingerprintTable {
    fn add_assign(&mut self, rhs: &Self) {
        self.edges += &rhs.edges;
        self.paths += &rhs.paths;
    }
}

/// Computes the edge and path bounds of a forest.
pub fn aggregate(forest: &Forest) -> FingerprintTable {
    FingerprintTable::aggregate(forest)
}

//-------------------------------------------------------------------------------------------------
// Reading tables

/// An error reading a bounds table.  Line numbers start at 1.
#[derive(Debug, Error)]
pub enum ReadTableError {
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReadTableError {
    fn malformed<S: Into<String>>(line: usize, reason: S) -> ReadTableError {
        ReadTableError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Reads `<parent> <child> <min> <max>` lines.
pub fn read_edge_counts<R: BufRead>(
    reader: R,
) -> Result<BoundsTable<(String, String)>, ReadTableError> {
    read_table(reader)
}

/// Reads `<label> <min> <max>` lines.
pub fn read_path_counts<R: BufRead>(reader: R) -> Result<BoundsTable<String>, ReadTableError> {
    read_table(reader)
}

/// Reads an edge count table and returns the child labels of every parent label.
pub fn read_edges<R: BufRead>(reader: R) -> Result<Vec<(String, Vec<String>)>, ReadTableError> {
    let table = FingerprintTable {
        edges: read_edge_counts(reader)?,
        paths: BoundsTable::new(),
    };
    Ok(table
        .edge_lists()
        .into_iter()
        .map(|(parent, children)| {
            (
                parent.to_string(),
                children.into_iter().map(str::to_string).collect(),
            )
        })
        .collect())
}

fn read_table<K: TableKey, R: BufRead>(reader: R) -> Result<BoundsTable<K>, ReadTableError> {
    let mut table = BoundsTable::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = line.split_whitespace().collect::<SmallVec<[&str; 4]>>();
        if fields.len() != K::FIELDS + 2 {
            return Err(ReadTableError::malformed(
                line_number,
                format!("expected {} fields, found {}", K::FIELDS + 2, fields.len()),
            ));
        }
        let min = parse_count(line_number, fields[K::FIELDS])?;
        let max = parse_count(line_number, fields[K::FIELDS + 1])?;
        if min > max {
            return Err(ReadTableError::malformed(
                line_number,
                format!("minimum {} exceeds maximum {}", min, max),
            ));
        }
        table.record_bounds(K::from_fields(&fields[..K::FIELDS]), Bounds { min, max });
    }
    Ok(table)
}

fn parse_count(line: usize, field: &str) -> Result<usize, ReadTableError> {
    field
        .parse()
        .map_err(|_| ReadTableError::malformed(line, format!("invalid count `{}`", field)))
}
