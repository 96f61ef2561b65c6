// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Structural drift between two corpora.
//!
//! Two fingerprints are compared entry by entry.  Entries that are identical on both sides are
//! not reported; everything else becomes a [`Drift`][].  Left entries are reported first, in
//! their recorded order, followed by the entries only the right side has.
//!
//! The printable form of a drift report has one line per entry, prefixed by `<` for entries only
//! the left side has, `>` for entries only the right side has, and `~` for entries that changed.
//!
//! [`Drift`]: struct.Drift.html

use std::fmt::Display;

use crate::classify::Classification;
use crate::classify::NodeClass;
use crate::fingerprint::FingerprintTable;
use crate::stats::Bounds;
use crate::stats::BoundsTable;
use crate::stats::TableKey;

/// How one entry differs between the two sides.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Change<V> {
    OnlyLeft(V),
    OnlyRight(V),
    Changed { left: V, right: V },
}

/// One entry that differs between the two sides.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Drift<K, V> {
    pub key: K,
    pub change: Change<V>,
}

impl<K: TableKey, V: Display> Display for Drift<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let marker = match &self.change {
            Change::OnlyLeft(_) => "<",
            Change::OnlyRight(_) => ">",
            Change::Changed { .. } => "~",
        };
        write!(f, "{} ", marker)?;
        self.key.fmt_fields(f)?;
        match &self.change {
            Change::OnlyLeft(value) | Change::OnlyRight(value) => write!(f, " {}", value),
            Change::Changed { left, right } => write!(f, " {} -> {}", left, right),
        }
    }
}

pub type BoundsDrift<K> = Drift<K, Bounds>;
pub type ClassDrift = Drift<String, NodeClass>;

/// The differences between two fingerprint tables.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FingerprintDrift {
    pub edges: Vec<BoundsDrift<(String, String)>>,
    pub paths: Vec<BoundsDrift<String>>,
}

impl FingerprintDrift {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edges.len() + self.paths.len()
    }
}

impl Display for FingerprintDrift {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for drift in &self.edges {
            writeln!(f, "{}", drift)?;
        }
        for drift in &self.paths {
            writeln!(f, "{}", drift)?;
        }
        Ok(())
    }
}

fn compare_tables<K: TableKey>(
    left: &BoundsTable<K>,
    right: &BoundsTable<K>,
) -> Vec<BoundsDrift<K>> {
    let mut drift = Vec::new();
    for (key, left_bounds) in left.iter() {
        let change = match right.get(key) {
            Some(right_bounds) if right_bounds == left_bounds => continue,
            Some(right_bounds) => Change::Changed {
                left: left_bounds,
                right: right_bounds,
            },
            None => Change::OnlyLeft(left_bounds),
        };
        drift.push(Drift {
            key: key.clone(),
            change,
        });
    }
    for (key, right_bounds) in right.iter() {
        if !left.contains_key(key) {
            drift.push(Drift {
                key: key.clone(),
                change: Change::OnlyRight(right_bounds),
            });
        }
    }
    drift
}

impl FingerprintTable {
    /// Returns every edge and path entry that differs from `other`.
    pub fn compare(&self, other: &FingerprintTable) -> FingerprintDrift {
        FingerprintDrift {
            edges: compare_tables(&self.edges, &other.edges),
            paths: compare_tables(&self.paths, &other.paths),
        }
    }
}

/// Returns every edge and path entry that differs between two fingerprint tables.
pub fn compare(left: &FingerprintTable, right: &FingerprintTable) -> FingerprintDrift {
    left.compare(right)
}

impl Classification {
    /// Returns every label whose class differs from `other`, or that only one side has.
    pub fn compare(&self, other: &Classification) -> Vec<ClassDrift> {
        let mut drift = Vec::new();
        for (label, left) in self.iter() {
            let change = match other.get(label) {
                Some(right) if right == left => continue,
                Some(right) => Change::Changed { left, right },
                None => Change::OnlyLeft(left),
            };
            drift.push(Drift {
                key: label.to_string(),
                change,
            });
        }
        for (label, right) in other.iter() {
            if !self.contains(label) {
                drift.push(Drift {
                    key: label.to_string(),
                    change: Change::OnlyRight(right),
                });
            }
        }
        drift
    }
}
