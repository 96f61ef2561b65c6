// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Tree fingerprints describe the grammatical _shape_ of a corpus of parsed programs, so that two
//! implementations of equivalent programs can be compared structurally.  Every source unit is
//! represented as a labeled tree whose labels are grammar production names, and a corpus is a
//! [`Forest`][] of such trees.
//!
//! The fingerprint is computed in a few strictly forward steps:
//!
//!   - The [consolidator][] merges the forest into one canonical tree, grouping children by label
//!     at every depth.
//!
//!   - The [path enumerator][] lists every root-to-leaf chain of labels in that tree.
//!
//!   - The [subpath decomposer][] splits every chain into acyclic and cyclic subpaths.  A "cycle"
//!     here is purely semantic: a label that recurs along one chain.  Trees never contain
//!     physical cycles.
//!
//!   - The [classifier][] assigns each label to exactly one [`NodeClass`][].
//!
//!   - Independently, the [aggregator][] walks the raw forest and records `(min, max)` bounds for
//!     how often each parent→child adjacency occurs per parent occurrence, and how often each
//!     label recurs along a single root-to-leaf chain.
//!
//! [`Analysis`][] runs all of these steps for one forest.
//!
//! [`Forest`]: tree/struct.Forest.html
//! [consolidator]: consolidate/index.html
//! [path enumerator]: paths/index.html
//! [subpath decomposer]: subpaths/index.html
//! [classifier]: classify/index.html
//! [`NodeClass`]: classify/enum.NodeClass.html
//! [aggregator]: fingerprint/index.html
//! [`Analysis`]: analysis/struct.Analysis.html

use thiserror::Error;

#[macro_use]
mod debugging;

pub mod analysis;
pub mod classify;
pub mod compare;
pub mod consolidate;
pub mod fingerprint;
pub mod paths;
pub mod stats;
pub mod subpaths;
pub mod tree;

pub use analysis::Analysis;
pub use analysis::AnalysisOptions;
pub use tree::Forest;
pub use tree::Node;

/// The processing step in which a structural precondition was violated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Stage {
    Consolidation,
    PathEnumeration,
    Decomposition,
    Canonicalization,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Stage::Consolidation => "consolidation",
            Stage::PathEnumeration => "path enumeration",
            Stage::Decomposition => "decomposition",
            Stage::Canonicalization => "canonicalization",
        };
        f.write_str(name)
    }
}

/// A tree handed to one of the processing steps does not have the shape that step requires.
///
/// These errors abort an analysis.  Missing optional structure (an empty forest, an anchor label
/// that never occurs) is never reported this way; it yields an empty result instead.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum StructuralError {
    #[error("{stage}: expected a node labeled `{expected}`, found `{actual}`")]
    UnexpectedLabel {
        stage: Stage,
        expected: String,
        actual: String,
    },
    #[error("{stage}: expected a linear chain, but `{label}` has {children} children")]
    NotAChain {
        stage: Stage,
        label: String,
        children: usize,
    },
}
