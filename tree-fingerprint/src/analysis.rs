// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Runs every step of a fingerprint analysis for one forest.

use crate::classify::Classification;
use crate::classify::Membership;
use crate::consolidate::Consolidator;
use crate::fingerprint::FingerprintTable;
use crate::subpaths::CyclicLabels;
use crate::subpaths::Decomposer;
use crate::subpaths::Decomposition;
use crate::subpaths::SubpathSet;
use crate::tree::Forest;
use crate::tree::Node;
use crate::StructuralError;

/// Options controlling how a forest is consolidated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AnalysisOptions {
    /// Consolidate every node with this label instead of the tree roots.
    pub anchor: Option<String>,
    /// Labels whose subtrees are dropped during consolidation.
    pub truncate: Vec<String>,
}

impl AnalysisOptions {
    pub fn new() -> AnalysisOptions {
        AnalysisOptions::default()
    }

    pub fn with_anchor<S: Into<String>>(mut self, anchor: S) -> AnalysisOptions {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn with_truncate<I, S>(mut self, labels: I) -> AnalysisOptions
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.truncate.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn consolidator(&self) -> Consolidator {
        let consolidator = Consolidator::new().with_truncate(self.truncate.iter().cloned());
        match &self.anchor {
            Some(anchor) => consolidator.with_anchor(anchor.clone()),
            None => consolidator,
        }
    }
}

/// The results of analyzing one forest.
#[derive(Clone, Debug)]
pub struct Analysis {
    consolidated: Option<Node>,
    decomposition: Decomposition,
    classification: Classification,
    subtrees: Vec<(String, Node)>,
    fingerprint: FingerprintTable,
}

impl Analysis {
    /// Consolidates the forest, decomposes every chain of the consolidated tree, and classifies
    /// the resulting labels.  The fingerprint is computed from the forest itself.
    pub fn run(forest: &Forest, options: &AnalysisOptions) -> Result<Analysis, StructuralError> {
        let consolidated = options.consolidator().consolidate(forest)?;

        let mut decomposer = Decomposer::new();
        if let Some(tree) = &consolidated {
            for chain in tree.paths() {
                decomposer.decompose_chain(&chain);
            }
        }
        let decomposition = decomposer.finish()?;
        let classification = Classification::classify(&decomposition.subpaths);
        let mut subtrees = Vec::new();
        for label in classification.labels_with(Membership::Internal) {
            if let Some(tree) = decomposition.subpaths.subtree_below(label)? {
                subtrees.push((label.to_string(), tree));
            }
        }
        let fingerprint = FingerprintTable::aggregate(forest);

        Ok(Analysis {
            consolidated,
            decomposition,
            classification,
            subtrees,
            fingerprint,
        })
    }

    /// The consolidated tree.  `None` if the forest was empty and no anchor was given.
    pub fn consolidated(&self) -> Option<&Node> {
        self.consolidated.as_ref()
    }

    pub fn subpaths(&self) -> &SubpathSet {
        &self.decomposition.subpaths
    }

    pub fn cyclic_labels(&self) -> &CyclicLabels {
        &self.decomposition.cyclic_labels
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn fingerprint(&self) -> &FingerprintTable {
        &self.fingerprint
    }

    /// The canonical subtree below every internal label, in classification order.
    pub fn subtrees(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.subtrees
            .iter()
            .map(|(label, tree)| (label.as_str(), tree))
    }
}
