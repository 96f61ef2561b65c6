// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Merges many trees into one canonical tree.
//!
//! Consolidation starts from a set of _instances_ that all share a label and builds a single new
//! node with that label.  The children of all instances are grouped by label, in the order each
//! label is first seen across the instances, and each group is consolidated in turn.  The result
//! has at most one child per distinct label at every depth.
//!
//! How often a label occurs is deliberately lost here.  Multiplicities are only available from
//! the [aggregator][], which works on the raw forest.
//!
//! [aggregator]: ../fingerprint/index.html

use fxhash::FxHashMap;
use fxhash::FxHashSet;

use crate::tree::Forest;
use crate::tree::Node;
use crate::Stage;
use crate::StructuralError;

/// Consolidates forests into canonical trees.
///
/// With an _anchor_ label, every node carrying that label anywhere in the forest is an instance
/// (tree roots included).  Without one, the tree roots themselves are the instances, and they
/// must all have the same label.  Nodes whose label is one of the _truncate_ labels lose their
/// children in the result.
#[derive(Clone, Debug, Default)]
pub struct Consolidator {
    anchor: Option<String>,
    truncate: FxHashSet<String>,
}

impl Consolidator {
    /// Creates a consolidator that merges tree roots and truncates nothing.
    pub fn new() -> Consolidator {
        Consolidator::default()
    }

    pub fn with_anchor<S: Into<String>>(mut self, anchor: S) -> Consolidator {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn with_truncate<I, S>(mut self, labels: I) -> Consolidator
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.truncate.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn truncates(&self, label: &str) -> bool {
        self.truncate.contains(label)
    }

    /// Consolidates a forest.
    ///
    /// Returns `None` only when there is no anchor and the forest is empty.  If an anchor is set
    /// but never occurs, the result is a lone node carrying the anchor label.
    pub fn consolidate(&self, forest: &Forest) -> Result<Option<Node>, StructuralError> {
        self.consolidate_trees(forest.iter())
    }

    /// Consolidates an arbitrary sequence of trees.  See [`consolidate`][].
    ///
    /// [`consolidate`]: #method.consolidate
    pub fn consolidate_trees<'a, I>(&self, trees: I) -> Result<Option<Node>, StructuralError>
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut instances = Vec::new();
        match &self.anchor {
            Some(anchor) => {
                for tree in trees {
                    instances.extend(tree.find_all(anchor));
                }
                Ok(Some(self.merge(anchor, &instances)))
            }
            None => {
                for tree in trees {
                    if let Some(first) = instances.first() {
                        let first: &Node = first;
                        if first.label() != tree.label() {
                            return Err(StructuralError::UnexpectedLabel {
                                stage: Stage::Consolidation,
                                expected: first.label().to_string(),
                                actual: tree.label().to_string(),
                            });
                        }
                    }
                    instances.push(tree);
                }
                match instances.first() {
                    Some(first) => Ok(Some(self.merge(first.label(), &instances))),
                    None => Ok(None),
                }
            }
        }
    }

    /// Merges a set of instances that all carry `label` into one new node.
    pub fn merge(&self, label: &str, instances: &[&Node]) -> Node {
        let mut merged = Node::new(label);
        if self.truncate.contains(label) {
            return merged;
        }

        let mut groups: Vec<(&str, Vec<&Node>)> = Vec::new();
        let mut group_index: FxHashMap<&str, usize> = FxHashMap::default();
        for instance in instances {
            for child in instance.children() {
                let index = *group_index.entry(child.label()).or_insert_with(|| {
                    groups.push((child.label(), Vec::new()));
                    groups.len() - 1
                });
                groups[index].1.push(child);
            }
        }

        for (child_label, children) in groups {
            merged.push_child(self.merge(child_label, &children));
        }
        merged
    }
}

/// Consolidates `forest`, optionally anchored at `anchor` and truncating the `truncate` labels.
/// A convenience wrapper around [`Consolidator`][].
///
/// [`Consolidator`]: struct.Consolidator.html
pub fn consolidate(
    forest: &Forest,
    anchor: Option<&str>,
    truncate: &[&str],
) -> Result<Option<Node>, StructuralError> {
    let mut consolidator = Consolidator::new().with_truncate(truncate.iter().copied());
    if let Some(anchor) = anchor {
        consolidator = consolidator.with_anchor(anchor);
    }
    consolidator.consolidate(forest)
}
