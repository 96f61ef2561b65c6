// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Decompose chains into acyclic and cyclic subpaths.
//!
//! Trees never contain physical cycles, but a grammar is full of recursion: an expression contains
//! expressions, a block contains statements that contain blocks.  Along a single root-to-leaf
//! chain this shows up as a label that occurs more than once.  We call that a _semantic cycle_.
//!
//! The [`Decomposer`][] splits each chain at the first recurring label it finds.  The closed
//! segment from the first occurrence to the second one becomes a [`Subpath::Cyclic`][] and is done.
//! The segment strictly inside the loop and the chain with the loop cut out are put back on the
//! work queue and decomposed independently.  Once a piece has no recurring label, every suffix of
//! it with at least two labels is a [`Subpath::Acyclic`][].
//!
//! Scanning a piece stops at the first recurrence.  Consider `A → B → C → A → B`.  Once `A → B →
//! C → A` is cut out, `B` no longer recurs; reporting `B → C → A → B` as well would blame `B` for a
//! loop that only exists because of `A`.
//!
//! Every piece put back on the queue is strictly shorter than the piece it came from, so the
//! queue always drains.
//!
//! When all chains have been decomposed, [`Decomposer::finish`][] cleans up.  Subpaths emitted
//! before some label was known to be cyclic are cut at the first occurrence of that label below
//! their root.  This applies to cyclic subpaths as well: a loop `A → B → C → A` becomes the acyclic
//! `A → B` once `B` is known to recur elsewhere.  All subpaths are then [canonicalized][]: grouped
//! by root label, merged, and expanded again, which drops duplicates and subpaths that are
//! prefixes of others.
//!
//! [`Decomposer`]: struct.Decomposer.html
//! [`Decomposer::finish`]: struct.Decomposer.html#method.finish
//! [`Subpath::Cyclic`]: enum.Subpath.html#variant.Cyclic
//! [`Subpath::Acyclic`]: enum.Subpath.html#variant.Acyclic
//! [canonicalized]: fn.canonicalize.html

use std::collections::VecDeque;
use std::fmt::Display;

use fxhash::FxHashMap;
use fxhash::FxHashSet;

use crate::consolidate::Consolidator;
use crate::paths::Chain;
use crate::tree::Node;
use crate::Stage;
use crate::StructuralError;

//-------------------------------------------------------------------------------------------------
// Subpaths

/// A linear chain of labels produced by decomposition.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Subpath {
    /// No label occurs twice.
    Acyclic(Chain),
    /// The leaf carries the root's label, closing one semantic loop.
    Cyclic(Chain),
}

impl Subpath {
    /// Tags a chain by its shape: cyclic if it has at least two labels and ends in its root label.
    pub fn from_chain(chain: Chain) -> Subpath {
        if chain.is_closed() {
            Subpath::Cyclic(chain)
        } else {
            Subpath::Acyclic(chain)
        }
    }

    pub fn chain(&self) -> &Chain {
        match self {
            Subpath::Acyclic(chain) | Subpath::Cyclic(chain) => chain,
        }
    }

    pub fn into_chain(self) -> Chain {
        match self {
            Subpath::Acyclic(chain) | Subpath::Cyclic(chain) => chain,
        }
    }

    pub fn is_cyclic(&self) -> bool {
        matches!(self, Subpath::Cyclic(_))
    }

    pub fn root(&self) -> &str {
        self.chain().root()
    }

    pub fn labels(&self) -> &[String] {
        self.chain().labels()
    }
}

impl Display for Subpath {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.chain().fmt(f)
    }
}

//-------------------------------------------------------------------------------------------------
// Cyclic labels

/// The labels found to recur along some chain during one decomposition pass, in the order they
/// were discovered.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CyclicLabels {
    order: Vec<String>,
    members: FxHashSet<String>,
}

impl CyclicLabels {
    pub fn new() -> CyclicLabels {
        CyclicLabels::default()
    }

    /// Adds a label.  Returns whether it was new.
    pub fn insert(&mut self, label: &str) -> bool {
        if self.members.contains(label) {
            return false;
        }
        self.members.insert(label.to_string());
        self.order.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.members.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

//-------------------------------------------------------------------------------------------------
// Decomposition

/// Decomposes chains into subpaths.  One decomposer holds the state of one pass: the subpaths
/// emitted so far and the labels found to be cyclic so far.
#[derive(Debug, Default)]
pub struct Decomposer {
    cyclic_labels: CyclicLabels,
    emitted: Vec<Subpath>,
}

/// Where a chain recurs: the label at `second` already occurred at `first`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Recurrence {
    first: usize,
    second: usize,
}

impl Decomposer {
    pub fn new() -> Decomposer {
        Decomposer::default()
    }

    pub fn cyclic_labels(&self) -> &CyclicLabels {
        &self.cyclic_labels
    }

    /// The subpaths emitted so far, before any cleanup.
    pub fn emitted(&self) -> &[Subpath] {
        &self.emitted
    }

    /// Decomposes a linear tree.  Fails if the tree branches anywhere.
    pub fn decompose_node(&mut self, path: &Node) -> Result<(), StructuralError> {
        let chain = Chain::from_node(path, Stage::Decomposition)?;
        self.decompose_chain(&chain);
        Ok(())
    }

    /// Decomposes one chain, emitting its subpaths.
    pub fn decompose_chain(&mut self, chain: &Chain) {
        let mut queue = VecDeque::new();
        queue.push_back(chain.labels().to_vec());
        while let Some(piece) = queue.pop_front() {
            if piece.len() < 2 {
                continue;
            }
            copious_debugging!("decompose {}", piece.join(" -> "));

            let Recurrence { first, second } = match find_recurrence(&piece) {
                Some(recurrence) => recurrence,
                None => {
                    for start in 0..piece.len() - 1 {
                        self.emitted
                            .push(Subpath::Acyclic(Chain::from_slice(&piece[start..])));
                    }
                    continue;
                }
            };
            copious_debugging!(
                "  {} recurs at {} and {}",
                piece[second],
                first,
                second
            );

            self.emitted
                .push(Subpath::Cyclic(Chain::from_slice(&piece[first..=second])));
            if second > first + 1 {
                queue.push_back(piece[first + 1..second].to_vec());
            }
            let mut external = piece[..first].to_vec();
            external.extend_from_slice(&piece[second..]);
            queue.push_back(external);
            self.cyclic_labels.insert(&piece[second]);
        }
    }

    /// Cleans up the emitted subpaths and canonicalizes them.
    pub fn finish(self) -> Result<Decomposition, StructuralError> {
        let cyclic_labels = self.cyclic_labels;
        // A loop that runs through a label found to be cyclic later is cut there too, and is no
        // longer closed.
        let subpaths = self.emitted.into_iter().map(|subpath| {
            let mut chain = subpath.into_chain();
            let cut = chain
                .labels()
                .iter()
                .skip(1)
                .position(|label| cyclic_labels.contains(label));
            if let Some(cut) = cut {
                chain.truncate(cut + 2);
            }
            Subpath::from_chain(chain)
        });
        let subpaths = canonicalize(subpaths.collect::<Vec<_>>())?;
        Ok(Decomposition {
            subpaths,
            cyclic_labels,
        })
    }
}

/// Finds the first label that occurs a second time, scanning from the root.
fn find_recurrence(labels: &[String]) -> Option<Recurrence> {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    for (position, label) in labels.iter().enumerate() {
        if let Some(&first) = seen.get(label.as_str()) {
            return Some(Recurrence {
                first,
                second: position,
            });
        }
        seen.insert(label, position);
    }
    None
}

/// The result of decomposing a set of chains.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Decomposition {
    pub subpaths: SubpathSet,
    pub cyclic_labels: CyclicLabels,
}

/// Decomposes every chain in a single pass and canonicalizes the result.
pub fn decompose<I>(chains: I) -> Result<Decomposition, StructuralError>
where
    I: IntoIterator<Item = Chain>,
{
    let mut decomposer = Decomposer::new();
    for chain in chains {
        decomposer.decompose_chain(&chain);
    }
    decomposer.finish()
}

//-------------------------------------------------------------------------------------------------
// Canonical subpath sets

/// All canonical subpaths that start at one label, together with their merged tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubpathGroup {
    tree: Node,
    subpaths: Vec<Subpath>,
}

impl SubpathGroup {
    pub fn root(&self) -> &str {
        self.tree.label()
    }

    /// The consolidated tree of all subpaths in this group.
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }
}

/// A deduplicated set of subpaths, grouped by root label in the order the roots were first seen.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubpathSet {
    groups: Vec<SubpathGroup>,
    index: FxHashMap<String, usize>,
}

impl SubpathSet {
    pub fn groups(&self) -> &[SubpathGroup] {
        &self.groups
    }

    pub fn group(&self, root: &str) -> Option<&SubpathGroup> {
        self.index.get(root).map(|&index| &self.groups[index])
    }

    /// The consolidated tree of all subpaths rooted at `root`.
    pub fn subtree(&self, root: &str) -> Option<&Node> {
        self.group(root).map(SubpathGroup::tree)
    }

    pub fn roots(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(SubpathGroup::root)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subpath> + '_ {
        self.groups.iter().flat_map(|group| group.subpaths.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.subpaths.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Canonicalizes this set again.  The result is always equal to this set.
    pub fn canonicalize(&self) -> Result<SubpathSet, StructuralError> {
        canonicalize(self.iter().cloned())
    }

    /// The canonical subtree below `label`.  For a group root this is the tree of its group.  A
    /// label that only occurs further down, like `Term` in `Expr → Term → Expr`, gets the merge of
    /// every subpath suffix that starts at it.  `None` if `label` never has a child.
    pub fn subtree_below(&self, label: &str) -> Result<Option<Node>, StructuralError> {
        if let Some(tree) = self.subtree(label) {
            return Ok(Some(tree.clone()));
        }
        let suffixes = self
            .iter()
            .filter_map(|subpath| {
                let labels = subpath.labels();
                let (_, parents) = labels.split_last()?;
                let start = parents.iter().position(|parent| parent == label)?;
                Some(Chain::from_slice(&labels[start..]).to_node())
            })
            .collect::<Vec<_>>();
        merge_group(suffixes.iter())
    }
}

/// Merges trees that share a root label.
fn merge_group<'a, I>(trees: I) -> Result<Option<Node>, StructuralError>
where
    I: IntoIterator<Item = &'a Node>,
{
    Consolidator::new()
        .consolidate_trees(trees)
        .map_err(|err| match err {
            StructuralError::UnexpectedLabel {
                expected, actual, ..
            } => StructuralError::UnexpectedLabel {
                stage: Stage::Canonicalization,
                expected,
                actual,
            },
            err => err,
        })
}

/// Removes duplicate subpaths and subpaths that are prefixes of others.
///
/// Subpaths are grouped by root label.  Each group is consolidated into one tree and expanded back
/// into its root-to-leaf chains, which are tagged afresh by shape.
pub fn canonicalize<I>(subpaths: I) -> Result<SubpathSet, StructuralError>
where
    I: IntoIterator<Item = Subpath>,
{
    let mut roots: Vec<(String, Vec<Node>)> = Vec::new();
    let mut root_index: FxHashMap<String, usize> = FxHashMap::default();
    for subpath in subpaths {
        let node = subpath.chain().to_node();
        match root_index.get(subpath.root()) {
            Some(&index) => roots[index].1.push(node),
            None => {
                root_index.insert(subpath.root().to_string(), roots.len());
                roots.push((subpath.root().to_string(), vec![node]));
            }
        }
    }

    let mut result = SubpathSet::default();
    for (root, nodes) in roots {
        let tree = match merge_group(nodes.iter())? {
            Some(tree) => tree,
            None => continue,
        };
        let subpaths = tree.paths().map(Subpath::from_chain).collect();
        result.index.insert(root, result.groups.len());
        result.groups.push(SubpathGroup { tree, subpaths });
    }
    Ok(result)
}
