// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Classifies labels by how they occur in decomposed subpaths.

use std::fmt::Display;

use enumset::EnumSet;
use enumset::EnumSetType;
use fxhash::FxHashMap;

use crate::subpaths::Subpath;
use crate::subpaths::SubpathSet;

/// The class of a label.  Every label that occurs in some subpath has exactly one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NodeClass {
    /// Has children somewhere and never closes a loop.
    InternalAcyclic,
    /// Has children somewhere and closes at least one loop.
    InternalCyclic,
    /// Never has children.
    LeafAcyclic,
}

impl NodeClass {
    /// Returns the node listings this class belongs to.
    pub fn memberships(self) -> EnumSet<Membership> {
        match self {
            NodeClass::InternalAcyclic => Membership::Internal | Membership::Acyclic,
            NodeClass::InternalCyclic => Membership::Internal | Membership::Cyclic,
            NodeClass::LeafAcyclic => Membership::Leaf | Membership::Acyclic,
        }
    }
}

impl Display for NodeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            NodeClass::InternalAcyclic => "internal-acyclic",
            NodeClass::InternalCyclic => "internal-cyclic",
            NodeClass::LeafAcyclic => "leaf-acyclic",
        };
        f.write_str(name)
    }
}

/// One of the node listings a label can appear in.  A label is in exactly one of `Internal` and
/// `Leaf`, and exactly one of `Acyclic` and `Cyclic`.
#[derive(Debug, EnumSetType)]
pub enum Membership {
    Internal,
    Leaf,
    Acyclic,
    Cyclic,
}

impl Membership {
    /// All listings, in the order their artifacts are written.
    pub fn all() -> EnumSet<Membership> {
        EnumSet::all()
    }

    /// The name of the listing, as used for the file stem of its artifact.
    pub fn name(self) -> &'static str {
        match self {
            Membership::Internal => "internal",
            Membership::Leaf => "leaf",
            Membership::Acyclic => "acyclic",
            Membership::Cyclic => "cyclic",
        }
    }
}

/// The class of every label, in the order labels were first seen.
#[derive(Clone, Debug, Default)]
pub struct Classification {
    classes: Vec<(String, NodeClass)>,
    index: FxHashMap<String, usize>,
}

#[derive(Clone, Copy, Default)]
struct Observed {
    has_children: bool,
    closes_loop: bool,
}

impl Classification {
    /// Classifies every label that occurs in `subpaths`.
    pub fn classify(subpaths: &SubpathSet) -> Classification {
        let mut order: Vec<&str> = Vec::new();
        let mut observed: FxHashMap<&str, Observed> = FxHashMap::default();
        for subpath in subpaths.iter() {
            let labels = subpath.labels();
            for (position, label) in labels.iter().enumerate() {
                let entry = observed.entry(label.as_str()).or_insert_with(|| {
                    order.push(label.as_str());
                    Observed::default()
                });
                if position + 1 < labels.len() {
                    entry.has_children = true;
                }
            }
            if let Subpath::Cyclic(chain) = subpath {
                if let Some(entry) = observed.get_mut(chain.leaf()) {
                    entry.closes_loop = true;
                }
            }
        }

        let mut result = Classification::default();
        for label in order {
            let observed = observed.get(label).copied().unwrap_or_default();
            let class = match (observed.has_children, observed.closes_loop) {
                (true, true) => NodeClass::InternalCyclic,
                (true, false) => NodeClass::InternalAcyclic,
                // A closing label is also the root of its loop, so it always has a child.
                (false, _) => NodeClass::LeafAcyclic,
            };
            result.insert(label.to_string(), class);
        }
        result
    }

    fn insert(&mut self, label: String, class: NodeClass) {
        self.index.insert(label.clone(), self.classes.len());
        self.classes.push((label, class));
    }

    pub fn get(&self, label: &str) -> Option<NodeClass> {
        self.index.get(label).map(|&index| self.classes[index].1)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeClass)> + '_ {
        self.classes
            .iter()
            .map(|(label, class)| (label.as_str(), *class))
    }

    /// All labels, in the order they were first seen.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(|(label, _)| label.as_str())
    }

    /// The labels that belong to a node listing, in the order they were first seen.
    pub fn labels_with(&self, membership: Membership) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter(move |(_, class)| class.memberships().contains(membership))
            .map(|(label, _)| label)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl PartialEq for Classification {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(label, class)| other.get(label) == Some(class))
    }
}

impl Eq for Classification {}

/// Classifies every label that occurs in `subpaths`.
pub fn classify(subpaths: &SubpathSet) -> Classification {
    Classification::classify(subpaths)
}
