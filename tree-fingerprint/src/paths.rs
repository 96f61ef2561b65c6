// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Root-to-leaf chains of labels.
//!
//! A [`Chain`][] is the label sequence along one root-to-leaf path of a tree.  It is an owned copy
//! of those labels, so later steps can slice and rearrange chains freely without touching the tree
//! they came from.  [`Node::paths`][] enumerates the chains of a tree lazily, in depth-first
//! order, leftmost leaf first.
//!
//! [`Chain`]: struct.Chain.html
//! [`Node::paths`]: ../tree/struct.Node.html#method.paths

use std::convert::TryFrom;
use std::fmt::Display;

use itertools::Itertools;
use thiserror::Error;

use crate::tree::Node;
use crate::Stage;
use crate::StructuralError;

/// A non-empty linear sequence of labels, from a root to a leaf.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct Chain {
    labels: Vec<String>,
}

impl Chain {
    /// Creates a chain from a sequence of labels.  Returns `None` if there are no labels.
    pub fn new<I, S>(labels: I) -> Option<Chain>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels.into_iter().map(Into::into).collect::<Vec<_>>();
        Chain::try_from(labels).ok()
    }

    pub(crate) fn from_slice(labels: &[String]) -> Chain {
        debug_assert!(!labels.is_empty());
        Chain {
            labels: labels.to_vec(),
        }
    }

    /// Converts a linear tree (every node has at most one child) into a chain.  Fails if some node
    /// along the way branches.
    pub fn from_node(node: &Node, stage: Stage) -> Result<Chain, StructuralError> {
        let mut labels = Vec::new();
        let mut current = node;
        loop {
            labels.push(current.label().to_string());
            match current.children() {
                [] => break,
                [child] => current = child,
                children => {
                    return Err(StructuralError::NotAChain {
                        stage,
                        label: current.label().to_string(),
                        children: children.len(),
                    })
                }
            }
        }
        Ok(Chain { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn root(&self) -> &str {
        &self.labels[0]
    }

    pub fn leaf(&self) -> &str {
        &self.labels[self.labels.len() - 1]
    }

    /// Returns whether the leaf carries the same label as the root of a chain of at least two
    /// labels.
    pub fn is_closed(&self) -> bool {
        self.labels.len() >= 2 && self.root() == self.leaf()
    }

    /// Keeps the first `len` labels.  Has no effect if the chain is not longer than that.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.labels.truncate(len.max(1));
    }

    /// Builds the equivalent linear tree.
    pub fn to_node(&self) -> Node {
        // Chains are never empty, so there is always a head.
        Node::chain(self.labels.iter().cloned()).unwrap_or_default()
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.labels.iter().format(" -> "))
    }
}

/// Every chain has at least one label.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("a chain must have at least one label")]
pub struct EmptyChainError;

impl TryFrom<Vec<String>> for Chain {
    type Error = EmptyChainError;

    fn try_from(labels: Vec<String>) -> Result<Chain, EmptyChainError> {
        if labels.is_empty() {
            return Err(EmptyChainError);
        }
        Ok(Chain { labels })
    }
}

impl From<Chain> for Vec<String> {
    fn from(chain: Chain) -> Vec<String> {
        chain.labels
    }
}

//-------------------------------------------------------------------------------------------------
// Path enumeration

impl Node {
    /// Returns every root-to-leaf chain of this tree, one per leaf, leftmost leaf first.
    pub fn paths(&self) -> Paths<'_> {
        Paths {
            stack: vec![(self, 0)],
            prefix: Vec::new(),
        }
    }

    /// Returns this tree as a chain, if it is linear.
    pub fn as_chain(&self) -> Result<Chain, StructuralError> {
        Chain::from_node(self, Stage::PathEnumeration)
    }
}

/// Depth-first enumeration of the root-to-leaf chains of a tree.
pub struct Paths<'a> {
    stack: Vec<(&'a Node, usize)>,
    prefix: Vec<&'a str>,
}

impl<'a> Iterator for Paths<'a> {
    type Item = Chain;

    fn next(&mut self) -> Option<Chain> {
        while let Some((node, depth)) = self.stack.pop() {
            self.prefix.truncate(depth);
            self.prefix.push(node.label());
            if node.is_leaf() {
                return Some(Chain {
                    labels: self.prefix.iter().map(|label| label.to_string()).collect(),
                });
            }
            self.stack
                .extend(node.children().iter().rev().map(|child| (child, depth + 1)));
        }
        None
    }
}
