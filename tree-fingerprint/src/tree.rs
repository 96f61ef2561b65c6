// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Labeled trees and forests of them.
//!
//! A [`Node`][] owns its children outright and has no parent pointers, so a tree can never contain
//! a physical cycle.  A label that repeats along a root-to-leaf chain is what the rest of this
//! crate calls a _semantic_ cycle.
//!
//! Trees have a printable form, which is also the form tree dumps are stored in on disk.  Each
//! node is written on its own line in pre-order, prefixed by one [`INDENT`][] unit per level of
//! depth:
//!
//! ```text
//! Program
//! | Decl
//! | Stmt
//! | | Decl
//! ```
//!
//! [`Node`]: struct.Node.html
//! [`INDENT`]: constant.INDENT.html

use std::collections::VecDeque;
use std::fmt::Display;
use std::iter::FromIterator;
use std::str::FromStr;

use thiserror::Error;

/// The unit of indentation marking one level of depth in the printable form of a tree.
pub const INDENT: &str = "| ";

//-------------------------------------------------------------------------------------------------
// Nodes

/// A labeled tree node with an ordered list of exclusively owned children.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Node {
    label: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    children: Vec<Node>,
}

impl Node {
    /// Creates a new node with no children.
    pub fn new<S: Into<String>>(label: S) -> Node {
        Node {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Creates a new node with the given children, in order.
    pub fn with_children<S, I>(label: S, children: I) -> Node
    where
        S: Into<String>,
        I: IntoIterator<Item = Node>,
    {
        Node {
            label: label.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Creates a linear chain of nodes, each label becoming the only child of the previous one.
    /// Returns `None` if there are no labels.
    pub fn chain<I, S>(labels: I) -> Option<Node>
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: DoubleEndedIterator,
        S: Into<String>,
    {
        let mut labels = labels.into_iter().rev();
        let mut head = Node::new(labels.next()?);
        for label in labels {
            head = Node::with_children(label, std::iter::once(head));
        }
        Some(head)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child.  Only meant for building up a tree that the caller owns.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Returns the number of nodes in this tree, including this one.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator over all nodes of this tree in pre-order, starting with this node.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Returns all nodes of this tree with the given label, in pre-order.  This node is included
    /// if it matches.
    pub fn find_all<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.iter().filter(move |node| node.label == label)
    }

    /// Returns the shallowest descendant with the given label, not including this node.  Among
    /// descendants at the same depth, the leftmost one wins.
    pub fn find_nearest(&self, label: &str) -> Option<&Node> {
        let mut queue = self.children.iter().collect::<VecDeque<_>>();
        while let Some(node) = queue.pop_front() {
            if node.label == label {
                return Some(node);
            }
            queue.extend(node.children.iter());
        }
        None
    }

    /// Returns the immediate children with the given label.
    pub fn children_labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |child| child.label == label)
    }

    /// Returns all leaves of this tree, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.iter().filter(|node| node.is_leaf())
    }
}

/// Pre-order traversal of a tree, driven by an explicit stack.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut stack = vec![(0usize, self)];
        while let Some((depth, node)) = stack.pop() {
            for _ in 0..depth {
                f.write_str(INDENT)?;
            }
            writeln!(f, "{}", node.label)?;
            stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        }
        Ok(())
    }
}

impl FromStr for Node {
    type Err = ParseTreeError;

    /// Parses the printable form of exactly one tree.
    fn from_str(s: &str) -> Result<Node, ParseTreeError> {
        let mut roots = parse_roots(s)?;
        match roots.len() {
            0 => Err(ParseTreeError::Empty),
            1 => Ok(roots.remove(0).1),
            _ => Err(ParseTreeError::MultipleRoots { line: roots[1].0 }),
        }
    }
}

//-------------------------------------------------------------------------------------------------
// Forests

/// An ordered collection of root trees, one per source unit.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Forest {
    trees: Vec<Node>,
}

impl Forest {
    pub fn new() -> Forest {
        Forest::default()
    }

    /// Parses the printable form of a sequence of trees.  Every line without indentation starts a
    /// new tree.
    pub fn parse(s: &str) -> Result<Forest, ParseTreeError> {
        let trees = parse_roots(s)?.into_iter().map(|(_, tree)| tree).collect();
        Ok(Forest { trees })
    }

    pub fn push(&mut self, tree: Node) {
        self.trees.push(tree);
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn trees(&self) -> &[Node] {
        &self.trees
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.trees.iter()
    }
}

impl FromIterator<Node> for Forest {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Forest {
        Forest {
            trees: iter.into_iter().collect(),
        }
    }
}

impl Extend<Node> for Forest {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.trees.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.iter()
    }
}

impl IntoIterator for Forest {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.into_iter()
    }
}

impl Display for Forest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for tree in &self.trees {
            tree.fmt(f)?;
        }
        Ok(())
    }
}

//-------------------------------------------------------------------------------------------------
// Parsing

/// An error parsing the printable form of a tree.  Line numbers start at 1.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseTreeError {
    #[error("no tree found")]
    Empty,
    #[error("line {line}: found a second root where a single tree was expected")]
    MultipleRoots { line: usize },
    #[error("line {line}: indented node appears before any root")]
    MissingRoot { line: usize },
    #[error("line {line}: depth {depth} is more than one level below the previous node")]
    DepthJump { line: usize, depth: usize },
    #[error("line {line}: missing label")]
    MissingLabel { line: usize },
}

/// Parses a sequence of trees, returning each root with the line it started on.
fn parse_roots(s: &str) -> Result<Vec<(usize, Node)>, ParseTreeError> {
    let mut roots = Vec::new();
    // The open nodes along the current root-to-node chain; `open[d]` is at depth `d`.
    let mut open: Vec<Node> = Vec::new();
    let mut root_line = 0;
    for (index, line) in s.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut depth = 0;
        let mut label = line;
        while let Some(rest) = label.strip_prefix(INDENT) {
            label = rest;
            depth += 1;
        }
        let label = label.trim_end();
        if label.is_empty() {
            return Err(ParseTreeError::MissingLabel { line: line_number });
        }

        if depth == 0 {
            if let Some(root) = close_all(&mut open) {
                roots.push((root_line, root));
            }
            root_line = line_number;
        } else if open.is_empty() {
            return Err(ParseTreeError::MissingRoot { line: line_number });
        } else if depth > open.len() {
            return Err(ParseTreeError::DepthJump {
                line: line_number,
                depth,
            });
        } else {
            close_to(&mut open, depth);
        }
        open.push(Node::new(label));
    }
    if let Some(root) = close_all(&mut open) {
        roots.push((root_line, root));
    }
    Ok(roots)
}

/// Closes open nodes until exactly `depth` remain, attaching each to its parent.
fn close_to(open: &mut Vec<Node>, depth: usize) {
    while open.len() > depth.max(1) {
        if let Some(node) = open.pop() {
            if let Some(parent) = open.last_mut() {
                parent.push_child(node);
            }
        }
    }
}

fn close_all(open: &mut Vec<Node>) -> Option<Node> {
    close_to(open, 1);
    open.pop()
}
