// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;

use fxhash::FxHashMap;

/// Running `(min, max)` bounds of an observed count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    /// Bounds of a single observation.
    pub fn new(count: usize) -> Bounds {
        Bounds {
            min: count,
            max: count,
        }
    }

    pub fn record(&mut self, count: usize) {
        self.min = self.min.min(count);
        self.max = self.max.max(count);
    }

    pub fn contains(&self, count: usize) -> bool {
        self.min <= count && count <= self.max
    }
}

impl std::ops::AddAssign<Self> for Bounds {
    fn add_assign(&mut self, rhs: Self) {
        self.min = self.min.min(rhs.min);
        self.max = self.max.max(rhs.max);
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.min, self.max)
    }
}

/// A key of a [`BoundsTable`][] that is written as whitespace-separated fields.
///
/// [`BoundsTable`]: struct.BoundsTable.html
pub trait TableKey: Clone + Eq + Hash {
    /// The number of fields the key occupies on a line.
    const FIELDS: usize;

    fn fmt_fields(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result;

    /// Builds a key from exactly `FIELDS` fields.
    fn from_fields(fields: &[&str]) -> Self;
}

impl TableKey for String {
    const FIELDS: usize = 1;

    fn fmt_fields(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self)
    }

    fn from_fields(fields: &[&str]) -> Self {
        fields[0].to_string()
    }
}

impl TableKey for (String, String) {
    const FIELDS: usize = 2;

    fn fmt_fields(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }

    fn from_fields(fields: &[&str]) -> Self {
        (fields[0].to_string(), fields[1].to_string())
    }
}

/// Bounds per key, remembering the order in which keys were first recorded.
///
/// Equality ignores that order: two tables are equal if they hold the same bounds for the same
/// keys.
#[derive(Clone, Debug)]
pub struct BoundsTable<K>
where
    K: Eq + Hash,
{
    entries: Vec<(K, Bounds)>,
    index: FxHashMap<K, usize>,
}

impl<K: Eq + Hash> Default for BoundsTable<K> {
    fn default() -> Self {
        BoundsTable {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<K: Clone + Eq + Hash> BoundsTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one observation of `count` for `key`.
    pub fn record(&mut self, key: K, count: usize) {
        self.record_bounds(key, Bounds::new(count));
    }

    /// Widens the bounds of `key` to include `bounds`.
    pub fn record_bounds(&mut self, key: K, bounds: Bounds) {
        match self.index.get(&key) {
            Some(&index) => self.entries[index].1 += bounds,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, bounds));
            }
        }
    }

    /// Converts every key, merging the bounds of keys that become equal.
    pub fn map_keys<L, F>(self, mut f: F) -> BoundsTable<L>
    where
        L: Clone + Eq + Hash,
        F: FnMut(K) -> L,
    {
        let mut result = BoundsTable::new();
        for (key, bounds) in self.entries {
            result.record_bounds(f(key), bounds);
        }
        result
    }
}

impl<K: Eq + Hash> BoundsTable<K> {
    pub fn get<Q>(&self, key: &Q) -> Option<Bounds>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&index| self.entries[index].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Iterates over all entries in the order their keys were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Bounds)> + '_ {
        self.entries.iter().map(|(key, bounds)| (key, *bounds))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: TableKey> BoundsTable<K> {
    /// Returns a `Display` implementation that writes one `<key fields> <min> <max>` line per
    /// entry.
    pub fn display(&self) -> impl Display + '_ {
        DisplayTable(self)
    }
}

struct DisplayTable<'a, K: Eq + Hash>(&'a BoundsTable<K>);

impl<'a, K: TableKey> Display for DisplayTable<'a, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (key, bounds) in self.0.iter() {
            key.fmt_fields(f)?;
            writeln!(f, " {}", bounds)?;
        }
        Ok(())
    }
}

impl<K: Eq + Hash> PartialEq for BoundsTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, bounds)| other.get(key) == Some(*bounds))
    }
}

impl<K: Eq + Hash> Eq for BoundsTable<K> {}

impl<K> std::ops::AddAssign<Self> for BoundsTable<K>
where
    K: Clone + Eq + Hash,
{
    fn add_assign(&mut self, rhs: Self) {
        for (key, bounds) in rhs.entries {
            self.record_bounds(key, bounds);
        }
    }
}

impl<K> std::ops::AddAssign<&Self> for BoundsTable<K>
where
    K: Clone + Eq + Hash,
{
    fn add_assign(&mut self, rhs: &Self) {
        for (key, bounds) in &rhs.entries {
            self.record_bounds(key.clone(), *bounds);
        }
    }
}
