// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use itertools::Itertools;
use pretty_assertions::assert_eq;

use tree_fingerprint::stats::*;

#[test]
fn bounds_track_extremes() {
    let mut bounds = Bounds::new(3);
    bounds.record(5);
    bounds.record(1);
    bounds.record(4);
    assert_eq!(Bounds { min: 1, max: 5 }, bounds);
    assert!(bounds.contains(1));
    assert!(bounds.contains(5));
    assert!(!bounds.contains(0));
    assert!(!bounds.contains(6));
    assert_eq!("1 5", bounds.to_string());
}

#[test]
fn bounds_widen_when_merged() {
    let mut bounds = Bounds::new(2);
    bounds += Bounds { min: 3, max: 7 };
    assert_eq!(Bounds { min: 2, max: 7 }, bounds);
}

#[test]
fn table_keeps_first_recorded_order() {
    let mut table = BoundsTable::new();
    table.record("b".to_string(), 2);
    table.record("a".to_string(), 1);
    table.record("b".to_string(), 4);
    assert_eq!(vec!["b", "a"], table.keys().collect_vec());
    assert_eq!(Some(Bounds { min: 2, max: 4 }), table.get("b"));
    assert_eq!(None, table.get("c"));
    assert_eq!("b 2 4\na 1 1\n", table.display().to_string());
}

#[test]
fn table_equality_ignores_order() {
    let mut left = BoundsTable::new();
    left.record(("a".to_string(), "b".to_string()), 1);
    left.record(("a".to_string(), "c".to_string()), 2);
    let mut right = BoundsTable::new();
    right.record(("a".to_string(), "c".to_string()), 2);
    right.record(("a".to_string(), "b".to_string()), 1);
    assert_eq!(left, right);

    right.record(("a".to_string(), "b".to_string()), 3);
    assert_ne!(left, right);
}

#[test]
fn can_merge_tables() {
    let mut left = BoundsTable::new();
    left.record("a".to_string(), 2);
    let mut right = BoundsTable::new();
    right.record("a".to_string(), 5);
    right.record("b".to_string(), 1);
    left += right;
    assert_eq!("a 2 5\nb 1 1\n", left.display().to_string());
}

#[test]
fn can_map_keys() {
    let mut table = BoundsTable::new();
    table.record("x1", 1);
    table.record("x2", 3);
    table.record("y", 2);
    let mapped = table.map_keys(|key| key[..1].to_string());
    assert_eq!("x 1 3\ny 2 2\n", mapped.display().to_string());
}
