//! Tests for equality and subset relations across capacities

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use bitset_algebra::BitSet;

fn set(capacity: usize, elements: &[usize]) -> BitSet {
    BitSet::with_elements(capacity, elements.iter().copied()).unwrap()
}

fn hash_of(set: &BitSet) -> u64 {
    let mut hasher = DefaultHasher::new();
    set.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn test_equal_same_capacity() {
    assert_eq!(set(10, &[1, 2]), set(10, &[2, 1]));
    assert_ne!(set(10, &[1, 2]), set(10, &[1, 3]));
}

#[test]
fn test_equal_across_capacities() {
    // Same content, zero padding beyond the shorter capacity.
    assert_eq!(set(5, &[1, 3]), set(200, &[1, 3]));
    assert_eq!(set(1, &[]), set(1000, &[]));
}

#[test]
fn test_unequal_when_longer_has_extra_bits() {
    assert_ne!(set(5, &[1, 3]), set(200, &[1, 3, 150]));
    assert_ne!(set(200, &[1, 3, 64]), set(64, &[1, 3]));
}

#[test]
fn test_equality_laws() {
    let a = set(10, &[2, 9]);
    let b = set(70, &[2, 9]);
    let c = set(130, &[2, 9]);
    assert_eq!(a, a);
    assert_eq!(a == b, b == a);
    assert!(a == b && b == c && a == c);
}

#[test]
fn test_hash_matches_equality() {
    assert_eq!(hash_of(&set(5, &[1, 3])), hash_of(&set(300, &[1, 3])));
    assert_eq!(hash_of(&set(8, &[])), hash_of(&set(256, &[])));
}

// =============================================================================
// Subset
// =============================================================================

#[test]
fn test_subset_reflexive() {
    let a = set(100, &[0, 50, 99]);
    assert!(a.is_subset(&a));
    assert!(!a.is_strict_subset(&a));
}

#[test]
fn test_empty_is_subset_of_anything() {
    let empty = set(500, &[]);
    let small = set(3, &[1]);
    assert!(empty.is_subset(&small));
    assert!(empty.is_strict_subset(&small));
    assert!(set(3, &[]).is_subset(&set(3, &[])));
}

#[test]
fn test_subset_across_capacities() {
    let small = set(10, &[2, 5]);
    let large = set(100, &[2, 5, 80]);
    assert!(small.is_subset(&large));
    assert!(small.is_strict_subset(&large));
    assert!(!large.is_subset(&small));
}

#[test]
fn test_subset_fails_on_bit_beyond_other_capacity() {
    let large = set(100, &[2, 80]);
    let small = set(10, &[2]);
    assert!(!large.is_subset(&small));
}

#[test]
fn test_equal_sets_are_not_strict_subsets() {
    let a = set(10, &[1, 4]);
    let b = set(300, &[1, 4]);
    assert!(a.is_subset(&b));
    assert!(b.is_subset(&a));
    assert!(!a.is_strict_subset(&b));
}

#[test]
fn test_superset_and_disjoint() {
    let a = set(70, &[1, 2, 65]);
    let b = set(10, &[1, 2]);
    let c = set(130, &[3, 129]);
    assert!(a.is_superset(&b));
    assert!(!b.is_superset(&a));
    assert!(a.is_disjoint(&c));
    assert!(!a.is_disjoint(&b));
}

#[test]
fn test_max_capacity() {
    let a = set(10, &[]);
    let b = set(5, &[]);
    assert_eq!(BitSet::max_capacity(&a, &b), 10);
    assert_eq!(BitSet::max_capacity(&b, &a), 10);
}
