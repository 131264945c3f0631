//! Tests for creating and destroying bit sets

use bitset_algebra::{BitSet, BitSetError, ErrorKind, BITS_PER_BLOCK};

// =============================================================================
// Creation
// =============================================================================

#[test]
fn test_new_is_empty() {
    for capacity in [1, 7, 63, 64, 65, 200] {
        let set = BitSet::new(capacity).unwrap();
        assert_eq!(set.capacity(), capacity);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!((0..capacity).all(|e| !set.contains(e)));
    }
}

#[test]
fn test_block_count_rounds_up() {
    assert_eq!(BitSet::new(1).unwrap().size(), 1);
    assert_eq!(BitSet::new(BITS_PER_BLOCK).unwrap().size(), 1);
    assert_eq!(BitSet::new(BITS_PER_BLOCK + 1).unwrap().size(), 2);
    assert_eq!(BitSet::new(10 * BITS_PER_BLOCK).unwrap().size(), 10);
}

#[test]
fn test_zero_capacity_rejected() {
    let err = BitSet::new(0).unwrap_err();
    assert_eq!(err, BitSetError::ZeroCapacity);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_allocation_failure_reported() {
    let err = BitSet::new(usize::MAX).unwrap_err();
    assert!(matches!(err, BitSetError::Allocation { .. }));
    assert_eq!(err.kind(), ErrorKind::Allocation);
}

#[test]
fn test_blocks_start_zeroed() {
    let set = BitSet::new(130).unwrap();
    assert_eq!(set.as_blocks(), &[0, 0, 0]);
}

// =============================================================================
// with_elements
// =============================================================================

#[test]
fn test_with_elements() {
    let set = BitSet::with_elements(10, [2, 5, 9]).unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 5, 9]);
}

#[test]
fn test_with_elements_rejects_invalid() {
    let err = BitSet::with_elements(10, [2i32, -4]).unwrap_err();
    assert_eq!(err, BitSetError::PartiallyApplied { rejected: 1, total: 2 });
}

// =============================================================================
// Destruction
// =============================================================================

#[test]
fn test_destroy_consumes_set() {
    let set = BitSet::with_elements(64, [1, 2, 3]).unwrap();
    let copy = set.clone();
    set.destroy();
    // The clone owns its own storage.
    assert_eq!(copy.len(), 3);
}

#[test]
fn test_clone_does_not_alias() {
    let mut a = BitSet::new(16).unwrap();
    let b = a.clone();
    a.insert(3).unwrap();
    assert!(a.contains(3));
    assert!(!b.contains(3));
}
