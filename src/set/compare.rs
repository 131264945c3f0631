//! Equality, subset tests and population queries.
//!
//! Sets of different capacities are compared as if the shorter one were
//! zero-extended: a bit present only in the longer set is a real difference,
//! never a "don't care".

use core::hash::{Hash, Hasher};

use super::BitSet;
use crate::config::Block;
use crate::primitives::block_or_zero;

impl BitSet {
    /// Block pairs over the union of both storages, zero-extended.
    fn zip_extended<'a>(&'a self, other: &'a BitSet) -> impl Iterator<Item = (Block, Block)> + 'a {
        let len = self.blocks.len().max(other.blocks.len());
        (0..len).map(move |i| (block_or_zero(&self.blocks, i), block_or_zero(&other.blocks, i)))
    }

    /// Storage without trailing all-zero blocks.
    fn significant_blocks(&self) -> &[Block] {
        let end = self.blocks.iter().rposition(|&word| word != 0).map_or(0, |i| i + 1);
        &self.blocks[..end]
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns true if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&word| word == 0)
    }

    /// Returns true if every element of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set.
    pub fn is_subset(&self, other: &BitSet) -> bool {
        self.zip_extended(other).all(|(a, b)| a & !b == 0)
    }

    /// Returns true if `self` is a subset of `other` and the two differ.
    pub fn is_strict_subset(&self, other: &BitSet) -> bool {
        self.is_subset(other) && self != other
    }

    /// Returns true if every element of `other` is also in `self`.
    pub fn is_superset(&self, other: &BitSet) -> bool {
        other.is_subset(self)
    }

    /// Returns true if the sets share no element.
    pub fn is_disjoint(&self, other: &BitSet) -> bool {
        self.blocks.iter().zip(other.blocks.iter()).all(|(a, b)| a & b == 0)
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.zip_extended(other).all(|(a, b)| a == b)
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_blocks().hash(state);
    }
}
