//! The `BitSet` type: storage, construction and destruction.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::config::{BITS_PER_BLOCK, Block};
use crate::error::{BitSetError, Result};
use crate::primitives::{Element, blocks_for, last_block_mask};

/// A set of integers drawn from `[0, capacity)`, packed one bit per element.
///
/// The capacity is fixed at construction. Bits at or beyond the capacity in the
/// last block are padding and always stay zero.
#[derive(Clone)]
pub struct BitSet {
    pub(crate) blocks: Box<[Block]>,
    pub(crate) capacity: usize,
}

impl BitSet {
    /// Creates an empty set able to hold elements in `[0, capacity)`.
    ///
    /// Fails with [`BitSetError::ZeroCapacity`] for a zero capacity and with
    /// [`BitSetError::Allocation`] when the blocks cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(BitSetError::ZeroCapacity);
        }
        let blocks = try_zeroed_blocks(blocks_for(capacity))?;
        log::trace!("[bitset] created capacity={} blocks={}", capacity, blocks.len());
        Ok(Self { blocks, capacity })
    }

    /// Creates a set holding exactly `elements`.
    ///
    /// Unlike [`insert_many`](Self::insert_many), any rejected element fails
    /// the whole construction.
    pub fn with_elements<E, I>(capacity: usize, elements: I) -> Result<Self>
    where
        E: Element,
        I: IntoIterator<Item = E>,
    {
        let mut set = Self::new(capacity)?;
        set.insert_many(elements)?;
        Ok(set)
    }

    /// Releases the set's storage.
    ///
    /// Equivalent to dropping the set; the handle is consumed and cannot be
    /// used again.
    pub fn destroy(self) {
        log::trace!("[bitset] destroyed capacity={}", self.capacity);
    }

    /// Exclusive upper bound on the elements this set can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of storage blocks.
    #[inline]
    pub fn size(&self) -> usize {
        self.blocks.len()
    }

    /// The raw storage words, least-significant bit first.
    #[inline]
    pub fn as_blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The larger capacity of two sets.
    #[inline]
    pub fn max_capacity(a: &BitSet, b: &BitSet) -> usize {
        a.capacity.max(b.capacity)
    }

    /// Zeroed set for an already validated capacity. Aborts on allocation
    /// failure, like `Vec`.
    pub(crate) fn zeroed(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            blocks: alloc::vec![0; blocks_for(capacity)].into_boxed_slice(),
            capacity,
        }
    }

    /// Clears every padding bit in the last block.
    #[inline]
    pub(crate) fn trim_padding(&mut self) {
        let mask = last_block_mask(self.capacity);
        if let Some(last) = self.blocks.last_mut() {
            *last &= mask;
        }
    }

    /// Builds a set from blocks computed by the `bitset!` macro.
    ///
    /// Padding bits are cleared and missing blocks are zero-filled. The
    /// capacity is kept as given and must be non-zero; `bitset!` rejects a
    /// zero capacity before expanding to this call.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[doc(hidden)]
    pub fn __from_verified_blocks(capacity: usize, blocks: &[Block]) -> Self {
        assert!(capacity > 0, "bit set capacity must be greater than zero");
        let mut set = Self::zeroed(capacity);
        for (dst, &src) in set.blocks.iter_mut().zip(blocks) {
            *dst = src;
        }
        set.trim_padding();
        set
    }
}

/// Reserves `count` zeroed blocks without aborting on failure.
fn try_zeroed_blocks(count: usize) -> Result<Box<[Block]>> {
    let mut blocks: Vec<Block> = Vec::new();
    blocks.try_reserve_exact(count).map_err(|_| BitSetError::Allocation {
        bytes: count.saturating_mul(BITS_PER_BLOCK / 8),
    })?;
    blocks.resize(count, 0);
    Ok(blocks.into_boxed_slice())
}
