//! Word-level addressing.
//!
//! Element `e` lives in block `e / BITS_PER_BLOCK` at bit `e % BITS_PER_BLOCK`,
//! least-significant bit first.

use crate::config::{BITS_PER_BLOCK, Block};

/// Number of blocks needed to hold `capacity` bits.
#[inline]
pub const fn blocks_for(capacity: usize) -> usize {
    capacity.div_ceil(BITS_PER_BLOCK)
}

/// Block index and single-bit mask for `index`.
#[inline]
pub const fn locate(index: usize) -> (usize, Block) {
    (index / BITS_PER_BLOCK, 1 << (index % BITS_PER_BLOCK))
}

/// Mask of the valid bits in the last block of a set with `capacity` bits.
///
/// A capacity that fills its last block exactly keeps every bit.
#[inline]
pub const fn last_block_mask(capacity: usize) -> Block {
    match capacity % BITS_PER_BLOCK {
        0 => Block::MAX,
        used => (1 << used) - 1,
    }
}

/// Block `index` of `blocks`, or zero past the end (zero-extension).
#[inline]
pub fn block_or_zero(blocks: &[Block], index: usize) -> Block {
    blocks.get(index).copied().unwrap_or(0)
}
