//! Storage and rendering configuration.
//!
//! These constants fix the physical layout of every [`BitSet`](crate::BitSet).
//! None of them changes the logical capacity seen by callers.

/// One storage word.
pub type Block = u64;

/// Number of bits held by a single [`Block`].
pub const BITS_PER_BLOCK: usize = Block::BITS as usize;

/// Minimum number of bytes reserved for a render buffer before any text is
/// written to it.
pub const MIN_BUFFER_SIZE: usize = 1024;

/// How [`BitSet::render`](crate::BitSet::render) lays out a set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderStyle {
    /// Ascending element list: `{2, 5, 9}`.
    #[default]
    Elements,
    /// One `0`/`1` character per index in `0..capacity`, index 0 first.
    Bits,
}
