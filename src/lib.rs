#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std::error::Error and the stdout sink
// - macros: default, re-exports the compile-time checked `bitset!` literal

//! # bitset-algebra
//!
//! Fixed-capacity sets of non-negative integers, packed one bit per element,
//! with the full set algebra over them.
//!
//! ## Architecture
//!
//! A [`BitSet`] owns `ceil(capacity / 64)` words and a declared capacity. The
//! capacity is a hard ceiling for the lifetime of the set: elements outside
//! `[0, capacity)` are rejected, never stored.
//!
//! ```text
//! element e  ->  block e / 64, bit e % 64 (LSB first)
//!
//! capacity 10:   block 0 = ......................................1000100100
//!                          ^ padding (always zero)            ^ bits 0..9
//! ```
//!
//! Binary operations between sets of different capacities zero-extend the
//! shorter operand and produce a set with the larger capacity.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Block addressing, padding masks, Element conversion            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Bit Set                                                 |
//! |  - Storage, Membership, Comparison, Algebra, Inspection           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - bitset! literal, output sinks, prelude                         |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use bitset_algebra::prelude::*;
//!
//! let mut a = BitSet::new(10)?;
//! a.insert_many([2, 5, 9])?;
//! assert!(a.contains(5));
//!
//! let b = bitset![5; 1, 3];
//! let u = a.union(&b)?;
//! assert_eq!(u.capacity(), 10);
//! u.print(bitset_algebra::output::stdout)?;   // {1, 2, 3, 5, 9}
//! ```

// Allow `::bitset_algebra` paths emitted by `bitset!` to resolve inside the crate itself
extern crate self as bitset_algebra;

extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Bit Set
// =============================================================================
pub mod set;

// =============================================================================
// Layer 2: User API
// =============================================================================
pub mod config;
pub mod error;
pub mod output;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use config::{BITS_PER_BLOCK, Block, MIN_BUFFER_SIZE, RenderStyle};
pub use error::{BitSetError, ErrorKind, Result};
pub use primitives::{Element, ElementValue};
pub use set::{BitSet, Iter};

/// Compile-time checked bit set literal: `bitset![capacity; e0, e1, ...]`.
#[cfg(feature = "macros")]
pub use macros::bitset;

/// Common items for working with bit sets.
pub mod prelude {
    pub use crate::config::RenderStyle;
    pub use crate::error::{BitSetError, ErrorKind};
    pub use crate::primitives::{Element, ElementValue};
    pub use crate::set::BitSet;
    #[cfg(feature = "macros")]
    pub use macros::bitset;
}
