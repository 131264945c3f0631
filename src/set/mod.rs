//! # Layer 1: Bit Set
//!
//! The fixed-capacity set and everything it can do:
//!
//! - **Storage**: `BitSet` (owned block buffer + declared capacity).
//! - **Membership**: `insert`, `remove`, `toggle`, `insert_many`, `contains`.
//! - **Comparison**: equality, subset/superset, disjointness.
//! - **Algebra**: union, intersection, difference, symmetric difference,
//!   complement.
//! - **Inspection**: iteration, rendering, printing.

mod bitset;
mod compare;
mod inspect;
mod membership;
mod ops;

pub use bitset::BitSet;
pub use inspect::Iter;
