//! # Layer 0: Primitives
//!
//! Building blocks shared by every set operation:
//! - `block.rs`: block counts, bit addressing and padding masks.
//! - `element.rs`: integer types accepted as elements.

pub mod block;
pub mod element;

pub use block::{block_or_zero, blocks_for, last_block_mask, locate};
pub use element::{Element, ElementValue};
