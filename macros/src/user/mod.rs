//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `bitset!` | function macro | Compile-time checked bit set literal |

mod bitset_lit;

pub use bitset_lit::{expand_bitset, BitSetInput};
