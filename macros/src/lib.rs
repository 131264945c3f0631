//! Procedural macros for bitset-algebra
//!
//! ## Example
//!
//! ```ignore
//! use bitset_algebra::bitset;
//!
//! let primes = bitset![16; 2, 3, 5, 7, 11, 13];
//! assert!(primes.contains(11));
//!
//! // Compile errors:
//! // bitset![0];          zero capacity
//! // bitset![8; 8];       out of range
//! // bitset![8; -1];      negative
//! // bitset![8; 3, 3];    duplicate
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Build a `BitSet` from a capacity and a list of elements.
///
/// # Usage
///
/// ```ignore
/// let empty = bitset![10];
/// let set = bitset![10; 2, 5, 9];
/// ```
///
/// Every element must be a non-negative integer literal below the capacity,
/// and each may appear once. Violations are reported at compile time on the
/// offending literal.
#[proc_macro]
pub fn bitset(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::BitSetInput);
    user::expand_bitset(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
