//! Set algebra: union, intersection, difference, symmetric difference and
//! complement.
//!
//! Binary operations produce a set with the larger of the two capacities.
//! The shorter operand is zero-extended, so its missing blocks contribute
//! all-zero words. Operands are never mutated; every result owns fresh
//! storage.

use super::BitSet;
use crate::config::Block;
use crate::error::Result;
use crate::primitives::block_or_zero;

impl BitSet {
    /// Overwrites `self` with `op` applied block-wise to zero-extended `a`
    /// and `b`, then clears padding.
    fn fill_combined(&mut self, a: &BitSet, b: &BitSet, op: fn(Block, Block) -> Block) {
        for (i, word) in self.blocks.iter_mut().enumerate() {
            *word = op(block_or_zero(&a.blocks, i), block_or_zero(&b.blocks, i));
        }
        self.trim_padding();
    }

    fn fill_complement(&mut self, source: &BitSet) {
        for (word, &src) in self.blocks.iter_mut().zip(source.blocks.iter()) {
            *word = !src;
        }
        // Inversion sets every padding bit; they must not become elements.
        self.trim_padding();
    }

    /// Creates the complement of the set within `[0, capacity)`.
    pub fn complement(&self) -> Result<BitSet> {
        let mut out = BitSet::new(self.capacity)?;
        out.fill_complement(self);
        Ok(out)
    }
}

/// Generates, for each operation:
/// - a fallible method returning a new set,
/// - an in-place `<name>_with` method that keeps `self`'s capacity,
/// - the borrowed operator impl (`&a | &b`, ...).
macro_rules! set_operation {
    ($(
        $(#[$doc:meta])*
        $name:ident => $Trait:ident::$method:ident, |$a:ident, $b:ident| $body:expr;
    )*) => {
        paste::paste! {
            $(
                #[inline]
                fn [<$name _block>]($a: Block, $b: Block) -> Block {
                    $body
                }
            )*

            impl BitSet {
                $(
                    $(#[$doc])*
                    pub fn $name(&self, other: &BitSet) -> Result<BitSet> {
                        let mut out = BitSet::new(BitSet::max_capacity(self, other))?;
                        out.fill_combined(self, other, [<$name _block>]);
                        Ok(out)
                    }

                    #[doc = "In-place [`" $name "`](Self::" $name "); `other` is zero-extended or truncated to `self`'s capacity."]
                    pub fn [<$name _with>](&mut self, other: &BitSet) {
                        for (i, word) in self.blocks.iter_mut().enumerate() {
                            *word = [<$name _block>](*word, block_or_zero(&other.blocks, i));
                        }
                        self.trim_padding();
                    }
                )*
            }

            $(
                impl core::ops::$Trait<&BitSet> for &BitSet {
                    type Output = BitSet;

                    fn $method(self, other: &BitSet) -> BitSet {
                        let mut out = BitSet::zeroed(BitSet::max_capacity(self, other));
                        out.fill_combined(self, other, [<$name _block>]);
                        out
                    }
                }
            )*
        }
    };
}

set_operation! {
    /// Creates `self ∪ other`: elements in either set.
    union => BitOr::bitor, |a, b| a | b;

    /// Creates `self ∩ other`: elements in both sets.
    intersection => BitAnd::bitand, |a, b| a & b;

    /// Creates `self − other`: elements of `self` not in `other`.
    difference => Sub::sub, |a, b| a & !b;

    /// Creates `self △ other`: elements in exactly one of the sets.
    symmetric_difference => BitXor::bitxor, |a, b| a ^ b;
}

impl core::ops::Not for &BitSet {
    type Output = BitSet;

    fn not(self) -> BitSet {
        let mut out = BitSet::zeroed(self.capacity);
        out.fill_complement(self);
        out
    }
}
