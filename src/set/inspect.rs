//! Iteration and rendering of set contents.

use alloc::string::String;
use core::fmt::{self, Write};
use core::iter::FusedIterator;

use super::BitSet;
use crate::config::{BITS_PER_BLOCK, Block, MIN_BUFFER_SIZE, RenderStyle};
use crate::error::{BitSetError, Result};

/// Ascending iterator over the elements of a [`BitSet`].
#[derive(Clone)]
pub struct Iter<'a> {
    blocks: &'a [Block],
    block: usize,
    // Bits of `blocks[block]` not yet yielded.
    pending: Block,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pending == 0 {
            self.block += 1;
            self.pending = *self.blocks.get(self.block)?;
        }
        let bit = self.pending.trailing_zeros() as usize;
        self.pending &= self.pending - 1;
        Some(self.block * BITS_PER_BLOCK + bit)
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl BitSet {
    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            blocks: &self.blocks,
            block: 0,
            pending: self.blocks.first().copied().unwrap_or(0),
        }
    }

    /// Renders the set as text in the given style.
    ///
    /// The buffer is reserved up front, at least [`MIN_BUFFER_SIZE`] bytes;
    /// a failed reservation is reported instead of aborting.
    pub fn render(&self, style: RenderStyle) -> Result<String> {
        let wanted = match style {
            RenderStyle::Elements => MIN_BUFFER_SIZE,
            RenderStyle::Bits => self.capacity.max(MIN_BUFFER_SIZE),
        };
        let mut out = String::new();
        out.try_reserve(wanted)
            .map_err(|_| BitSetError::Allocation { bytes: wanted })?;

        match style {
            RenderStyle::Elements => write!(out, "{}", self)?,
            RenderStyle::Bits => {
                for index in 0..self.capacity {
                    out.push(if self.contains(index) { '1' } else { '0' });
                }
            }
        }
        Ok(out)
    }

    /// Renders the set as an ascending element list and hands the text to
    /// `output`.
    ///
    /// `output` runs only when rendering succeeded.
    pub fn print<F: FnOnce(&str)>(&self, output: F) -> Result<()> {
        self.print_with(RenderStyle::Elements, output)
    }

    /// [`print`](Self::print) with an explicit [`RenderStyle`].
    pub fn print_with<F: FnOnce(&str)>(&self, style: RenderStyle, output: F) -> Result<()> {
        let text = self.render(style)?;
        output(&text);
        Ok(())
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_char('}')
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSet")
            .field("capacity", &self.capacity)
            .field("elements", &format_args!("{}", self))
            .finish()
    }
}
