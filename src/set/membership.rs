//! Single-element and bulk membership operations.

use super::BitSet;
use crate::error::{BitSetError, Result};
use crate::primitives::{Element, locate};

impl BitSet {
    /// Validates `element` against this set's range and returns its index.
    fn index_of<E: Element>(&self, element: E) -> Result<usize> {
        if element.is_negative() {
            return Err(BitSetError::NegativeElement { element: element.value() });
        }
        match element.to_index() {
            Some(index) if index < self.capacity => Ok(index),
            _ => Err(BitSetError::OutOfRange {
                element: element.value(),
                capacity: self.capacity,
            }),
        }
    }

    /// [`index_of`](Self::index_of) for mutations; rejections are logged.
    fn mutation_index<E: Element>(&self, element: E, op: &str) -> Result<usize> {
        self.index_of(element).inspect_err(|err| {
            log::debug!("[bitset] {} rejected: {}", op, err);
        })
    }

    /// Returns true if `element` is in the set.
    ///
    /// Elements outside `[0, capacity)` are never present.
    pub fn contains<E: Element>(&self, element: E) -> bool {
        match self.index_of(element) {
            Ok(index) => {
                let (block, mask) = locate(index);
                self.blocks[block] & mask != 0
            }
            Err(_) => false,
        }
    }

    /// Adds `element` to the set.
    ///
    /// Returns `Ok(true)` if it was newly added and `Ok(false)` if it was
    /// already present. Negative and out-of-range elements are rejected and
    /// leave the set unchanged.
    pub fn insert<E: Element>(&mut self, element: E) -> Result<bool> {
        let index = self.mutation_index(element, "insert")?;
        let (block, mask) = locate(index);
        let word = &mut self.blocks[block];
        let added = *word & mask == 0;
        *word |= mask;
        Ok(added)
    }

    /// Removes `element` from the set.
    ///
    /// Returns `Ok(true)` if it was present and `Ok(false)` if it was in range
    /// but absent. Negative and out-of-range elements are an error, so the
    /// two no-op cases stay distinguishable.
    pub fn remove<E: Element>(&mut self, element: E) -> Result<bool> {
        let index = self.mutation_index(element, "remove")?;
        let (block, mask) = locate(index);
        let word = &mut self.blocks[block];
        let removed = *word & mask != 0;
        *word &= !mask;
        Ok(removed)
    }

    /// Flips membership of `element`, returning whether it is now present.
    pub fn toggle<E: Element>(&mut self, element: E) -> Result<bool> {
        let index = self.mutation_index(element, "toggle")?;
        let (block, mask) = locate(index);
        let word = &mut self.blocks[block];
        *word ^= mask;
        Ok(*word & mask != 0)
    }

    /// Adds every element of `elements`, skipping the invalid ones.
    ///
    /// Valid elements are applied even when others are rejected. Returns the
    /// number of newly added elements when every element was valid, and
    /// [`BitSetError::PartiallyApplied`] otherwise.
    pub fn insert_many<E, I>(&mut self, elements: I) -> Result<usize>
    where
        E: Element,
        I: IntoIterator<Item = E>,
    {
        let mut total = 0;
        let mut rejected = 0;
        let mut added = 0;

        for element in elements {
            total += 1;
            match self.insert(element) {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(_) => rejected += 1,
            }
        }

        if rejected == 0 {
            Ok(added)
        } else {
            log::debug!("[bitset] batch partially applied: {} of {} rejected", rejected, total);
            Err(BitSetError::PartiallyApplied { rejected, total })
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.blocks.fill(0);
    }
}
