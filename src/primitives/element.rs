//! Integer types accepted as set elements.

use core::fmt;

/// An element value as the caller passed it, kept exactly for error reports.
///
/// Sign and magnitude are stored apart so that every primitive integer, from
/// `i128::MIN` to `u128::MAX`, is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementValue {
    negative: bool,
    magnitude: u128,
}

impl ElementValue {
    /// The value of `element`.
    pub fn of<E: Element>(element: E) -> Self {
        element.value()
    }

    /// True when the value is below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value.
    pub fn magnitude(&self) -> u128 {
        self.magnitude
    }
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

/// A primitive integer that can name a set element.
///
/// Signed types are accepted so that negative values can be rejected with a
/// dedicated error instead of wrapping around.
pub trait Element: Copy {
    /// True when the value is below zero.
    fn is_negative(self) -> bool;

    /// The value as an index, or `None` when it is negative or does not fit
    /// in `usize`.
    fn to_index(self) -> Option<usize>;

    /// The exact value, for error reports.
    fn value(self) -> ElementValue;
}

macro_rules! impl_element {
    (unsigned: $($ty:ty),*; signed: $($sty:ty),*) => {
        $(
            impl Element for $ty {
                #[inline]
                fn is_negative(self) -> bool { false }

                #[inline]
                fn to_index(self) -> Option<usize> { usize::try_from(self).ok() }

                #[inline]
                fn value(self) -> ElementValue {
                    ElementValue { negative: false, magnitude: self as u128 }
                }
            }
        )*
        $(
            impl Element for $sty {
                #[inline]
                fn is_negative(self) -> bool { self < 0 }

                #[inline]
                fn to_index(self) -> Option<usize> { usize::try_from(self).ok() }

                #[inline]
                fn value(self) -> ElementValue {
                    ElementValue { negative: self < 0, magnitude: self.unsigned_abs() as u128 }
                }
            }
        )*
    };
}

impl_element!(unsigned: u8, u16, u32, u64, u128, usize; signed: i8, i16, i32, i64, i128, isize);
