//! Error values returned by bit set operations.

use thiserror::Error;

use crate::primitives::ElementValue;

/// Result alias used across the crate.
pub type Result<T, E = BitSetError> = core::result::Result<T, E>;

/// Coarse classification of a [`BitSetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An element or capacity outside the accepted domain.
    InvalidArgument,
    /// Storage for blocks or a render buffer could not be reserved.
    Allocation,
    /// Text formatting failed.
    Render,
}

/// Every failure a bit set operation can report.
///
/// Rejected elements are not fatal: the set is left untouched and the caller
/// decides whether to ignore, log or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BitSetError {
    #[error("bit set capacity must be greater than zero")]
    ZeroCapacity,

    #[error("failed to allocate {bytes} bytes")]
    Allocation { bytes: usize },

    #[error("element {element} is negative")]
    NegativeElement { element: ElementValue },

    #[error("element {element} is out of range for capacity {capacity}")]
    OutOfRange { element: ElementValue, capacity: usize },

    #[error("{rejected} of {total} elements were rejected")]
    PartiallyApplied { rejected: usize, total: usize },

    #[error("failed to render bit set")]
    Render(#[from] core::fmt::Error),
}

impl BitSetError {
    /// The error class this value belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroCapacity
            | Self::NegativeElement { .. }
            | Self::OutOfRange { .. }
            | Self::PartiallyApplied { .. } => ErrorKind::InvalidArgument,
            Self::Allocation { .. } => ErrorKind::Allocation,
            Self::Render(_) => ErrorKind::Render,
        }
    }

    /// True for rejected elements and rejected batches.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
