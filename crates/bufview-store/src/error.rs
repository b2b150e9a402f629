//! Store and view error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while allocating stores, constructing views, or
/// reading elements.
///
/// Out-of-range writes have no variant: they are no-ops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A store was requested with a negative byte length.
    InvalidByteLength {
        /// The requested length.
        requested: i64,
    },
    /// A store was requested above the configured maximum.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Configured maximum in bytes.
        max: usize,
    },
    /// A view's byte range is negative or extends past the store.
    RangeOutOfBounds {
        /// Requested start of the range.
        byte_offset: i64,
        /// Requested length of the range.
        byte_length: i64,
        /// Byte length of the store.
        store_length: usize,
    },
    /// An element or byte read outside `[0, len)`.
    IndexOutOfBounds {
        /// The requested index.
        index: i64,
        /// Number of addressable elements (or bytes).
        len: usize,
    },
}

/// Coarse classification of a [`StoreError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Store allocation failed; fatal to the allocating call.
    Allocation,
    /// View construction arguments were inconsistent with the store.
    Range,
    /// A read addressed an element that does not exist.
    Index,
}

impl StoreError {
    /// Which part of the taxonomy this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidByteLength { .. } | Self::CapacityExceeded { .. } => {
                ErrorCategory::Allocation
            }
            Self::RangeOutOfBounds { .. } => ErrorCategory::Range,
            Self::IndexOutOfBounds { .. } => ErrorCategory::Index,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidByteLength { requested } => {
                write!(f, "invalid store byte length: {requested}")
            }
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "store capacity exceeded: requested {requested} bytes, max {max} bytes"
                )
            }
            Self::RangeOutOfBounds {
                byte_offset,
                byte_length,
                store_length,
            } => {
                write!(
                    f,
                    "view range [{byte_offset}, +{byte_length}) is outside store of {store_length} bytes"
                )
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl Error for StoreError {}
