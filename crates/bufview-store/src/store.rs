//! Fixed-length, shared backing stores.
//!
//! A [`BackingStore`] is a reference-counted handle to one contiguous,
//! zero-initialised byte region. Cloning the handle shares the bytes;
//! the region is freed when the last handle (including every view over
//! it) is dropped. The length is fixed at allocation: growing a buffer
//! means allocating a new store and copying, which callers do themselves.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use bufview_core::StoreInstanceId;

use crate::config::StoreConfig;
use crate::error::StoreError;

struct StoreData {
    id: StoreInstanceId,
    bytes: RefCell<Box<[u8]>>,
}

/// Shared handle to a raw byte buffer.
#[derive(Clone)]
pub struct BackingStore {
    inner: Rc<StoreData>,
}

impl BackingStore {
    /// Allocate a zeroed store of `byte_length` bytes.
    ///
    /// Fails with [`StoreError::InvalidByteLength`] for a negative length
    /// and [`StoreError::CapacityExceeded`] above `config.max_byte_length`.
    pub fn allocate(byte_length: i64, config: &StoreConfig) -> Result<Self, StoreError> {
        let requested = usize::try_from(byte_length).map_err(|_| {
            log::debug!("rejected store allocation of {byte_length} bytes");
            StoreError::InvalidByteLength {
                requested: byte_length,
            }
        })?;
        Self::allocate_bytes(requested, config)
    }

    /// Allocate a zeroed store from an already non-negative length.
    pub fn allocate_bytes(byte_length: usize, config: &StoreConfig) -> Result<Self, StoreError> {
        if byte_length > config.max_byte_length {
            log::debug!(
                "rejected store allocation of {byte_length} bytes (max {})",
                config.max_byte_length
            );
            return Err(StoreError::CapacityExceeded {
                requested: byte_length,
                max: config.max_byte_length,
            });
        }
        Ok(Self::from_bytes(vec![0; byte_length]))
    }

    /// Allocate a zeroed store under the default [`StoreConfig`].
    pub fn with_length(byte_length: usize) -> Result<Self, StoreError> {
        Self::allocate_bytes(byte_length, &StoreConfig::default())
    }

    /// Adopt caller-provided bytes as a new store.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let id = StoreInstanceId::next();
        log::debug!("allocated backing store {id}: {} bytes", bytes.len());
        Self {
            inner: Rc::new(StoreData {
                id,
                bytes: RefCell::new(bytes.into_boxed_slice()),
            }),
        }
    }

    /// Total length in bytes. Never changes.
    pub fn byte_length(&self) -> usize {
        self.inner.bytes.borrow().len()
    }

    /// Whether the store holds zero bytes.
    pub fn is_empty(&self) -> bool {
        self.byte_length() == 0
    }

    /// Process-unique identifier of this store.
    pub fn id(&self) -> StoreInstanceId {
        self.inner.id
    }

    /// Whether two handles refer to the same bytes.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles, views included.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Read one byte.
    pub fn read_byte(&self, offset: usize) -> Result<u8, StoreError> {
        let bytes = self.inner.bytes.borrow();
        bytes
            .get(offset)
            .copied()
            .ok_or(StoreError::IndexOutOfBounds {
                index: i64::try_from(offset).unwrap_or(i64::MAX),
                len: bytes.len(),
            })
    }

    /// Write one byte.
    pub fn write_byte(&self, offset: usize, value: u8) -> Result<(), StoreError> {
        let mut bytes = self.inner.bytes.borrow_mut();
        let len = bytes.len();
        let slot = bytes.get_mut(offset).ok_or(StoreError::IndexOutOfBounds {
            index: i64::try_from(offset).unwrap_or(i64::MAX),
            len,
        })?;
        *slot = value;
        Ok(())
    }

    /// Copy of the full contents.
    pub fn to_vec(&self) -> Vec<u8> {
        self.inner.bytes.borrow().to_vec()
    }

    /// Fill `out` from the bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + out.len()` exceeds the store. Views check their
    /// range at construction, so this only fires on a broken invariant.
    pub(crate) fn read_span(&self, offset: usize, out: &mut [u8]) {
        let bytes = self.inner.bytes.borrow();
        out.copy_from_slice(&bytes[offset..offset + out.len()]);
    }

    /// Copy `src` into the bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + src.len()` exceeds the store.
    pub(crate) fn write_span(&self, offset: usize, src: &[u8]) {
        let mut bytes = self.inner.bytes.borrow_mut();
        bytes[offset..offset + src.len()].copy_from_slice(src);
    }
}

impl fmt::Debug for BackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackingStore")
            .field("id", &self.id())
            .field("byte_length", &self.byte_length())
            .finish()
    }
}
