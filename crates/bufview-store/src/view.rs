//! Typed element views over a backing store.
//!
//! A [`TypedView`] is a `(store, byte_offset, len, codec)` window. Its shape
//! never changes after construction; only the bytes underneath do. Views are
//! built by a [`ViewFactory`](crate::ViewFactory) or derived from another view
//! with [`TypedView::subview`].

use std::fmt;

use bufview_core::{
    ArrayLike, ElementKind, Number, Optimistic, ProgramPoint, UnwarrantedOptimism,
};
use smallvec::SmallVec;

use crate::codec::ElementCodec;
use crate::error::StoreError;
use crate::store::BackingStore;

/// Largest element width across all kinds.
const MAX_WIDTH: usize = 8;

/// A fixed-shape window presenting one element kind.
///
/// Cloning a view is cheap and yields a second view of the same bytes.
#[derive(Clone, Debug)]
pub struct TypedView {
    /// Shared handle keeping the bytes alive.
    store: BackingStore,
    /// Byte offset of element 0 within the store.
    byte_offset: usize,
    /// Number of elements.
    len: usize,
    codec: &'static ElementCodec,
}

impl TypedView {
    /// Create a view. The caller has already checked the range.
    pub(crate) fn new(
        store: BackingStore,
        byte_offset: usize,
        len: usize,
        codec: &'static ElementCodec,
    ) -> Self {
        debug_assert!(byte_offset + len * codec.width() <= store.byte_length());
        Self {
            store,
            byte_offset,
            len,
            codec,
        }
    }

    /// The element kind.
    pub fn kind(&self) -> ElementKind {
        self.codec.kind()
    }

    /// The codec shared by all views of this kind.
    pub fn codec(&self) -> &'static ElementCodec {
        self.codec
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte offset of element 0 within the store.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Number of bytes covered by the view.
    pub fn byte_length(&self) -> usize {
        self.len * self.codec.width()
    }

    /// The underlying store.
    pub fn store(&self) -> &BackingStore {
        &self.store
    }

    /// Whether both views read and write the same store.
    pub fn shares_store_with(&self, other: &TypedView) -> bool {
        self.store.ptr_eq(&other.store)
    }

    /// Byte offset of element `index`, or `None` outside `[0, len)`.
    fn element_offset(&self, index: i64) -> Option<usize> {
        let index = usize::try_from(index).ok()?;
        if index >= self.len {
            return None;
        }
        Some(self.byte_offset + index * self.codec.width())
    }

    fn load<R>(&self, index: i64, decode: impl FnOnce(&[u8]) -> R) -> Result<R, StoreError> {
        let offset = self
            .element_offset(index)
            .ok_or(StoreError::IndexOutOfBounds {
                index,
                len: self.len,
            })?;
        let mut buf = [0u8; MAX_WIDTH];
        let raw = &mut buf[..self.codec.width()];
        self.store.read_span(offset, raw);
        Ok(decode(raw))
    }

    /// Read element `index` as its logical value.
    ///
    /// Fails with [`StoreError::IndexOutOfBounds`] outside `[0, len)`. The
    /// caller decides whether that is a program error or a relink trigger.
    pub fn get(&self, index: i64) -> Result<Number, StoreError> {
        self.load(index, |raw| self.codec.decode(raw))
    }

    /// Read element `index` widened to a double.
    pub fn get_double(&self, index: i64) -> Result<f64, StoreError> {
        self.get(index).map(Number::as_f64)
    }

    /// Read element `index` as raw integer bits (`ToInt32` for floats).
    pub fn get_raw(&self, index: i64) -> Result<i32, StoreError> {
        self.load(index, |raw| self.codec.get_int(raw))
    }

    /// Read element `index` assuming it fits an `i32`.
    ///
    /// Returns [`Optimistic::Unwarranted`] with the widened value when it
    /// does not. This is the per-access primitive; call-site state lives in
    /// [`SpeculativeGate`](crate::SpeculativeGate).
    pub fn get_int_optimistic(
        &self,
        index: i64,
        program_point: ProgramPoint,
    ) -> Result<Optimistic<i32>, StoreError> {
        let narrowed = self.load(index, |raw| self.codec.narrow(raw))?;
        Ok(match narrowed {
            Ok(v) => Optimistic::Value(v),
            Err(wide) => Optimistic::Unwarranted(UnwarrantedOptimism {
                value: Number::Double(wide),
                program_point,
            }),
        })
    }

    /// Store `value` at `index`.
    ///
    /// Writes outside `[0, len)` are dropped without error, matching
    /// array-like assignment past the end of a fixed-length view.
    pub fn set(&self, index: i64, value: impl Into<Number>) {
        let Some(offset) = self.element_offset(index) else {
            return;
        };
        let mut buf = [0u8; MAX_WIDTH];
        let raw = &mut buf[..self.codec.width()];
        self.codec.encode(value.into(), raw);
        self.store.write_span(offset, raw);
    }

    /// A view of elements `[begin, end)` of this one.
    ///
    /// Negative arguments count back from `len`; both are then clamped into
    /// `[0, len]`. `end` defaults to `len`. An empty range yields an empty
    /// view. Never fails.
    pub fn subview(&self, begin: i64, end: Option<i64>) -> TypedView {
        let len = self.len as i64;
        let clamp = |i: i64| {
            if i < 0 {
                len.saturating_add(i).max(0)
            } else {
                i.min(len)
            }
        };
        let begin = clamp(begin);
        let end = clamp(end.unwrap_or(len)).max(begin);
        let begin = begin as usize;
        let end = end as usize;
        TypedView::new(
            self.store.clone(),
            self.byte_offset + begin * self.codec.width(),
            end - begin,
            self.codec,
        )
    }

    /// Copy `source` into this view starting at element `start`.
    ///
    /// Each value is coerced by this view's codec; a source hole reads as
    /// NaN, as an undefined element would. Targets outside `[0, len)` are
    /// skipped. The source is read in full before the first write, so a
    /// source overlapping this view's bytes is copied as it was before the
    /// call.
    pub fn bulk_set<S>(&self, source: &S, start: i64)
    where
        S: ArrayLike + ?Sized,
    {
        let values: SmallVec<[Number; 16]> = (0..source.length())
            .map(|i| source.element(i).unwrap_or(Number::Double(f64::NAN)))
            .collect();
        for (k, value) in values.into_iter().enumerate() {
            self.set(start.saturating_add(k as i64), value);
        }
    }

    /// Copy of every element's logical value.
    pub fn to_vec(&self) -> Vec<Number> {
        (0..self.len as i64)
            .filter_map(|i| self.get(i).ok())
            .collect()
    }
}

impl ArrayLike for TypedView {
    fn length(&self) -> usize {
        self.len
    }

    fn element(&self, index: usize) -> Option<Number> {
        self.get(i64::try_from(index).ok()?).ok()
    }
}

impl fmt::Display for TypedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(len={}, byte_offset={})",
            self.codec.name(),
            self.len,
            self.byte_offset
        )
    }
}
