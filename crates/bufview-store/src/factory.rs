//! Per-kind view factories.
//!
//! A [`ViewFactory`] knows one element kind's codec and builds views of that
//! kind over a store. There is one `const` factory per kind; factories carry
//! no state beyond the codec reference, so they are `Copy`.
//!
//! Construction from raw byte offsets is strict: a range that is negative or
//! runs past the store is a [`StoreError::RangeOutOfBounds`]. Index-based
//! narrowing of an existing view is [`TypedView::subview`], which clamps.

use bufview_core::{ArrayLike, ElementKind};

use crate::codec::{self, ElementCodec};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::store::BackingStore;
use crate::view::TypedView;

/// Builds typed views of one element kind.
#[derive(Clone, Copy, Debug)]
pub struct ViewFactory {
    codec: &'static ElementCodec,
}

impl ViewFactory {
    /// `Int8Array` factory.
    pub const INT8: ViewFactory = ViewFactory { codec: &codec::INT8 };
    /// `Uint8Array` factory.
    pub const UINT8: ViewFactory = ViewFactory { codec: &codec::UINT8 };
    /// `Uint8ClampedArray` factory.
    pub const UINT8_CLAMPED: ViewFactory = ViewFactory {
        codec: &codec::UINT8_CLAMPED,
    };
    /// `Int16Array` factory.
    pub const INT16: ViewFactory = ViewFactory { codec: &codec::INT16 };
    /// `Uint16Array` factory.
    pub const UINT16: ViewFactory = ViewFactory { codec: &codec::UINT16 };
    /// `Int32Array` factory.
    pub const INT32: ViewFactory = ViewFactory { codec: &codec::INT32 };
    /// `Uint32Array` factory.
    pub const UINT32: ViewFactory = ViewFactory { codec: &codec::UINT32 };
    /// `Float32Array` factory.
    pub const FLOAT32: ViewFactory = ViewFactory {
        codec: &codec::FLOAT32,
    };
    /// `Float64Array` factory.
    pub const FLOAT64: ViewFactory = ViewFactory {
        codec: &codec::FLOAT64,
    };

    /// The factory for `kind`.
    pub fn for_kind(kind: ElementKind) -> ViewFactory {
        ViewFactory {
            codec: ElementCodec::for_kind(kind),
        }
    }

    /// The element kind this factory builds.
    pub fn kind(&self) -> ElementKind {
        self.codec.kind()
    }

    /// The codec shared by every view this factory builds.
    pub fn codec(&self) -> &'static ElementCodec {
        self.codec
    }

    /// Size of one element in bytes.
    pub fn bytes_per_element(&self) -> usize {
        self.codec.width()
    }

    /// Script-visible class name, e.g. `"Uint32Array"`.
    pub fn class_name(&self) -> &'static str {
        self.codec.name()
    }

    /// A view over the whole store.
    ///
    /// `len = byte_length / width`; trailing bytes that do not fill a whole
    /// element are unreachable through this view.
    pub fn create_whole(&self, store: &BackingStore) -> TypedView {
        let len = store.byte_length() / self.bytes_per_element();
        TypedView::new(store.clone(), 0, len, self.codec)
    }

    /// A view over `byte_length` bytes starting at `byte_begin`.
    ///
    /// The element count is `byte_length / width`. Fails if either argument
    /// is negative or the range runs past the store.
    pub fn create_range(
        &self,
        store: &BackingStore,
        byte_begin: i64,
        byte_length: i64,
    ) -> Result<TypedView, StoreError> {
        let out_of_bounds = || StoreError::RangeOutOfBounds {
            byte_offset: byte_begin,
            byte_length,
            store_length: store.byte_length(),
        };
        let begin = usize::try_from(byte_begin).map_err(|_| out_of_bounds())?;
        let length = usize::try_from(byte_length).map_err(|_| out_of_bounds())?;
        let end = begin.checked_add(length).ok_or_else(out_of_bounds)?;
        if end > store.byte_length() {
            return Err(out_of_bounds());
        }
        Ok(TypedView::new(
            store.clone(),
            begin,
            length / self.bytes_per_element(),
            self.codec,
        ))
    }

    /// A view of `element_count` elements starting at `byte_offset`.
    pub fn construct(
        &self,
        store: &BackingStore,
        byte_offset: i64,
        element_count: i64,
    ) -> Result<TypedView, StoreError> {
        let byte_length = element_count
            .checked_mul(self.bytes_per_element() as i64)
            .ok_or(StoreError::RangeOutOfBounds {
                byte_offset,
                byte_length: i64::MAX,
                store_length: store.byte_length(),
            })?;
        self.create_range(store, byte_offset, byte_length)
    }

    /// A zeroed view of `len` elements over a fresh store.
    pub fn with_length(&self, len: usize, config: &StoreConfig) -> Result<TypedView, StoreError> {
        let byte_length = len
            .checked_mul(self.bytes_per_element())
            .ok_or(StoreError::CapacityExceeded {
                requested: usize::MAX,
                max: config.max_byte_length,
            })?;
        let store = BackingStore::allocate_bytes(byte_length, config)?;
        Ok(self.create_whole(&store))
    }

    /// A view over a fresh store holding `source`'s values, each coerced by
    /// this kind's codec.
    pub fn construct_from<S>(&self, source: &S, config: &StoreConfig) -> Result<TypedView, StoreError>
    where
        S: ArrayLike + ?Sized,
    {
        let view = self.with_length(source.length(), config)?;
        view.bulk_set(source, 0);
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bufview_core::Number;

    #[test]
    fn for_kind_matches_consts() {
        for (kind, factory) in [
            (ElementKind::Int8, ViewFactory::INT8),
            (ElementKind::Uint8, ViewFactory::UINT8),
            (ElementKind::Uint8Clamped, ViewFactory::UINT8_CLAMPED),
            (ElementKind::Int16, ViewFactory::INT16),
            (ElementKind::Uint16, ViewFactory::UINT16),
            (ElementKind::Int32, ViewFactory::INT32),
            (ElementKind::Uint32, ViewFactory::UINT32),
            (ElementKind::Float32, ViewFactory::FLOAT32),
            (ElementKind::Float64, ViewFactory::FLOAT64),
        ] {
            assert_eq!(factory.kind(), kind);
            assert!(std::ptr::eq(factory.codec(), ViewFactory::for_kind(kind).codec()));
            assert_eq!(factory.class_name(), kind.name());
        }
    }

    #[test]
    fn whole_store_len_is_floor_of_width() {
        let store = BackingStore::with_length(18).unwrap();
        assert_eq!(ViewFactory::UINT32.create_whole(&store).len(), 4);
        assert_eq!(ViewFactory::FLOAT64.create_whole(&store).len(), 2);
        assert_eq!(ViewFactory::UINT8.create_whole(&store).len(), 18);
    }

    #[test]
    fn whole_store_scenario() {
        let store = BackingStore::with_length(16).unwrap();
        let view = ViewFactory::UINT32.create_whole(&store);
        assert_eq!(view.len(), 4);
        view.set(0, 4294967295.0);
        assert_eq!(view.get(0).unwrap(), Number::Double(4294967295.0));
        let before = store.to_vec();
        view.set(5, 1);
        assert_eq!(store.to_vec(), before);
        let tail = view.subview(-2, Some(10));
        assert_eq!(tail.len(), 2);
        tail.set(0, 77);
        assert_eq!(view.get(2).unwrap(), Number::Double(77.0));
        tail.set(1, 78);
        assert_eq!(view.get(3).unwrap(), Number::Double(78.0));
    }

    #[test]
    fn range_must_fit_store() {
        let store = BackingStore::with_length(16).unwrap();
        assert!(ViewFactory::UINT32.create_range(&store, 4, 12).is_ok());
        assert!(ViewFactory::UINT32.create_range(&store, 16, 0).is_ok());
        assert_eq!(
            ViewFactory::UINT32.create_range(&store, 8, 12).unwrap_err(),
            StoreError::RangeOutOfBounds {
                byte_offset: 8,
                byte_length: 12,
                store_length: 16
            }
        );
        assert!(ViewFactory::UINT32.create_range(&store, -4, 4).is_err());
        assert!(ViewFactory::UINT32.create_range(&store, 0, -4).is_err());
        assert!(ViewFactory::UINT32.create_range(&store, i64::MAX, i64::MAX).is_err());
    }

    #[test]
    fn range_len_ignores_partial_element() {
        let store = BackingStore::with_length(16).unwrap();
        let view = ViewFactory::UINT32.create_range(&store, 2, 7).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.byte_offset(), 2);
    }

    #[test]
    fn construct_counts_elements() {
        let store = BackingStore::with_length(16).unwrap();
        let view = ViewFactory::INT16.construct(&store, 4, 6).unwrap();
        assert_eq!(view.len(), 6);
        assert_eq!(view.byte_length(), 12);
        assert!(ViewFactory::INT16.construct(&store, 4, 7).is_err());
        assert!(ViewFactory::FLOAT64.construct(&store, 0, i64::MAX).is_err());
    }

    #[test]
    fn with_length_respects_config() {
        let config = StoreConfig::new().with_max_byte_length(16);
        let view = ViewFactory::UINT32.with_length(4, &config).unwrap();
        assert_eq!(view.len(), 4);
        assert_eq!(view.store().byte_length(), 16);
        assert_eq!(
            ViewFactory::UINT32.with_length(5, &config).unwrap_err(),
            StoreError::CapacityExceeded {
                requested: 20,
                max: 16
            }
        );
        assert!(ViewFactory::FLOAT64
            .with_length(usize::MAX, &config)
            .is_err());
    }

    #[test]
    fn construct_from_coerces_source() {
        let view = ViewFactory::UINT8_CLAMPED
            .construct_from(&[-5.0f64, 12.5, 1000.0], &StoreConfig::default())
            .unwrap();
        assert_eq!(
            view.to_vec(),
            vec![Number::Int(0), Number::Int(12), Number::Int(255)]
        );
    }

    #[test]
    fn construct_from_view_copies_bytes() {
        let source = ViewFactory::UINT32
            .construct_from(&[1u32, u32::MAX], &StoreConfig::default())
            .unwrap();
        let copy = ViewFactory::INT32
            .construct_from(&source, &StoreConfig::default())
            .unwrap();
        assert!(!copy.shares_store_with(&source));
        assert_eq!(copy.to_vec(), vec![Number::Int(1), Number::Int(-1)]);
    }
}
