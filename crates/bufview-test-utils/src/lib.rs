//! Test fixtures for bufview development.
//!
//! Builders for stores with known contents and an oracle that decodes a
//! store's bytes directly, independent of the view machinery.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use bufview_core::{ElementKind, Number};
use bufview_store::{BackingStore, TypedView, ViewFactory};

/// A store of `len` bytes where byte `i` holds `i * 37 + 11` (mod 256).
///
/// The pattern has no runs and no zeros in the first few bytes, so a view
/// reading the wrong offset shows up immediately.
pub fn patterned_store(len: usize) -> BackingStore {
    let bytes = (0..len)
        .map(|i| (i.wrapping_mul(37).wrapping_add(11)) as u8)
        .collect();
    BackingStore::from_bytes(bytes)
}

/// A store holding `words` in native byte order.
pub fn store_from_u32_words(words: &[u32]) -> BackingStore {
    let bytes = words.iter().flat_map(|w| w.to_ne_bytes()).collect();
    BackingStore::from_bytes(bytes)
}

/// The 16-byte store with a whole-store `Uint32Array` over it.
pub fn uint32_quad() -> (BackingStore, TypedView) {
    let store = BackingStore::from_bytes(vec![0; 16]);
    let view = ViewFactory::UINT32.create_whole(&store);
    (store, view)
}

/// Decode one element of `kind` straight from `bytes` at `byte_offset`.
///
/// Used to check views against the raw bytes without going through a codec.
pub fn decode_at(kind: ElementKind, bytes: &[u8], byte_offset: usize) -> Number {
    let b = &bytes[byte_offset..byte_offset + kind.bytes_per_element()];
    match kind {
        ElementKind::Int8 => Number::Int(b[0] as i8 as i32),
        ElementKind::Uint8 | ElementKind::Uint8Clamped => Number::Int(b[0] as i32),
        ElementKind::Int16 => Number::Int(i16::from_ne_bytes([b[0], b[1]]) as i32),
        ElementKind::Uint16 => Number::Int(u16::from_ne_bytes([b[0], b[1]]) as i32),
        ElementKind::Int32 => Number::Int(i32::from_ne_bytes([b[0], b[1], b[2], b[3]])),
        ElementKind::Uint32 => {
            Number::Double(u32::from_ne_bytes([b[0], b[1], b[2], b[3]]) as f64)
        }
        ElementKind::Float32 => {
            Number::Double(f32::from_ne_bytes([b[0], b[1], b[2], b[3]]) as f64)
        }
        ElementKind::Float64 => Number::Double(f64::from_ne_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ])),
    }
}

/// Bitwise equality for [`Number`], treating every NaN as equal to every
/// other NaN.
pub fn same_number(a: Number, b: Number) -> bool {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x == y,
        (Number::Double(x), Number::Double(y)) => {
            (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits()
        }
        _ => false,
    }
}
