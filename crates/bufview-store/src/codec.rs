//! Per-kind element codecs.
//!
//! An [`ElementCodec`] converts between the raw bytes of one element and the
//! host's [`Number`]. Codecs are stateless: one `static` descriptor exists per
//! [`ElementKind`], and every view of that kind points at it. The accessors
//! are plain function pointers so a compiler can call them directly.
//!
//! Byte order is the native order of the platform. Raw bytes written on one
//! architecture are not portable to another.

use std::fmt;

use bufview_core::convert;
use bufview_core::{ElementKind, Number};

/// Conversion table for one element kind.
pub struct ElementCodec {
    kind: ElementKind,
    decode: fn(&[u8]) -> Number,
    get_int: fn(&[u8]) -> i32,
    narrow: fn(&[u8]) -> Result<i32, f64>,
    encode: fn(Number, &mut [u8]),
}

impl ElementCodec {
    /// The shared codec for `kind`.
    pub fn for_kind(kind: ElementKind) -> &'static ElementCodec {
        match kind {
            ElementKind::Int8 => &INT8,
            ElementKind::Uint8 => &UINT8,
            ElementKind::Uint8Clamped => &UINT8_CLAMPED,
            ElementKind::Int16 => &INT16,
            ElementKind::Uint16 => &UINT16,
            ElementKind::Int32 => &INT32,
            ElementKind::Uint32 => &UINT32,
            ElementKind::Float32 => &FLOAT32,
            ElementKind::Float64 => &FLOAT64,
        }
    }

    /// The element kind this codec handles.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Bytes per element.
    pub fn width(&self) -> usize {
        self.kind.bytes_per_element()
    }

    /// Display name, e.g. `"Uint32Array"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Decode one element into its logical value.
    ///
    /// `raw` must be exactly [`width`](Self::width) bytes.
    pub fn decode(&self, raw: &[u8]) -> Number {
        debug_assert_eq!(raw.len(), self.width());
        (self.decode)(raw)
    }

    /// Decode one element as an `i32`: the raw bits for integer kinds,
    /// `ToInt32` of the value for float kinds.
    pub fn get_int(&self, raw: &[u8]) -> i32 {
        debug_assert_eq!(raw.len(), self.width());
        (self.get_int)(raw)
    }

    /// Decode one element into the narrow representation.
    ///
    /// Returns `Err` with the value as a double when it has no lossless
    /// `i32` form.
    pub fn narrow(&self, raw: &[u8]) -> Result<i32, f64> {
        debug_assert_eq!(raw.len(), self.width());
        (self.narrow)(raw)
    }

    /// Encode `value` into `out`, applying the kind's truncation rule.
    pub fn encode(&self, value: Number, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.width());
        (self.encode)(value, out)
    }
}

impl fmt::Debug for ElementCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementCodec")
            .field("kind", &self.kind)
            .field("width", &self.width())
            .finish()
    }
}

fn take<const N: usize>(raw: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&raw[..N]);
    out
}

/// Integer kinds whose whole domain fits an `i32`. Narrowing never fails.
macro_rules! small_int_codec {
    ($module:ident, $ty:ty, $from_double:path) => {
        mod $module {
            use super::*;

            fn load(raw: &[u8]) -> $ty {
                <$ty>::from_ne_bytes(take(raw))
            }

            pub(super) fn decode(raw: &[u8]) -> Number {
                Number::Int(get_int(raw))
            }

            pub(super) fn get_int(raw: &[u8]) -> i32 {
                i32::from(load(raw))
            }

            pub(super) fn narrow(raw: &[u8]) -> Result<i32, f64> {
                Ok(get_int(raw))
            }

            #[allow(clippy::unnecessary_cast)]
            pub(super) fn encode(value: Number, out: &mut [u8]) {
                let v: $ty = match value {
                    Number::Int(i) => i as $ty,
                    Number::Double(d) => $from_double(d),
                };
                out.copy_from_slice(&v.to_ne_bytes());
            }
        }
    };
}

small_int_codec!(int8, i8, convert::to_int8);
small_int_codec!(uint8, u8, convert::to_uint8);
small_int_codec!(int16, i16, convert::to_int16);
small_int_codec!(uint16, u16, convert::to_uint16);
small_int_codec!(int32, i32, convert::to_int32);

mod uint8_clamped {
    use super::*;

    pub(super) fn encode(value: Number, out: &mut [u8]) {
        out[0] = match value {
            Number::Int(i) => convert::int_to_uint8_clamp(i),
            Number::Double(d) => convert::to_uint8_clamp(d),
        };
    }
}

mod uint32 {
    use super::*;

    fn load(raw: &[u8]) -> u32 {
        u32::from_ne_bytes(take(raw))
    }

    // No fixed-width unsigned type reaches script code, so the logical
    // value is always a double.
    pub(super) fn decode(raw: &[u8]) -> Number {
        Number::Double(f64::from(load(raw)))
    }

    pub(super) fn get_int(raw: &[u8]) -> i32 {
        load(raw) as i32
    }

    pub(super) fn narrow(raw: &[u8]) -> Result<i32, f64> {
        let bits = get_int(raw);
        if bits >= 0 {
            Ok(bits)
        } else {
            Err(f64::from(bits as u32))
        }
    }

    pub(super) fn encode(value: Number, out: &mut [u8]) {
        let v = match value {
            Number::Int(i) => i as u32,
            Number::Double(d) => convert::to_uint32(d),
        };
        out.copy_from_slice(&v.to_ne_bytes());
    }
}

mod float32 {
    use super::*;

    fn load(raw: &[u8]) -> f64 {
        f64::from(f32::from_ne_bytes(take(raw)))
    }

    pub(super) fn decode(raw: &[u8]) -> Number {
        Number::Double(load(raw))
    }

    pub(super) fn get_int(raw: &[u8]) -> i32 {
        convert::to_int32(load(raw))
    }

    pub(super) fn narrow(raw: &[u8]) -> Result<i32, f64> {
        let v = load(raw);
        if convert::is_representable_as_int(v) {
            Ok(v as i32)
        } else {
            Err(v)
        }
    }

    pub(super) fn encode(value: Number, out: &mut [u8]) {
        let v = match value {
            Number::Int(i) => i as f32,
            Number::Double(d) => d as f32,
        };
        out.copy_from_slice(&v.to_ne_bytes());
    }
}

mod float64 {
    use super::*;

    fn load(raw: &[u8]) -> f64 {
        f64::from_ne_bytes(take(raw))
    }

    pub(super) fn decode(raw: &[u8]) -> Number {
        Number::Double(load(raw))
    }

    pub(super) fn get_int(raw: &[u8]) -> i32 {
        convert::to_int32(load(raw))
    }

    pub(super) fn narrow(raw: &[u8]) -> Result<i32, f64> {
        let v = load(raw);
        if convert::is_representable_as_int(v) {
            Ok(v as i32)
        } else {
            Err(v)
        }
    }

    pub(super) fn encode(value: Number, out: &mut [u8]) {
        out.copy_from_slice(&value.as_f64().to_ne_bytes());
    }
}

/// `Int8Array` codec.
pub static INT8: ElementCodec = ElementCodec {
    kind: ElementKind::Int8,
    decode: int8::decode,
    get_int: int8::get_int,
    narrow: int8::narrow,
    encode: int8::encode,
};

/// `Uint8Array` codec.
pub static UINT8: ElementCodec = ElementCodec {
    kind: ElementKind::Uint8,
    decode: uint8::decode,
    get_int: uint8::get_int,
    narrow: uint8::narrow,
    encode: uint8::encode,
};

/// `Uint8ClampedArray` codec. Reads like `Uint8Array`; stores clamp.
pub static UINT8_CLAMPED: ElementCodec = ElementCodec {
    kind: ElementKind::Uint8Clamped,
    decode: uint8::decode,
    get_int: uint8::get_int,
    narrow: uint8::narrow,
    encode: uint8_clamped::encode,
};

/// `Int16Array` codec.
pub static INT16: ElementCodec = ElementCodec {
    kind: ElementKind::Int16,
    decode: int16::decode,
    get_int: int16::get_int,
    narrow: int16::narrow,
    encode: int16::encode,
};

/// `Uint16Array` codec.
pub static UINT16: ElementCodec = ElementCodec {
    kind: ElementKind::Uint16,
    decode: uint16::decode,
    get_int: uint16::get_int,
    narrow: uint16::narrow,
    encode: uint16::encode,
};

/// `Int32Array` codec.
pub static INT32: ElementCodec = ElementCodec {
    kind: ElementKind::Int32,
    decode: int32::decode,
    get_int: int32::get_int,
    narrow: int32::narrow,
    encode: int32::encode,
};

/// `Uint32Array` codec.
pub static UINT32: ElementCodec = ElementCodec {
    kind: ElementKind::Uint32,
    decode: uint32::decode,
    get_int: uint32::get_int,
    narrow: uint32::narrow,
    encode: uint32::encode,
};

/// `Float32Array` codec.
pub static FLOAT32: ElementCodec = ElementCodec {
    kind: ElementKind::Float32,
    decode: float32::decode,
    get_int: float32::get_int,
    narrow: float32::narrow,
    encode: float32::encode,
};

/// `Float64Array` codec.
pub static FLOAT64: ElementCodec = ElementCodec {
    kind: ElementKind::Float64,
    decode: float64::decode,
    get_int: float64::get_int,
    narrow: float64::narrow,
    encode: float64::encode,
};
