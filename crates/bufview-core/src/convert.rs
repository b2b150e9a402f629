//! Host numeric coercion routines.
//!
//! These are the language-level conversions (`ToInt32`, `ToUint32`,
//! `ToUint8Clamp`, ...) that element codecs consume when storing a value.
//! Integer conversions truncate toward zero and wrap modulo 2^32; NaN and
//! the infinities convert to zero.

const TWO_32: f64 = 4_294_967_296.0;
const TWO_31: f64 = 2_147_483_648.0;

/// `ToInt32`: truncate, wrap modulo 2^32, reinterpret as signed.
pub fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(TWO_32);
    if wrapped >= TWO_31 {
        (wrapped - TWO_32) as i32
    } else {
        wrapped as i32
    }
}

/// `ToUint32`: the bit pattern of [`to_int32`] read as unsigned.
pub fn to_uint32(value: f64) -> u32 {
    to_int32(value) as u32
}

/// `ToInt16`.
pub fn to_int16(value: f64) -> i16 {
    to_int32(value) as i16
}

/// `ToUint16`.
pub fn to_uint16(value: f64) -> u16 {
    to_int32(value) as u16
}

/// `ToInt8`.
pub fn to_int8(value: f64) -> i8 {
    to_int32(value) as i8
}

/// `ToUint8`.
pub fn to_uint8(value: f64) -> u8 {
    to_int32(value) as u8
}

/// `ToUint8Clamp`: clamp to `[0, 255]`, rounding ties to even. NaN is 0.
pub fn to_uint8_clamp(value: f64) -> u8 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    if value >= 255.0 {
        return 255;
    }
    let floor = value.floor();
    let half = floor + 0.5;
    let rounded = if value > half {
        floor + 1.0
    } else if value < half || floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded as u8
}

/// Integer clamp for the unboxed fast path of [`to_uint8_clamp`].
pub fn int_to_uint8_clamp(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Whether `value` converts to an `i32` and back without loss.
///
/// Negative zero is not representable: the integer form would lose
/// the sign.
pub fn is_representable_as_int(value: f64) -> bool {
    value == f64::from(value as i32) && !(value == 0.0 && value.is_sign_negative())
}
