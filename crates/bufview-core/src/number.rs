//! The host numeric value as seen by typed views.

use std::fmt;

/// A numeric value crossing the view boundary.
///
/// The host runtime keeps small integers unboxed as `i32` and everything
/// else as a double. Views accept either on store and produce the
/// representation their element kind calls for on load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// A 32-bit signed integer.
    Int(i32),
    /// A double-precision float.
    Double(f64),
}

impl Number {
    /// Widen to a double. Lossless for both variants.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => f64::from(v),
            Self::Double(v) => v,
        }
    }

    /// Whether this is the narrow integer representation.
    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i16> for Number {
    fn from(v: i16) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<u16> for Number {
    fn from(v: u16) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<i8> for Number {
    fn from(v: i8) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<u8> for Number {
    fn from(v: u8) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<u32> for Number {
    fn from(v: u32) -> Self {
        match i32::try_from(v) {
            Ok(i) => Self::Int(i),
            Err(_) => Self::Double(f64::from(v)),
        }
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Self::Double(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}
