//! Element kinds and their static properties.

use std::fmt;

/// The element type presented by a typed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer, wrapping on store.
    Uint8,
    /// Unsigned 8-bit integer, clamping to `[0, 255]` on store.
    Uint8Clamped,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer, widened to a double on read.
    Uint32,
    /// 32-bit IEEE 754 float.
    Float32,
    /// 64-bit IEEE 754 float.
    Float64,
}

/// The representation a compiler should use for a wide element read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repr {
    /// Every element value fits an `i32`.
    Int,
    /// Some element values need a double.
    Double,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 9] = [
        Self::Int8,
        Self::Uint8,
        Self::Uint8Clamped,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Float32,
        Self::Float64,
    ];

    /// Size of one element in bytes.
    pub const fn bytes_per_element(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Uint8Clamped => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    /// Script-visible class name, e.g. `"Uint32Array"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "Int8Array",
            Self::Uint8 => "Uint8Array",
            Self::Uint8Clamped => "Uint8ClampedArray",
            Self::Int16 => "Int16Array",
            Self::Uint16 => "Uint16Array",
            Self::Int32 => "Int32Array",
            Self::Uint32 => "Uint32Array",
            Self::Float32 => "Float32Array",
            Self::Float64 => "Float64Array",
        }
    }

    /// Whether the element domain is unsigned.
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint8Clamped | Self::Uint16 | Self::Uint32
        )
    }

    /// Whether elements are floating point.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Representation of a wide read.
    ///
    /// `Uint32` is the only integer kind whose domain exceeds `i32`.
    pub const fn element_repr(self) -> Repr {
        match self {
            Self::Uint32 | Self::Float32 | Self::Float64 => Repr::Double,
            _ => Repr::Int,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
