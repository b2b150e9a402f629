//! Source abstraction for bulk copies and array-like construction.

use crate::number::Number;

/// A finite, indexable sequence of numbers.
///
/// Bulk copies read through `&dyn ArrayLike`-style generics rather than a
/// concrete container, so host arrays, plain slices, and other typed views
/// can all act as sources.
pub trait ArrayLike {
    /// Number of elements.
    fn length(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn element(&self, index: usize) -> Option<Number>;
}

impl<T> ArrayLike for [T]
where
    T: Copy + Into<Number>,
{
    fn length(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> Option<Number> {
        self.get(index).map(|&v| v.into())
    }
}

impl<T> ArrayLike for Vec<T>
where
    T: Copy + Into<Number>,
{
    fn length(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> Option<Number> {
        self.as_slice().element(index)
    }
}

impl<T, const N: usize> ArrayLike for [T; N]
where
    T: Copy + Into<Number>,
{
    fn length(&self) -> usize {
        N
    }

    fn element(&self, index: usize) -> Option<Number> {
        self.as_slice().element(index)
    }
}
