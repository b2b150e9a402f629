//! The optimistic-read signal.
//!
//! Speculatively compiled code reads elements through a narrow
//! representation (an `i32`) for as long as observed values allow it.
//! When a value does not fit, the read returns
//! [`Optimistic::Unwarranted`] carrying the value in its wide form, and the
//! compiler is expected to re-specialize the site. This is control flow,
//! not a program error: it must never surface to script code.

use std::fmt;

use crate::id::ProgramPoint;
use crate::number::Number;

/// Result of an optimistic access.
#[derive(Clone, Copy, Debug, PartialEq)]
#[must_use]
pub enum Optimistic<T> {
    /// The assumed representation held.
    Value(T),
    /// The assumed representation was too narrow for this value.
    Unwarranted(UnwarrantedOptimism),
}

impl<T> Optimistic<T> {
    /// Whether the access had to escalate.
    pub fn is_unwarranted(&self) -> bool {
        matches!(self, Self::Unwarranted(_))
    }

    /// The narrow value, if the assumption held.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unwarranted(_) => None,
        }
    }

    /// Map the narrow value, leaving an escalation untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optimistic<U> {
        match self {
            Self::Value(v) => Optimistic::Value(f(v)),
            Self::Unwarranted(u) => Optimistic::Unwarranted(u),
        }
    }
}

/// Escalation payload: the value in wide form and the site that assumed
/// too narrow a type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnwarrantedOptimism {
    /// The value that did not fit, widened.
    pub value: Number,
    /// The call site whose assumption failed.
    pub program_point: ProgramPoint,
}

impl fmt::Display for UnwarrantedOptimism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unwarranted optimism at {}: value {}",
            self.program_point, self.value
        )
    }
}
