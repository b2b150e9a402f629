//! Core types and traits for bufview typed buffer views.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the store crate and its callers: element
//! kinds, the host numeric value, call-site identifiers, the numeric
//! coercion routines, and the optimistic-read signal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod id;
pub mod kind;
pub mod number;
pub mod optimistic;
pub mod traits;

pub use id::{ProgramPoint, StoreInstanceId};
pub use kind::{ElementKind, Repr};
pub use number::Number;
pub use optimistic::{Optimistic, UnwarrantedOptimism};
pub use traits::ArrayLike;
