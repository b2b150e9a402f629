//! bufview: shared byte buffers with typed, aliasing element views.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the bufview sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use bufview::prelude::*;
//!
//! let store = BackingStore::allocate(16, &StoreConfig::default()).unwrap();
//! let words = ViewFactory::UINT32.create_whole(&store);
//! let bytes = ViewFactory::UINT8.create_whole(&store);
//!
//! words.set(0, 4294967295.0);
//! assert_eq!(words.get(0).unwrap(), Number::Double(4294967295.0));
//! assert_eq!(bytes.get(0).unwrap(), Number::Int(255));
//!
//! // Writes past the end are dropped; reads past the end fail.
//! words.set(5, 1);
//! assert!(words.get(5).is_err());
//!
//! // Subviews clamp their arguments and alias the parent.
//! let tail = words.subview(-2, Some(10));
//! tail.set(0, 7);
//! assert_eq!(words.get(2).unwrap(), Number::Double(7.0));
//!
//! // Optimistic reads escalate once per site.
//! let mut gate = SpeculativeGate::new();
//! let pp = ProgramPoint(0);
//! assert!(gate.get(&words, 0, pp).unwrap().is_unwarranted());
//! assert_eq!(gate.state(pp), SiteState::Widened);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `bufview-core` | Element kinds, `Number`, IDs, coercions, optimistic signal |
//! | [`store`] | `bufview-store` | Backing stores, codecs, views, factories, speculative gate |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, coercions, and IDs (`bufview-core`).
///
/// Numeric conversions used by element encoders live in
/// [`types::convert`].
pub use bufview_core as types;

/// Backing stores and typed views (`bufview-store`).
///
/// Views are built through [`store::ViewFactory`]; every failure is a
/// [`store::StoreError`].
pub use bufview_store as store;

/// Common imports for typical bufview usage.
///
/// ```rust
/// use bufview::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use bufview_core::{
        ArrayLike, ElementKind, Number, Optimistic, ProgramPoint, UnwarrantedOptimism,
    };

    // Stores and views
    pub use bufview_store::{BackingStore, StoreConfig, TypedView, ViewFactory};

    // Speculation
    pub use bufview_store::{SiteState, SpeculativeGate};

    // Errors
    pub use bufview_store::{ErrorCategory, StoreError};
}
