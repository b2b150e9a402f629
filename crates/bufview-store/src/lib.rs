//! Shared backing stores and typed element views.
//!
//! One [`BackingStore`] holds raw bytes; any number of [`TypedView`]s
//! window into it with a fixed element kind, byte offset, and length.
//! Views never own bytes, so writes through one view are visible through
//! every other view that overlaps the same range.
//!
//! # Architecture
//!
//! ```text
//! ViewFactory (one const per ElementKind)
//! └── TypedView (store handle + byte_offset + len)
//!     ├── &'static ElementCodec (width, decode/encode/narrow fn pointers)
//!     └── BackingStore (Rc<RefCell<Box<[u8]>>>, fixed length)
//!
//! SpeculativeGate (ProgramPoint → SiteState)
//! └── TypedView::get_int_optimistic → ElementCodec::narrow
//! ```
//!
//! # Bounds policy
//!
//! - **Construction** from raw byte offsets is exact: a range that does not
//!   fit the store is a [`StoreError::RangeOutOfBounds`].
//! - **Reads** outside `[0, len)` return [`StoreError::IndexOutOfBounds`].
//! - **Writes** outside `[0, len)` are silently dropped.
//! - **Subviews** clamp their arguments and never fail.
//!
//! # Threading
//!
//! Stores and views are `!Send` and `!Sync`. All access happens on the
//! thread that created the store.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod error;
pub mod factory;
pub mod speculate;
pub mod store;
pub mod view;

// Public re-exports for the primary API surface.
pub use codec::ElementCodec;
pub use config::StoreConfig;
pub use error::{ErrorCategory, StoreError};
pub use factory::ViewFactory;
pub use speculate::{SiteState, SpeculativeGate};
pub use store::BackingStore;
pub use view::TypedView;
