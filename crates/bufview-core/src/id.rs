//! Strongly-typed identifiers for stores and speculative call sites.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a speculative access site in compiled code.
///
/// The compiler assigns one program point per optimistic element read.
/// Widening decisions are scoped to a program point, so two reads of the
/// same view at different sites are tracked independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramPoint(pub u32);

impl fmt::Display for ProgramPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pp{}", self.0)
    }
}

impl From<u32> for ProgramPoint {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`StoreInstanceId`] allocation.
static STORE_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a backing store.
///
/// Allocated from a monotonic atomic counter via [`StoreInstanceId::next`].
/// Two distinct stores always have different IDs, even if they have the
/// same length and contents. Cloning a store handle preserves the ID,
/// since the clone refers to the same bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreInstanceId(u64);

impl StoreInstanceId {
    /// Allocate a fresh, unique instance ID.
    pub fn next() -> Self {
        Self(STORE_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StoreInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
