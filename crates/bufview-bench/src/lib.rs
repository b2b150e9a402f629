//! Benchmark inputs for bufview.
//!
//! - [`word_pattern`]: deterministic `u32` data from a seed
//! - [`filled_view`]: a whole-store view of one kind holding that data
//! - [`WIDE_EVERY`]: how often [`word_pattern`] emits a value above `i32::MAX`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bufview_core::ElementKind;
use bufview_store::{BackingStore, TypedView, ViewFactory};

/// One word in this many has its top bit set.
pub const WIDE_EVERY: usize = 64;

/// Generate `n` deterministic words.
///
/// Every value fits an `i32` except each [`WIDE_EVERY`]th, so optimistic
/// reads over the data escalate rarely.
pub fn word_pattern(n: usize, seed: u64) -> Vec<u32> {
    (0..n)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add((i as u64).wrapping_mul(1442695040888963407));
            let w = (h >> 33) as u32 & 0x7FFF_FFFF;
            if i % WIDE_EVERY == WIDE_EVERY - 1 {
                w | 0x8000_0000
            } else {
                w
            }
        })
        .collect()
}

/// A view of `kind` over a fresh store of `len` elements holding
/// [`word_pattern`] data, coerced per kind.
pub fn filled_view(kind: ElementKind, len: usize, seed: u64) -> TypedView {
    let store = BackingStore::from_bytes(vec![0; len * kind.bytes_per_element()]);
    let view = ViewFactory::for_kind(kind).create_whole(&store);
    view.bulk_set(word_pattern(len, seed).as_slice(), 0);
    view
}
