//! Per-call-site speculation state for optimistic element reads.
//!
//! Compiled code starts every read site narrow: it assumes elements fit an
//! `i32`. The first value that does not fit widens the site for good and is
//! reported once as [`Optimistic::Unwarranted`]. Later reads at that site
//! decode wide and never escalate again.

use indexmap::IndexMap;

use bufview_core::{Number, Optimistic, ProgramPoint};

use crate::error::StoreError;
use crate::view::TypedView;

/// Representation assumed at a read site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SiteState {
    /// Reads are attempted as `i32`.
    #[default]
    Narrow,
    /// A read escalated; reads decode the full logical value.
    Widened,
}

/// Tracks [`SiteState`] for every program point that has read through it.
///
/// Transitions are monotonic: a site goes `Narrow → Widened` at most once
/// and stays there until [`reset`](Self::reset).
#[derive(Clone, Debug, Default)]
pub struct SpeculativeGate {
    sites: IndexMap<ProgramPoint, SiteState>,
}

impl SpeculativeGate {
    /// An empty gate; every site starts narrow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read element `index` of `view` at site `pp`.
    ///
    /// An out-of-range index returns the view's error and leaves the site's
    /// state untouched.
    pub fn get(
        &mut self,
        view: &TypedView,
        index: i64,
        pp: ProgramPoint,
    ) -> Result<Optimistic<Number>, StoreError> {
        match self.state(pp) {
            SiteState::Widened => Ok(Optimistic::Value(view.get(index)?)),
            SiteState::Narrow => {
                let read = view.get_int_optimistic(index, pp)?;
                match read {
                    Optimistic::Value(v) => {
                        self.sites.entry(pp).or_insert(SiteState::Narrow);
                        Ok(Optimistic::Value(Number::Int(v)))
                    }
                    Optimistic::Unwarranted(esc) => {
                        log::debug!("widening {pp} on {view}[{index}]: {}", esc.value);
                        self.sites.insert(pp, SiteState::Widened);
                        Ok(Optimistic::Unwarranted(esc))
                    }
                }
            }
        }
    }

    /// Current state of `pp`. Sites never read are [`SiteState::Narrow`].
    pub fn state(&self, pp: ProgramPoint) -> SiteState {
        self.sites.get(&pp).copied().unwrap_or_default()
    }

    /// Number of widened sites.
    pub fn widened_count(&self) -> usize {
        self.sites
            .values()
            .filter(|s| **s == SiteState::Widened)
            .count()
    }

    /// Every seen site with its state, in first-read order.
    pub fn sites(&self) -> impl Iterator<Item = (ProgramPoint, SiteState)> + '_ {
        self.sites.iter().map(|(pp, s)| (*pp, *s))
    }

    /// Forget every site, as when code is recompiled.
    pub fn reset(&mut self) {
        self.sites.clear();
    }
}
