//! Access counting shared by the frequency-based policies.

use std::collections::HashMap;

use crate::common::PageId;

/// Cumulative per-page access counts plus the positions used to order
/// equal-count residents.
///
/// Counts and first-seen positions are never reset: a page that is
/// evicted and later re-admitted keeps accruing on top of its earlier
/// accesses and keeps its original place in the first-seen order.
/// Admission positions only exist while a page is resident.
#[derive(Debug, Default)]
pub(crate) struct AccessCounts {
    counts: HashMap<PageId, u64>,
    first_seen: HashMap<PageId, usize>,
    admitted_at: HashMap<PageId, usize>,
}

impl AccessCounts {
    pub(crate) fn record_access(&mut self, index: usize, page: PageId) {
        *self.counts.entry(page).or_insert(0) += 1;
        self.first_seen.entry(page).or_insert(index);
    }

    pub(crate) fn record_admission(&mut self, index: usize, page: PageId) {
        self.admitted_at.insert(page, index);
    }

    pub(crate) fn record_eviction(&mut self, page: PageId) {
        self.admitted_at.remove(&page);
    }

    pub(crate) fn count(&self, page: PageId) -> u64 {
        self.counts.get(&page).copied().unwrap_or(0)
    }

    /// Trace position of the first access to `page` in the whole run.
    pub(crate) fn first_seen(&self, page: PageId) -> usize {
        self.first_seen.get(&page).copied().unwrap_or(usize::MAX)
    }

    /// Trace position at which `page` entered its current residency.
    pub(crate) fn admitted_at(&self, page: PageId) -> usize {
        self.admitted_at.get(&page).copied().unwrap_or(usize::MAX)
    }
}
