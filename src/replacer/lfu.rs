//! LFU (Least Frequently Used) replacement policy.

use crate::common::{AccessTrace, Capacity, PageId, SlotId};
use crate::replacer::frequency::AccessCounts;
use crate::replacer::{PolicyKind, ReplacementPolicy};
use crate::simulation::{CacheState, RunResult, Simulator};

/// Evicts the resident with the lowest cumulative access count.
///
/// Counts span the whole run and are not reset on eviction, so a page
/// that keeps coming back under working-set pressure becomes harder and
/// harder to evict. Among residents with the same count the one first
/// seen earliest in the trace goes first, even if it has since been
/// evicted and re-admitted.
#[derive(Debug, Default)]
pub struct LfuReplacer {
    counts: AccessCounts,
}

impl LfuReplacer {
    /// Create a new LFU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `trace` through an LFU cache of `capacity` slots.
    pub fn simulate(trace: &AccessTrace, capacity: Capacity) -> RunResult {
        Simulator::new(Self::new(), capacity).run(trace)
    }

    /// Accesses to `page` so far.
    pub fn frequency(&self, page: PageId) -> u64 {
        self.counts.count(page)
    }
}

impl ReplacementPolicy for LfuReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn record_access(&mut self, index: usize, page: PageId) {
        self.counts.record_access(index, page);
    }

    fn record_admission(&mut self, index: usize, page: PageId) {
        self.counts.record_admission(index, page);
    }

    fn record_eviction(&mut self, page: PageId) {
        self.counts.record_eviction(page);
    }

    fn victim<C: CacheState>(&self, cache: &C) -> Option<SlotId> {
        cache
            .residents()
            .min_by_key(|&(_, page)| (self.counts.count(page), self.counts.first_seen(page)))
            .map(|(slot, _)| slot)
    }
}
