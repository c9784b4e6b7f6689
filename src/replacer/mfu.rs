//! MFU (Most Frequently Used) replacement policy.

use std::cmp::Reverse;

use crate::common::{AccessTrace, Capacity, PageId, SlotId};
use crate::replacer::frequency::AccessCounts;
use crate::replacer::{PolicyKind, ReplacementPolicy};
use crate::simulation::{CacheState, RunResult, Simulator};

/// Evicts the resident with the highest cumulative access count.
///
/// Every access counts, including the one that admits the page. Among
/// residents with the same count the one admitted earliest goes first.
#[derive(Debug, Default)]
pub struct MfuReplacer {
    counts: AccessCounts,
}

impl MfuReplacer {
    /// Create a new MFU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `trace` through an MFU cache of `capacity` slots.
    pub fn simulate(trace: &AccessTrace, capacity: Capacity) -> RunResult {
        Simulator::new(Self::new(), capacity).run(trace)
    }

    /// Accesses to `page` so far.
    pub fn frequency(&self, page: PageId) -> u64 {
        self.counts.count(page)
    }
}

impl ReplacementPolicy for MfuReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mfu
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
            .max_by_key(|&(_, page)| {
                (
                    self.counts.count(page),
                    Reverse(self.counts.admitted_at(page)),
                )
            })
            .map(|(slot, _)| slot)
    }
}
