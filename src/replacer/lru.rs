//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::{AccessTrace, Capacity, PageId, SlotId};
use crate::replacer::{Admission, PolicyKind, ReplacementPolicy};
use crate::simulation::{CacheState, RunResult, Simulator};

/// Evicts the resident whose last access is oldest.
///
/// Recency is the trace position of the last access. Hits refresh it
/// before the outcome of that access is recorded, and an admitted page
/// starts at the position of the access that brought it in. The new page
/// takes over the victim's slot.
///
/// Residents always have distinct timestamps, so the tie-break (lowest
/// page number) exists only to keep the ordering total.
#[derive(Debug, Default)]
pub struct LruReplacer {
    last_used: HashMap<PageId, usize>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `trace` through an LRU cache of `capacity` slots.
    pub fn simulate(trace: &AccessTrace, capacity: Capacity) -> RunResult {
        Simulator::new(Self::new(), capacity).run(trace)
    }

    /// Trace position of the last access to `page`, if tracked.
    pub fn last_used(&self, page: PageId) -> Option<usize> {
        self.last_used.get(&page).copied()
    }
}

impl ReplacementPolicy for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn admission(&self) -> Admission {
        Admission::ReplaceInPlace
    }

    fn record_access(&mut self, index: usize, page: PageId) {
        self.last_used.insert(page, index);
    }

    fn record_eviction(&mut self, page: PageId) {
        self.last_used.remove(&page);
    }

    fn victim<C: CacheState>(&self, cache: &C) -> Option<SlotId> {
        cache
            .residents()
            .min_by_key(|&(_, page)| (self.last_used(page).unwrap_or(0), page))
            .map(|(slot, _)| slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: usize) -> Capacity {
        Capacity::new(n).unwrap()
    }

    #[test]
    fn test_lru_hits_refresh_recency() {
        let result = LruReplacer::simulate(&AccessTrace::from([1, 2, 3, 1, 2, 4]), cap(3));

        assert_eq!(result.outcomes[5].evicted, Some(PageId(3)));
        assert_eq!(result.final_cache(), &[PageId(1), PageId(2), PageId(4)]);
        assert_eq!(result.total_hits, 2);
    }

    #[test]
    fn test_lru_replaces_in_place() {
        let result = LruReplacer::simulate(&AccessTrace::from([1, 2, 1, 3]), cap(2));

        assert_eq!(result.outcomes[3].evicted, Some(PageId(2)));
        assert_eq!(result.final_cache(), &[PageId(1), PageId(3)]);
    }

    #[test]
    fn test_lru_miss_count() {
        let trace = AccessTrace::from([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let result = LruReplacer::simulate(&trace, cap(3));

        assert_eq!(result.total_misses, 10);
        assert_eq!(result.final_cache(), &[PageId(3), PageId(4), PageId(5)]);
    }

    #[test]
    fn test_lru_readmitted_page_uses_current_position() {
        // 1 is evicted and re-admitted at position 3; 2 must go next, not 1.
        let result = LruReplacer::simulate(&AccessTrace::from([1, 2, 3, 1, 4]), cap(2));

        assert_eq!(result.outcomes[3].evicted, Some(PageId(2)));
        assert_eq!(result.outcomes[4].evicted, Some(PageId(3)));
    }
}
