//! MRU (Most Recently Used) replacement policy.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::{AccessTrace, Capacity, PageId, SlotId};
use crate::replacer::{Admission, PolicyKind, ReplacementPolicy};
use crate::simulation::{CacheState, RunResult, Simulator};

/// Evicts the resident whose last access is newest.
///
/// Bookkeeping matches [`LruReplacer`](super::LruReplacer): hits refresh
/// the page's timestamp, which is exactly what makes a hot page the next
/// victim here. The new page takes over the victim's slot. Equal
/// timestamps resolve to the lowest page number.
#[derive(Debug, Default)]
pub struct MruReplacer {
    last_used: HashMap<PageId, usize>,
}

impl MruReplacer {
    /// Create a new MRU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `trace` through an MRU cache of `capacity` slots.
    pub fn simulate(trace: &AccessTrace, capacity: Capacity) -> RunResult {
        Simulator::new(Self::new(), capacity).run(trace)
    }
}

impl ReplacementPolicy for MruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mru
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
            .max_by_key(|&(_, page)| {
                let last_used = self.last_used.get(&page).copied().unwrap_or(0);
                (last_used, Reverse(page))
            })
            .map(|(slot, _)| slot)
    }
}
