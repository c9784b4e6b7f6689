//! MIN (Belady's optimal) replacement policy.

use std::collections::{HashMap, VecDeque};

use crate::common::{AccessTrace, Capacity, PageId, SlotId};
use crate::replacer::{PolicyKind, ReplacementPolicy};
use crate::simulation::{CacheState, RunResult, Simulator};

/// Evicts the resident whose next use lies farthest in the future.
///
/// Needs the whole trace up front: construction scans it once and keeps,
/// per page, the queue of positions where it is accessed. Each access
/// pops its own position, so the front of a queue is always the page's
/// next use.
///
/// A resident that is never used again has an infinite next-use distance
/// and is always preferred. When several residents are never used again,
/// the first one in slot order is evicted.
#[derive(Debug)]
pub struct MinReplacer {
    future_uses: HashMap<PageId, VecDeque<usize>>,
}

impl MinReplacer {
    /// Build the future-use index for `trace`.
    ///
    /// The replacer must then be driven over this same trace.
    pub fn new(trace: &AccessTrace) -> Self {
        let mut future_uses: HashMap<PageId, VecDeque<usize>> = HashMap::new();
        for (index, &page) in trace.iter().enumerate() {
            future_uses.entry(page).or_default().push_back(index);
        }
        Self { future_uses }
    }

    /// Replay `trace` through an optimal cache of `capacity` slots.
    pub fn simulate(trace: &AccessTrace, capacity: Capacity) -> RunResult {
        Simulator::new(Self::new(trace), capacity).run(trace)
    }

    /// Trace position of the next access to `page`, `None` if it is
    /// never accessed again.
    pub fn next_use(&self, page: PageId) -> Option<usize> {
        self.future_uses
            .get(&page)
            .and_then(|uses| uses.front().copied())
    }
}

impl ReplacementPolicy for MinReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Min
    }

    fn record_access(&mut self, index: usize, page: PageId) {
        if let Some(uses) = self.future_uses.get_mut(&page) {
            while uses.front().is_some_and(|&next| next <= index) {
                uses.pop_front();
            }
        }
    }

    fn victim<C: CacheState>(&self, cache: &C) -> Option<SlotId> {
        let mut farthest: Option<(SlotId, usize)> = None;
        for (slot, page) in cache.residents() {
            match self.next_use(page) {
                None => return Some(slot),
                Some(next) => {
                    if farthest.map_or(true, |(_, best)| next > best) {
                        farthest = Some((slot, next));
                    }
                }
            }
        }
        farthest.map(|(slot, _)| slot)
    }
}
