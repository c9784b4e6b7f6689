//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::{AccessTrace, Capacity, PageId, SlotId};
use crate::replacer::{PolicyKind, ReplacementPolicy};
use crate::simulation::{CacheState, RunResult, Simulator};

/// Evicts pages in the order they were admitted.
///
/// Hits never reorder the queue, so a page that is used constantly is
/// still evicted once it becomes the oldest resident.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `trace` through a FIFO cache of `capacity` slots.
    pub fn simulate(trace: &AccessTrace, capacity: Capacity) -> RunResult {
        Simulator::new(Self::new(), capacity).run(trace)
    }
}

impl ReplacementPolicy for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn record_admission(&mut self, _index: usize, page: PageId) {
        self.queue.push_back(page);
    }

    fn record_eviction(&mut self, page: PageId) {
        if self.queue.front() == Some(&page) {
            self.queue.pop_front();
        } else if let Some(pos) = self.queue.iter().position(|&p| p == page) {
            self.queue.remove(pos);
        }
    }

    fn victim<C: CacheState>(&self, cache: &C) -> Option<SlotId> {
        self.queue
            .front()
            .and_then(|&oldest| cache.position(oldest))
    }
}
