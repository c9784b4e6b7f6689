//! The forward pass shared by every replacement policy.

use tracing::{debug, trace};

use crate::common::{AccessTrace, Capacity, Error, PageId, Result};
use crate::replacer::{Admission, ReplacementPolicy};
use crate::simulation::{AccessOutcome, CacheState, ResidentList, RunResult};

/// Replays an access trace through one cache under one policy.
///
/// A simulator owns its cache state and its policy's bookkeeping, and
/// [`run`](Self::run) consumes it: nothing survives from one run to the
/// next, so runs never observe each other.
///
/// Miss classification depends only on occupancy: a miss while a slot is
/// free is [`Compulsory`](crate::MissKind::Compulsory), a miss on a full
/// cache is [`Capacity`](crate::MissKind::Capacity) and evicts a page.
///
/// # Usage
/// ```
/// use pagesim::replacer::LruReplacer;
/// use pagesim::simulation::Simulator;
/// use pagesim::{AccessTrace, Capacity};
///
/// let trace = AccessTrace::from([1, 2, 3, 1, 2, 4]);
/// let result = Simulator::new(LruReplacer::new(), Capacity::new(3).unwrap()).run(&trace);
/// assert_eq!(result.total_hits, 2);
/// ```
#[derive(Debug)]
pub struct Simulator<P, C = ResidentList> {
    policy: P,
    cache: C,
    outcomes: Vec<AccessOutcome>,
    total_hits: u64,
    total_misses: u64,
}

impl<P: ReplacementPolicy> Simulator<P> {
    /// Create a simulator with an empty [`ResidentList`] of `capacity` slots.
    pub fn new(policy: P, capacity: Capacity) -> Self {
        Self::from_parts(policy, ResidentList::new(capacity))
    }
}

impl<P: ReplacementPolicy, C: CacheState> Simulator<P, C> {
    /// Create a simulator over a caller-provided cache state.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `cache` already holds pages. A
    /// fresh policy has no record of them, so it could not order them
    /// against the pages the trace admits.
    pub fn with_cache(policy: P, cache: C) -> Result<Self> {
        if !cache.is_empty() {
            return Err(Error::InvalidConfiguration(format!(
                "cache must start empty, found {} resident pages",
                cache.len()
            )));
        }
        Ok(Self::from_parts(policy, cache))
    }

    fn from_parts(policy: P, cache: C) -> Self {
        Self {
            policy,
            cache,
            outcomes: Vec::new(),
            total_hits: 0,
            total_misses: 0,
        }
    }

    /// Replay `trace` and return every outcome.
    pub fn run(mut self, trace: &AccessTrace) -> RunResult {
        let policy = self.policy.kind();
        let capacity = self.cache.capacity();
        debug!(%policy, %capacity, accesses = trace.len(), "simulation start");

        self.outcomes.reserve(trace.len());
        for (index, &page) in trace.iter().enumerate() {
            self.access(index, page);
        }

        debug!(
            %policy,
            hits = self.total_hits,
            misses = self.total_misses,
            "simulation finished"
        );

        RunResult {
            policy,
            capacity,
            outcomes: self.outcomes,
            total_hits: self.total_hits,
            total_misses: self.total_misses,
        }
    }

    /// Process the access to `page` at trace position `index`.
    fn access(&mut self, index: usize, page: PageId) {
        self.policy.record_access(index, page);

        if self.cache.contains(page) {
            self.total_hits += 1;
            self.outcomes.push(AccessOutcome::hit(page, self.cache.snapshot()));
            return;
        }

        self.total_misses += 1;
        let outcome = if self.cache.is_full() {
            let evicted = self.evict_and_admit(index, page);
            AccessOutcome::capacity_miss(page, self.cache.snapshot(), evicted)
        } else {
            self.cache.insert_or_replace(page, None);
            self.policy.record_admission(index, page);
            AccessOutcome::compulsory_miss(page, self.cache.snapshot())
        };
        self.outcomes.push(outcome);
    }

    /// Evict the policy's victim and admit `page` in its place.
    ///
    /// Returns the evicted page.
    ///
    /// # Panics
    /// If the policy picks no victim, or a slot outside the cache, while
    /// the cache is full. Every built-in policy tracks all residents, so
    /// this only fires on a broken [`ReplacementPolicy`] implementation.
    fn evict_and_admit(&mut self, index: usize, page: PageId) -> PageId {
        let victim = self
            .policy
            .victim(&self.cache)
            .and_then(|slot| self.cache.get(slot).map(|resident| (slot, resident)));
        let Some((slot, evicted)) = victim else {
            panic!(
                "{} chose no resident victim in a full cache of {} pages",
                self.policy.kind(),
                self.cache.len()
            );
        };

        match self.policy.admission() {
            Admission::ReplaceInPlace => {
                self.cache.insert_or_replace(page, Some(slot));
            }
            Admission::Append => {
                self.cache.remove(slot);
                self.cache.insert_or_replace(page, None);
            }
        }

        trace!(index, %page, %evicted, %slot, "evicted");
        self.policy.record_eviction(evicted);
        self.policy.record_admission(index, page);
        evicted
    }
}
