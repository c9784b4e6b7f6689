//! Run statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::simulation::{AccessOutcome, MissKind};

/// Summary counters reduced from the outcomes of one run.
///
/// Unlike the outcome log this is small and `Copy`, so it can be
/// printed, serialized and compared freely.
///
/// # Example
/// ```
/// use pagesim::{run, AccessTrace};
///
/// let result = run("FIFO", &AccessTrace::from([1, 2, 3, 1, 2, 4]), 3).unwrap();
/// let stats = result.stats();
/// assert_eq!(stats.hits, 2);
/// assert_eq!(stats.compulsory_misses, 3);
/// assert_eq!(stats.capacity_misses, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of accesses replayed.
    pub accesses: u64,
    /// Accesses that found their page resident.
    pub hits: u64,
    /// Misses that filled a free slot.
    pub compulsory_misses: u64,
    /// Misses that forced an eviction.
    pub capacity_misses: u64,
    /// Pages evicted.
    pub evictions: u64,
}

impl RunStats {
    /// Reduce an outcome log.
    pub fn from_outcomes(outcomes: &[AccessOutcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut stats, outcome| {
            stats.accesses += 1;
            match outcome.miss_kind {
                None => stats.hits += 1,
                Some(MissKind::Compulsory) => stats.compulsory_misses += 1,
                Some(MissKind::Capacity) => stats.capacity_misses += 1,
            }
            if outcome.evicted.is_some() {
                stats.evictions += 1;
            }
            stats
        })
    }

    /// Total misses of either kind.
    pub fn misses(&self) -> u64 {
        self.compulsory_misses + self.capacity_misses
    }

    /// Share of accesses that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.ratio(self.hits)
    }

    /// Share of accesses that missed (0.0 to 1.0).
    pub fn miss_rate(&self) -> f64 {
        self.ratio(self.misses())
    }

    /// `count` as a share of all accesses; 0.0 for an empty run.
    pub fn ratio(&self, count: u64) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            count as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}/{}, compulsory: {}, capacity: {}, misses: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.accesses,
            self.compulsory_misses,
            self.capacity_misses,
            self.misses(),
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    fn sample() -> Vec<AccessOutcome> {
        vec![
            AccessOutcome::compulsory_miss(PageId(1), vec![PageId(1)]),
            AccessOutcome::hit(PageId(1), vec![PageId(1)]),
            AccessOutcome::capacity_miss(PageId(2), vec![PageId(2)], PageId(1)),
            AccessOutcome::hit(PageId(2), vec![PageId(2)]),
        ]
    }

    #[test]
    fn test_stats_empty() {
        let stats = RunStats::from_outcomes(&[]);
        assert_eq!(stats, RunStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.miss_rate(), 0.0);
    }

    #[test]
    fn test_stats_counts() {
        let stats = RunStats::from_outcomes(&sample());

        assert_eq!(stats.accesses, 4);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.compulsory_misses, 1);
        assert_eq!(stats.capacity_misses, 1);
        assert_eq!(stats.misses(), 2);
        assert_eq!(stats.evictions, stats.capacity_misses);
        assert_eq!(stats.hit_rate(), 0.5);
        assert_eq!(stats.miss_rate(), 0.5);
    }

    #[test]
    fn test_stats_display() {
        let display = format!("{}", RunStats::from_outcomes(&sample()));

        assert!(display.contains("hits: 2/4"));
        assert!(display.contains("compulsory: 1"));
        assert!(display.contains("capacity: 1"));
        assert!(display.contains("50.00%"));
    }
}
