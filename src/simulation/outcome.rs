//! Per-access outcome records and the result of one run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{Capacity, PageId};
use crate::replacer::PolicyKind;
use crate::simulation::RunStats;

/// Why an access missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissKind {
    /// The cache still had a free slot; nothing was evicted.
    Compulsory,
    /// The cache was full; a resident was evicted to make room.
    Capacity,
}

impl fmt::Display for MissKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissKind::Compulsory => f.write_str("Compulsory"),
            MissKind::Capacity => f.write_str("Capacity"),
        }
    }
}

/// What happened on one access of the trace.
///
/// `miss_kind` is `None` exactly when `hit` is true, and `evicted` is
/// `Some` only on a [`MissKind::Capacity`] miss. Use the constructors to
/// keep those invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessOutcome {
    /// The accessed page.
    pub page: PageId,
    /// Whether the page was already resident.
    pub hit: bool,
    /// Miss classification, `None` on a hit.
    pub miss_kind: Option<MissKind>,
    /// Residents after the access, in slot order.
    pub cache: Vec<PageId>,
    /// Page evicted to admit `page`, if any.
    pub evicted: Option<PageId>,
}

impl AccessOutcome {
    /// A hit on `page`.
    pub fn hit(page: PageId, cache: Vec<PageId>) -> Self {
        Self {
            page,
            hit: true,
            miss_kind: None,
            cache,
            evicted: None,
        }
    }

    /// A miss that filled a free slot.
    pub fn compulsory_miss(page: PageId, cache: Vec<PageId>) -> Self {
        Self {
            page,
            hit: false,
            miss_kind: Some(MissKind::Compulsory),
            cache,
            evicted: None,
        }
    }

    /// A miss that evicted `evicted`.
    pub fn capacity_miss(page: PageId, cache: Vec<PageId>, evicted: PageId) -> Self {
        Self {
            page,
            hit: false,
            miss_kind: Some(MissKind::Capacity),
            cache,
            evicted: Some(evicted),
        }
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.page)?;
        match self.miss_kind {
            None => f.write_str("Hit")?,
            Some(kind) => write!(f, "Miss ({kind})")?,
        }
        write!(f, " [")?;
        for (i, page) in self.cache.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{page}")?;
        }
        f.write_str("]")?;
        if let Some(evicted) = self.evicted {
            write!(f, " evicted={evicted}")?;
        }
        Ok(())
    }
}

/// Everything one policy produced over one trace.
///
/// Created fresh by every run and owned by the caller. Two runs with the
/// same policy, trace and capacity compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunResult {
    /// Policy that produced the outcomes.
    pub policy: PolicyKind,
    /// Cache capacity used.
    pub capacity: Capacity,
    /// One outcome per trace position, in trace order.
    pub outcomes: Vec<AccessOutcome>,
    /// Number of hits.
    pub total_hits: u64,
    /// Number of misses (compulsory and capacity).
    pub total_misses: u64,
}

impl RunResult {
    /// Residents after the last access (empty for an empty trace).
    pub fn final_cache(&self) -> &[PageId] {
        self.outcomes
            .last()
            .map(|outcome| outcome.cache.as_slice())
            .unwrap_or_default()
    }

    /// Evicted pages, in eviction order.
    pub fn evictions(&self) -> impl Iterator<Item = PageId> + '_ {
        self.outcomes.iter().filter_map(|outcome| outcome.evicted)
    }

    /// Reduce the outcomes to summary statistics.
    pub fn stats(&self) -> RunStats {
        RunStats::from_outcomes(&self.outcomes)
    }
}
