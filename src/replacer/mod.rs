//! Eviction policy implementations (replacers).
//!
//! Every replacer owns the bookkeeping its policy needs for exactly one
//! run and picks a victim slot when the cache is full:
//! - [`FifoReplacer`] - oldest admitted page
//! - [`LruReplacer`] - least recently used page
//! - [`MruReplacer`] - most recently used page
//! - [`MfuReplacer`] - most frequently used page
//! - [`LfuReplacer`] - least frequently used page
//! - [`MinReplacer`] - page used farthest in the future (Belady)

mod fifo;
mod frequency;
mod lfu;
mod lru;
mod mfu;
mod min;
mod mru;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageId, SlotId};
use crate::simulation::CacheState;

pub use fifo::FifoReplacer;
pub use lfu::LfuReplacer;
pub use lru::LruReplacer;
pub use mfu::MfuReplacer;
pub use min::MinReplacer;
pub use mru::MruReplacer;

/// Where a newly admitted page goes when it displaces a victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Remove the victim and append the new page after the last slot.
    Append,
    /// Overwrite the victim's slot, keeping every other position.
    ReplaceInPlace,
}

/// A page replacement policy driven by [`Simulator`](crate::simulation::Simulator).
///
/// For each access at trace position `index` the simulator calls, in order:
/// 1. [`record_access`](Self::record_access), on hits and misses alike
/// 2. on a miss with a full cache, [`victim`](Self::victim) followed by
///    [`record_eviction`](Self::record_eviction)
/// 3. on a miss, [`record_admission`](Self::record_admission)
pub trait ReplacementPolicy {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// How admitted pages are placed when a victim is evicted.
    fn admission(&self) -> Admission {
        Admission::Append
    }

    /// Record that `page` was accessed at trace position `index`.
    fn record_access(&mut self, _index: usize, _page: PageId) {}

    /// Record that `page` entered the cache at trace position `index`.
    fn record_admission(&mut self, _index: usize, _page: PageId) {}

    /// Record that `page` left the cache.
    fn record_eviction(&mut self, _page: PageId) {}

    /// Select the slot to evict.
    ///
    /// Only called on a full cache, and must name a resident slot there.
    /// The simulator panics on `None` or an out-of-range slot.
    fn victim<C: CacheState>(&self, cache: &C) -> Option<SlotId>;
}

/// Selector for one of the supported policies.
///
/// Parses case-insensitively from its name:
/// ```
/// use pagesim::PolicyKind;
///
/// assert_eq!("lru".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
/// assert_eq!(PolicyKind::Min.to_string(), "MIN");
/// assert!("CLOCK".parse::<PolicyKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// First in, first out.
    Fifo,
    /// Least recently used.
    Lru,
    /// Most recently used.
    Mru,
    /// Most frequently used.
    Mfu,
    /// Least frequently used.
    Lfu,
    /// Belady's optimal offline policy.
    Min,
}

impl PolicyKind {
    /// Every supported policy.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::Mfu,
        PolicyKind::Lfu,
        PolicyKind::Min,
    ];

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Mru => "MRU",
            PolicyKind::Mfu => "MFU",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Min => "MIN",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let name = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}
