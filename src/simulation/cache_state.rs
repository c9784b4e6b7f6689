//! Cache state: the residents of one simulated cache.
//!
//! Replacement policies never touch the backing storage directly. They see
//! the residents through [`CacheState`], which keeps the policy logic
//! independent of how residents are stored. [`ResidentList`] is the
//! default backing: a bounded `Vec` with linear scans, which is the right
//! trade-off for the small capacities a trace replay uses.

use crate::common::{Capacity, PageId, SlotId};

/// Capability interface over the residents of a simulated cache.
///
/// Slots are numbered `0..len()` in iteration order. Removing a slot
/// shifts every later slot down by one; replacing a slot keeps all
/// positions stable.
pub trait CacheState {
    /// Maximum number of residents.
    fn capacity(&self) -> Capacity;

    /// Current number of residents.
    fn len(&self) -> usize;

    /// Whether the cache holds no pages.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether admitting a new page requires an eviction.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity().get()
    }

    /// Slot holding `page`, if resident.
    fn position(&self, page: PageId) -> Option<SlotId>;

    /// Whether `page` is resident.
    fn contains(&self, page: PageId) -> bool {
        self.position(page).is_some()
    }

    /// Page held in `slot`.
    fn get(&self, slot: SlotId) -> Option<PageId>;

    /// Admit `page`.
    ///
    /// With `Some(slot)` the page overwrites that slot and the previous
    /// occupant is returned. With `None` the page is appended after the
    /// last slot and `None` is returned.
    ///
    /// Replacing a slot that does not exist, or appending to a full cache,
    /// is a caller bug; implementations panic rather than grow or guess.
    fn insert_or_replace(&mut self, page: PageId, slot: Option<SlotId>) -> Option<PageId>;

    /// Remove the page in `slot`, shifting later slots down.
    fn remove(&mut self, slot: SlotId) -> Option<PageId>;

    /// Residents in slot order.
    fn residents(&self) -> impl Iterator<Item = (SlotId, PageId)> + '_;

    /// Owned copy of the residents in slot order.
    fn snapshot(&self) -> Vec<PageId> {
        self.residents().map(|(_, page)| page).collect()
    }
}

/// `Vec`-backed cache state with linear lookups.
#[derive(Debug, Clone)]
pub struct ResidentList {
    pages: Vec<PageId>,
    capacity: Capacity,
}

impl ResidentList {
    /// Create an empty cache state bounded by `capacity`.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            pages: Vec::with_capacity(capacity.get()),
            capacity,
        }
    }
}

impl CacheState for ResidentList {
    fn capacity(&self) -> Capacity {
        self.capacity
    }

    fn len(&self) -> usize {
        self.pages.len()
    }

    fn position(&self, page: PageId) -> Option<SlotId> {
        self.pages.iter().position(|&p| p == page).map(SlotId::new)
    }

    fn get(&self, slot: SlotId) -> Option<PageId> {
        self.pages.get(slot.0).copied()
    }

    fn insert_or_replace(&mut self, page: PageId, slot: Option<SlotId>) -> Option<PageId> {
        debug_assert!(!self.contains(page), "{page} is already resident");
        if let Some(slot) = slot {
            let len = self.pages.len();
            let Some(occupant) = self.pages.get_mut(slot.0) else {
                panic!("{slot} is out of range for {len} residents");
            };
            return Some(std::mem::replace(occupant, page));
        }
        assert!(!self.is_full(), "append past capacity {}", self.capacity);
        self.pages.push(page);
        None
    }

    fn remove(&mut self, slot: SlotId) -> Option<PageId> {
        (slot.0 < self.pages.len()).then(|| self.pages.remove(slot.0))
    }

    fn residents(&self) -> impl Iterator<Item = (SlotId, PageId)> + '_ {
        self.pages
            .iter()
            .enumerate()
            .map(|(i, &page)| (SlotId::new(i), page))
    }

    fn snapshot(&self) -> Vec<PageId> {
        self.pages.clone()
    }
}
