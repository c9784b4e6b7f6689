//! Cache slot identifier type.

use std::fmt;

/// Identifies a slot (position) inside a cache state.
///
/// Using `usize` because:
/// 1. Residents are stored in a `Vec<PageId>`
/// 2. Direct indexing without casting: `residents[slot.0]`
///
/// Slot numbers are only meaningful for the cache state that produced
/// them and only until that state is next mutated.
///
/// # Example
/// ```
/// use pagesim::SlotId;
///
/// let slot = SlotId::new(2);
/// assert_eq!(slot.0, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Create a new SlotId.
    #[inline]
    pub fn new(id: usize) -> Self {
        SlotId(id)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_new() {
        let slot = SlotId::new(10);
        assert_eq!(slot.0, 10);
    }

    #[test]
    fn test_slot_id_equality() {
        assert_eq!(SlotId::new(5), SlotId::new(5));
        assert_ne!(SlotId::new(5), SlotId::new(6));
    }

    #[test]
    fn test_slot_id_display() {
        assert_eq!(format!("{}", SlotId::new(42)), "Slot(42)");
    }
}
