//! Structural order of the reorderable container.

use slotline_core::alloc::HashSet;

use crate::error::{ReorderError, ReorderResult};
use crate::id::{ItemId, SlotId};

/// Ordered children of the container.
///
/// This is the base order. It only changes when a gesture swaps the
/// placeholder in for the dragged item and when the commit swaps it back out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    slots: Vec<SlotId>,
}

impl Container {
    /// Create a container from the initial item order.
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> ReorderResult<Self> {
        let mut seen = HashSet::new();
        let mut slots = Vec::new();
        for item in items {
            if !seen.insert(item) {
                return Err(ReorderError::DuplicateItem(item));
            }
            slots.push(SlotId::Item(item));
        }
        Ok(Self { slots })
    }

    /// Number of slots, including the placeholder when present.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[SlotId] {
        &self.slots
    }

    /// Items in base order, skipping the placeholder.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.slots.iter().filter_map(|slot| slot.item())
    }

    /// Items in base order as an owned list.
    pub fn order(&self) -> Vec<ItemId> {
        self.items().collect()
    }

    pub fn get(&self, index: usize) -> Option<SlotId> {
        self.slots.get(index).copied()
    }

    /// Base position of a slot.
    pub fn position(&self, slot: SlotId) -> Option<usize> {
        self.slots.iter().position(|s| *s == slot)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.position(SlotId::Item(item)).is_some()
    }

    pub fn placeholder_index(&self) -> Option<usize> {
        self.position(SlotId::Placeholder)
    }

    /// Put the placeholder where `item` is and take the item out.
    ///
    /// Returns the shared base position, or `None` if the item is not a child
    /// or a placeholder already exists.
    pub(crate) fn swap_in_placeholder(&mut self, item: ItemId) -> Option<usize> {
        if self.placeholder_index().is_some() {
            return None;
        }
        let index = self.position(SlotId::Item(item))?;
        self.slots[index] = SlotId::Placeholder;
        Some(index)
    }

    /// Remove the placeholder, returning where it was.
    pub(crate) fn remove_placeholder(&mut self) -> Option<usize> {
        let index = self.placeholder_index()?;
        self.slots.remove(index);
        Some(index)
    }

    /// Insert `item` at `index`, clamped to the end. Returns the index used.
    pub(crate) fn insert_item(&mut self, index: usize, item: ItemId) -> usize {
        let index = index.min(self.slots.len());
        self.slots.insert(index, SlotId::Item(item));
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(keys: &[&str]) -> Vec<ItemId> {
        keys.iter().map(|k| ItemId::new(k)).collect()
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Container::new(ids(&["a", "b", "a"])).unwrap_err();
        assert_eq!(err, ReorderError::DuplicateItem(ItemId::new("a")));
    }

    #[test]
    fn test_placeholder_swap() {
        let mut container = Container::new(ids(&["a", "b", "c"])).unwrap();

        assert_eq!(container.swap_in_placeholder(ItemId::new("b")), Some(1));
        assert_eq!(container.placeholder_index(), Some(1));
        assert_eq!(container.len(), 3);
        assert_eq!(container.order(), ids(&["a", "c"]));
        assert!(!container.contains(ItemId::new("b")));

        // Only one placeholder at a time
        assert_eq!(container.swap_in_placeholder(ItemId::new("a")), None);

        assert_eq!(container.remove_placeholder(), Some(1));
        assert_eq!(container.insert_item(2, ItemId::new("b")), 2);
        assert_eq!(container.order(), ids(&["a", "c", "b"]));
    }

    #[test]
    fn test_insert_clamped() {
        let mut container = Container::new(ids(&["a"])).unwrap();
        assert_eq!(container.insert_item(9, ItemId::new("z")), 1);
        assert_eq!(container.order(), ids(&["a", "z"]));
    }

    #[test]
    fn test_unknown_item_swap() {
        let mut container = Container::new(ids(&["a"])).unwrap();
        assert_eq!(container.swap_in_placeholder(ItemId::new("x")), None);
        assert!(container.placeholder_index().is_none());
    }
}
