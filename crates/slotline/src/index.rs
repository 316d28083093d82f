//! Effective (visual) indices derived from base order plus offsets.

use crate::container::Container;
use crate::id::{ItemId, SlotId};
use crate::offset::OffsetTracker;

/// Read-only view combining structural order and offsets.
#[derive(Debug, Clone, Copy)]
pub struct IndexResolver<'a> {
    container: &'a Container,
    offsets: &'a OffsetTracker,
}

impl<'a> IndexResolver<'a> {
    pub fn new(container: &'a Container, offsets: &'a OffsetTracker) -> Self {
        Self { container, offsets }
    }

    /// The slot an item visually occupies right now.
    ///
    /// Items that are not children of the container (the dragged item) have
    /// no effective index.
    pub fn effective_index(&self, item: ItemId) -> Option<isize> {
        let slot = SlotId::Item(item);
        let base = self.container.position(slot)? as isize;
        Some(base + self.offsets.item_step(slot) as isize)
    }

    /// The placeholder's visual slot, possibly fractional.
    ///
    /// With a degenerate item size the placeholder cannot have moved, so its
    /// base position is returned.
    pub fn placeholder_effective_index(&self) -> Option<f32> {
        let base = self.container.placeholder_index()? as f32;
        if !self.offsets.can_shift() {
            return Some(base);
        }
        Some(base + self.offsets.current_offset(SlotId::Placeholder) / self.offsets.item_size())
    }
}
