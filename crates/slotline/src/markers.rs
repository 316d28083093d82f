//! Transient marker flags written to the host while a gesture is active.

use bitflags::bitflags;

use crate::id::SlotId;

bitflags! {
    /// Transient states a host renders (CSS classes, style flags, ...).
    ///
    /// All of them are cleared when the gesture commits or is cancelled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Markers: u8 {
        /// No markers
        const NONE          = 0b0000_0000;

        /// The container has an active drag.
        const HOST_DRAG     = 0b0000_0001;

        /// The slot belongs to a list with an active drag.
        const LIST_DRAG     = 0b0000_0010;

        /// The item is the one being dragged.
        const DRAGGING      = 0b0000_0100;

        /// The slot is the drop placeholder.
        const PLACEHOLDER   = 0b0000_1000;

        /// Text selection is suppressed on this element.
        const NO_SELECT     = 0b0001_0000;
    }
}

impl Markers {
    /// Markers applied to the container at drag start.
    pub const CONTAINER: Self = Self::HOST_DRAG.union(Self::NO_SELECT);

    /// Markers applied to the detached item at drag start.
    pub const DRAGGED_ITEM: Self = Self::DRAGGING.union(Self::NO_SELECT);

    /// Returns true if the element is excluded from hit-testing.
    #[inline]
    pub fn excludes_hit_test(&self) -> bool {
        self.intersects(Self::DRAGGING | Self::PLACEHOLDER)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Where a marker write lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkTarget {
    /// The container element itself.
    Container,
    /// One child slot (or the detached item).
    Slot(SlotId),
}

impl From<SlotId> for MarkTarget {
    fn from(slot: SlotId) -> Self {
        MarkTarget::Slot(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_markers() {
        assert!(Markers::CONTAINER.contains(Markers::HOST_DRAG));
        assert!(Markers::CONTAINER.contains(Markers::NO_SELECT));
        assert!(!Markers::CONTAINER.contains(Markers::DRAGGING));
        assert!(Markers::DRAGGED_ITEM.contains(Markers::DRAGGING));
    }

    #[test]
    fn test_hit_test_exclusion() {
        assert!(Markers::DRAGGING.excludes_hit_test());
        assert!(Markers::PLACEHOLDER.excludes_hit_test());
        assert!(!Markers::LIST_DRAG.excludes_hit_test());
        assert!(!Markers::default().excludes_hit_test());
    }
}
