//! Gesture state machine.
//!
//! `Idle -> Dragging -> Committing -> Idle`. A new gesture can only start from
//! `Idle`, so a pointer-down while a commit animation is still running is
//! rejected.

use slotline_core::geometry::LayoutRect;
use slotline_core::math::Vec2;

use crate::id::ItemId;
use crate::view::AnimationHandle;

/// State of an active drag.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    /// The detached item.
    pub item: ItemId,
    /// Base position the item was taken from (and the placeholder occupies).
    pub origin: usize,
    /// Pointer position relative to the item's top-left at press time.
    pub grab_offset: Vec2,
    /// Full size of the item, captured at press time.
    pub item_size: Vec2,
    /// Current top-left of the detached item.
    pub position: Vec2,
    /// Last item seen under the pointer.
    pub last_target: Option<ItemId>,
}

impl Gesture {
    pub fn new(item: ItemId, origin: usize, bounds: LayoutRect, pointer: Vec2) -> Self {
        Self {
            item,
            origin,
            grab_offset: pointer - bounds.position(),
            item_size: bounds.size(),
            position: bounds.position(),
            last_target: None,
        }
    }

    /// Move the detached item with the pointer. Returns its new top-left.
    pub fn follow(&mut self, pointer: Vec2) -> Vec2 {
        self.position = pointer - self.grab_offset;
        self.position
    }

    /// Record the item under the pointer.
    ///
    /// Returns the target only when it differs from the last one seen, so
    /// moving within the same item triggers nothing. Passing `None` (pointer
    /// over a gap, the placeholder, or outside) also resets the last target.
    pub fn observe_target(&mut self, target: Option<ItemId>) -> Option<ItemId> {
        if target == self.last_target {
            return None;
        }
        self.last_target = target;
        target
    }
}

/// A released gesture waiting for its snap animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub gesture: Gesture,
    /// Resolved slot the item will be inserted at.
    pub index: usize,
    pub handle: AnimationHandle,
}

/// Where the list is in the drag lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging(Gesture),
    Committing(Commit),
}

impl GesturePhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, GesturePhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GesturePhase::Dragging(_))
    }

    pub fn is_committing(&self) -> bool {
        matches!(self, GesturePhase::Committing(_))
    }

    /// The gesture, whether still dragging or committing.
    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            GesturePhase::Idle => None,
            GesturePhase::Dragging(gesture) => Some(gesture),
            GesturePhase::Committing(commit) => Some(&commit.gesture),
        }
    }

    /// The detached item, if any.
    pub fn dragged_item(&self) -> Option<ItemId> {
        self.gesture().map(|g| g.item)
    }
}
