//! Host-side collaborators.
//!
//! The reorder engine never touches a real widget tree. It asks a [`Geometry`]
//! what is under the pointer, writes visual side effects to a [`ListView`], and
//! hands the final snap to an [`Animator`]. One host type usually implements
//! both `Geometry` and `ListView`; see [`StackView`](crate::stack::StackView)
//! for a headless one.

use slotline_core::geometry::{Axis, LayoutRect};
use slotline_core::math::Vec2;

use crate::animation::EasingFunction;
use crate::id::{ItemId, SlotId};
use crate::markers::{MarkTarget, Markers};

/// Hit-testing and measurement. Pure queries.
pub trait Geometry {
    /// Topmost item whose visual box contains `point`.
    ///
    /// Must not return the placeholder or an item marked
    /// [`Markers::DRAGGING`].
    fn item_at(&self, point: Vec2) -> Option<ItemId>;

    /// Structural layout box of a slot, without any transient offset applied.
    ///
    /// For the detached item this is its current absolute box.
    fn measure(&self, slot: SlotId) -> Option<LayoutRect>;
}

/// Write-only visual and structural side effects.
pub trait ListView {
    /// Insert an empty placeholder of `size` at `index`.
    fn insert_placeholder(&mut self, index: usize, size: Vec2);

    /// Take `item` out of normal flow and position it absolutely at `bounds`.
    fn detach_item(&mut self, item: ItemId, bounds: LayoutRect);

    fn remove_placeholder(&mut self);

    /// Put `item` back into normal flow at `index`.
    fn insert_item(&mut self, item: ItemId, index: usize);

    fn set_markers(&mut self, target: MarkTarget, markers: Markers, enabled: bool);

    /// Displace a slot along `axis` by `offset` pixels.
    fn apply_offset(&mut self, slot: SlotId, axis: Axis, offset: f32);

    /// Move the detached item so its top-left sits at `position`.
    fn set_absolute_position(&mut self, item: ItemId, position: Vec2);

    /// Strip every marker, offset and absolute position from `target`.
    fn clear_transient(&mut self, target: MarkTarget);
}

/// Handle identifying one snap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// The animated move of the dragged item into its final slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimation {
    pub item: ItemId,
    /// Current top-left of the detached item.
    pub from: Vec2,
    /// Top-left of the resolved slot.
    pub to: Vec2,
    /// Duration in seconds.
    pub duration: f32,
    pub easing: EasingFunction,
}

/// Runs the commit animation.
///
/// Completion must be reported exactly once per handle through
/// [`ReorderList::animation_finished`](crate::list::ReorderList::animation_finished).
pub trait Animator {
    fn animate(&mut self, snap: SnapAnimation) -> AnimationHandle;
}
