//! Release handling: resolve the drop slot and reconcile structure.

use crate::container::Container;
use crate::id::{ItemId, SlotId};
use crate::markers::MarkTarget;
use crate::offset::{OFFSET_EPSILON, OffsetTracker};
use crate::view::ListView;

/// Final structural move made by a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reordered {
    pub item: ItemId,
    /// Base position before the gesture.
    pub from: usize,
    /// Base position after the commit.
    pub to: usize,
}

impl Reordered {
    /// True if the commit changed the order.
    pub fn is_move(&self) -> bool {
        self.from != self.to
    }
}

/// Snap a placeholder index to a slot.
///
/// Rounds to the nearest integer. An exact half goes the way the placeholder
/// last travelled (`travel` is its offset: positive toward the end), and
/// toward the start when it has not moved. The result is clamped to
/// `0..slot_count`.
pub fn resolve_slot(effective: f32, travel: f32, slot_count: usize) -> usize {
    if slot_count == 0 || !effective.is_finite() {
        return 0;
    }
    let floor = effective.floor();
    let resolved = if (effective - floor - 0.5).abs() <= OFFSET_EPSILON {
        if travel > 0.0 { floor + 1.0 } else { floor }
    } else {
        effective.round()
    };
    resolved.clamp(0.0, (slot_count - 1) as f32) as usize
}

/// Remove the placeholder, put `item` in at `index`, and clear all transient
/// state on the container and every slot.
pub(crate) fn reconcile<V: ListView>(
    container: &mut Container,
    offsets: &mut OffsetTracker,
    view: &mut V,
    item: ItemId,
    origin: usize,
    index: usize,
) -> Reordered {
    view.clear_transient(MarkTarget::Slot(SlotId::Placeholder));
    if container.remove_placeholder().is_some() {
        view.remove_placeholder();
    }

    view.clear_transient(MarkTarget::Slot(SlotId::Item(item)));
    let to = container.insert_item(index, item);
    view.insert_item(item, to);

    for slot in container.slots() {
        view.clear_transient(MarkTarget::Slot(*slot));
    }
    view.clear_transient(MarkTarget::Container);
    offsets.clear();

    tracing::debug!(%item, from = origin, to, "reorder committed");

    Reordered {
        item,
        from: origin,
        to,
    }
}
