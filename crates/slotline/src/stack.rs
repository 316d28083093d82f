//! Headless retained list of uniformly sized, stacked items.
//!
//! [`StackView`] mirrors everything the engine writes (structure, offsets,
//! markers, the floating item) and answers geometry queries from that mirror.
//! Hosts that draw their own stacked lists can render straight from it; tests
//! use it as a stand-in for a real widget tree.

use slotline_core::alloc::HashMap;
use slotline_core::geometry::{Axis, LayoutRect};
use slotline_core::math::Vec2;

use crate::id::{ItemId, SlotId};
use crate::markers::{MarkTarget, Markers};
use crate::view::{Geometry, ListView};

#[derive(Debug, Clone)]
pub struct StackView {
    /// Top-left of the first slot.
    origin: Vec2,
    /// Size shared by every item.
    item_size: Vec2,
    axis: Axis,
    slots: Vec<SlotId>,
    placeholder_size: Option<Vec2>,
    /// Offsets along `axis`, nonzero only.
    offsets: HashMap<SlotId, f32>,
    markers: HashMap<MarkTarget, Markers>,
    /// Absolutely positioned (detached) items.
    floating: HashMap<ItemId, LayoutRect>,
}

impl StackView {
    pub fn new(
        origin: Vec2,
        item_size: Vec2,
        axis: Axis,
        items: impl IntoIterator<Item = ItemId>,
    ) -> Self {
        Self {
            origin,
            item_size,
            axis,
            slots: items.into_iter().map(SlotId::Item).collect(),
            placeholder_size: None,
            offsets: HashMap::default(),
            markers: HashMap::default(),
            floating: HashMap::default(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn item_size(&self) -> Vec2 {
        self.item_size
    }

    pub fn slots(&self) -> &[SlotId] {
        &self.slots
    }

    /// Items in structural order, skipping the placeholder.
    pub fn order(&self) -> Vec<ItemId> {
        self.slots.iter().filter_map(|slot| slot.item()).collect()
    }

    pub fn markers(&self, target: MarkTarget) -> Markers {
        self.markers.get(&target).copied().unwrap_or_default()
    }

    pub fn offset(&self, slot: SlotId) -> f32 {
        self.offsets.get(&slot).copied().unwrap_or(0.0)
    }

    /// Absolute box of a detached item.
    pub fn floating(&self, item: ItemId) -> Option<LayoutRect> {
        self.floating.get(&item).copied()
    }

    /// Box of the slot at `index` in normal flow.
    pub fn structural_rect(&self, index: usize) -> LayoutRect {
        let step = self.axis.along(self.item_size);
        let position = self.origin + self.axis.unit() * (step * index as f32);
        let size = match self.slots.get(index) {
            Some(SlotId::Placeholder) => self.placeholder_size.unwrap_or(self.item_size),
            _ => self.item_size,
        };
        LayoutRect::from_position_size(position, size)
    }

    /// Where a slot is drawn right now: structural box plus its offset.
    pub fn visual_rect(&self, slot: SlotId) -> Option<LayoutRect> {
        let index = self.slots.iter().position(|s| *s == slot)?;
        let delta = self.axis.unit() * self.offset(slot);
        Some(self.structural_rect(index).translated(delta))
    }

    /// True if any marker, offset, floating item or placeholder is left over.
    pub fn has_transient_state(&self) -> bool {
        !self.markers.is_empty()
            || !self.offsets.is_empty()
            || !self.floating.is_empty()
            || self.slots.iter().any(SlotId::is_placeholder)
    }
}

impl Geometry for StackView {
    fn item_at(&self, point: Vec2) -> Option<ItemId> {
        // Later slots paint on top.
        self.slots.iter().rev().find_map(|slot| {
            let item = slot.item()?;
            if self.markers(MarkTarget::Slot(*slot)).excludes_hit_test() {
                return None;
            }
            self.visual_rect(*slot)
                .filter(|rect| rect.contains(point))
                .map(|_| item)
        })
    }

    fn measure(&self, slot: SlotId) -> Option<LayoutRect> {
        if let Some(rect) = slot.item().and_then(|item| self.floating(item)) {
            return Some(rect);
        }
        let index = self.slots.iter().position(|s| *s == slot)?;
        Some(self.structural_rect(index))
    }
}

impl ListView for StackView {
    fn insert_placeholder(&mut self, index: usize, size: Vec2) {
        let index = index.min(self.slots.len());
        self.slots.insert(index, SlotId::Placeholder);
        self.placeholder_size = Some(size);
    }

    fn detach_item(&mut self, item: ItemId, bounds: LayoutRect) {
        self.slots.retain(|slot| *slot != SlotId::Item(item));
        self.floating.insert(item, bounds);
    }

    fn remove_placeholder(&mut self) {
        self.slots.retain(|slot| !slot.is_placeholder());
        self.offsets.remove(&SlotId::Placeholder);
        self.placeholder_size = None;
    }

    fn insert_item(&mut self, item: ItemId, index: usize) {
        self.floating.remove(&item);
        let index = index.min(self.slots.len());
        self.slots.insert(index, SlotId::Item(item));
    }

    fn set_markers(&mut self, target: MarkTarget, markers: Markers, enabled: bool) {
        let current = self.markers(target);
        let next = if enabled {
            current | markers
        } else {
            current - markers
        };
        if next.is_empty() {
            self.markers.remove(&target);
        } else {
            self.markers.insert(target, next);
        }
    }

    fn apply_offset(&mut self, slot: SlotId, axis: Axis, offset: f32) {
        debug_assert_eq!(axis, self.axis, "offset written along a foreign axis");
        if offset == 0.0 {
            self.offsets.remove(&slot);
        } else {
            self.offsets.insert(slot, offset);
        }
    }

    fn set_absolute_position(&mut self, item: ItemId, position: Vec2) {
        if let Some(rect) = self.floating.get_mut(&item) {
            rect.x = position.x;
            rect.y = position.y;
        }
    }

    fn clear_transient(&mut self, target: MarkTarget) {
        self.markers.remove(&target);
        if let MarkTarget::Slot(slot) = target {
            self.offsets.remove(&slot);
            if let Some(item) = slot.item() {
                self.floating.remove(&item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(keys: &[&str]) -> Vec<ItemId> {
        keys.iter().map(|k| ItemId::new(k)).collect()
    }

    fn view() -> StackView {
        StackView::new(
            Vec2::ZERO,
            Vec2::new(200.0, 40.0),
            Axis::Vertical,
            ids(&["a", "b", "c"]),
        )
    }

    #[test]
    fn test_hit_test_by_slot() {
        let view = view();
        assert_eq!(view.item_at(Vec2::new(100.0, 20.0)), Some(ItemId::new("a")));
        assert_eq!(view.item_at(Vec2::new(100.0, 100.0)), Some(ItemId::new("c")));
        assert_eq!(view.item_at(Vec2::new(100.0, 130.0)), None);
        assert_eq!(view.item_at(Vec2::new(250.0, 20.0)), None);
    }

    #[test]
    fn test_hit_test_follows_offset() {
        let mut view = view();
        view.apply_offset(SlotId::Item(ItemId::new("b")), Axis::Vertical, -40.0);

        assert_eq!(view.item_at(Vec2::new(100.0, 20.0)), Some(ItemId::new("b")));
        // measure ignores the offset
        assert_eq!(
            view.measure(SlotId::Item(ItemId::new("b"))),
            Some(LayoutRect::new(0.0, 40.0, 200.0, 40.0))
        );
    }

    #[test]
    fn test_placeholder_and_dragging_not_hit() {
        let mut view = view();
        let a = ItemId::new("a");
        view.insert_placeholder(0, Vec2::new(200.0, 40.0));
        view.detach_item(a, LayoutRect::new(0.0, 0.0, 200.0, 40.0));
        view.set_markers(MarkTarget::Slot(SlotId::Item(a)), Markers::DRAGGING, true);

        assert_eq!(view.item_at(Vec2::new(100.0, 20.0)), None);
        assert_eq!(view.measure(SlotId::Item(a)), Some(LayoutRect::new(0.0, 0.0, 200.0, 40.0)));

        view.set_absolute_position(a, Vec2::new(5.0, 70.0));
        assert_eq!(view.floating(a).map(|r| r.position()), Some(Vec2::new(5.0, 70.0)));
    }

    #[test]
    fn test_markers_toggle() {
        let mut view = view();
        view.set_markers(MarkTarget::Container, Markers::CONTAINER, true);
        view.set_markers(MarkTarget::Container, Markers::NO_SELECT, false);
        assert_eq!(view.markers(MarkTarget::Container), Markers::HOST_DRAG);

        view.clear_transient(MarkTarget::Container);
        assert!(!view.has_transient_state());
    }

    #[test]
    fn test_horizontal_layout() {
        let view = StackView::new(
            Vec2::new(10.0, 0.0),
            Vec2::new(80.0, 30.0),
            Axis::Horizontal,
            ids(&["a", "b"]),
        );
        assert_eq!(view.structural_rect(1), LayoutRect::new(90.0, 0.0, 80.0, 30.0));
        assert_eq!(view.item_at(Vec2::new(120.0, 15.0)), Some(ItemId::new("b")));
    }
}
