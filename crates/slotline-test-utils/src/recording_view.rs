//! A stack view that records every write the engine makes.

use parking_lot::Mutex;
use slotline::{
    Axis, Geometry, ItemId, LayoutRect, ListView, MarkTarget, Markers, SlotId, StackView, Vec2,
};

use crate::ITEM_SIZE;

/// Records a [`ListView`] call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    InsertPlaceholder {
        index: usize,
        size: Vec2,
    },
    DetachItem {
        item: ItemId,
        bounds: LayoutRect,
    },
    RemovePlaceholder,
    InsertItem {
        item: ItemId,
        index: usize,
    },
    SetMarkers {
        target: MarkTarget,
        markers: Markers,
        enabled: bool,
    },
    ApplyOffset {
        slot: SlotId,
        offset: f32,
    },
    SetAbsolutePosition {
        item: ItemId,
        position: Vec2,
    },
    ClearTransient {
        target: MarkTarget,
    },
}

/// [`StackView`] wrapper that records calls.
///
/// Hit tests go through `&self`, so the counters use a `Mutex` for interior
/// mutability.
pub struct RecordingView {
    inner: StackView,
    calls: Mutex<Vec<ViewCall>>,
    hit_tests: Mutex<usize>,
    /// When false, `measure` reports no layout box for any slot.
    measurable: bool,
}

impl RecordingView {
    pub fn new(inner: StackView) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
            hit_tests: Mutex::new(0),
            measurable: true,
        }
    }

    /// Vertical stack at the origin with [`ITEM_SIZE`] items.
    pub fn stack(keys: &[&str]) -> Self {
        Self::new(StackView::new(
            Vec2::ZERO,
            ITEM_SIZE,
            Axis::Vertical,
            crate::ids(keys),
        ))
    }

    /// Horizontal stack at the origin; items are `ITEM_SIZE` transposed.
    pub fn row(keys: &[&str]) -> Self {
        Self::new(StackView::new(
            Vec2::ZERO,
            Vec2::new(ITEM_SIZE.y, ITEM_SIZE.x),
            Axis::Horizontal,
            crate::ids(keys),
        ))
    }

    pub fn view(&self) -> &StackView {
        &self.inner
    }

    /// Make `measure` succeed or fail, as for a host whose layout is not
    /// available yet.
    pub fn set_measurable(&mut self, measurable: bool) {
        self.measurable = measurable;
    }

    /// All recorded calls.
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn hit_test_count(&self) -> usize {
        *self.hit_tests.lock()
    }

    /// Number of offsets written.
    pub fn count_offsets(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, ViewCall::ApplyOffset { .. }))
            .count()
    }

    /// Number of structural changes (placeholder and item moves).
    pub fn count_structural(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    ViewCall::InsertPlaceholder { .. }
                        | ViewCall::DetachItem { .. }
                        | ViewCall::RemovePlaceholder
                        | ViewCall::InsertItem { .. }
                )
            })
            .count()
    }

    fn record(&self, call: ViewCall) {
        self.calls.lock().push(call);
    }
}

impl Geometry for RecordingView {
    fn item_at(&self, point: Vec2) -> Option<ItemId> {
        *self.hit_tests.lock() += 1;
        self.inner.item_at(point)
    }

    fn measure(&self, slot: SlotId) -> Option<LayoutRect> {
        if !self.measurable {
            return None;
        }
        self.inner.measure(slot)
    }
}

impl ListView for RecordingView {
    fn insert_placeholder(&mut self, index: usize, size: Vec2) {
        self.record(ViewCall::InsertPlaceholder { index, size });
        self.inner.insert_placeholder(index, size);
    }

    fn detach_item(&mut self, item: ItemId, bounds: LayoutRect) {
        self.record(ViewCall::DetachItem { item, bounds });
        self.inner.detach_item(item, bounds);
    }

    fn remove_placeholder(&mut self) {
        self.record(ViewCall::RemovePlaceholder);
        self.inner.remove_placeholder();
    }

    fn insert_item(&mut self, item: ItemId, index: usize) {
        self.record(ViewCall::InsertItem { item, index });
        self.inner.insert_item(item, index);
    }

    fn set_markers(&mut self, target: MarkTarget, markers: Markers, enabled: bool) {
        self.record(ViewCall::SetMarkers {
            target,
            markers,
            enabled,
        });
        self.inner.set_markers(target, markers, enabled);
    }

    fn apply_offset(&mut self, slot: SlotId, axis: Axis, offset: f32) {
        self.record(ViewCall::ApplyOffset { slot, offset });
        self.inner.apply_offset(slot, axis, offset);
    }

    fn set_absolute_position(&mut self, item: ItemId, position: Vec2) {
        self.record(ViewCall::SetAbsolutePosition { item, position });
        self.inner.set_absolute_position(item, position);
    }

    fn clear_transient(&mut self, target: MarkTarget) {
        self.record(ViewCall::ClearTransient { target });
        self.inner.clear_transient(target);
    }
}
