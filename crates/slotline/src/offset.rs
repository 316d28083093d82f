//! Per-slot displacement along the drag axis.
//!
//! The tracker is the source of truth for offsets. Hosts only ever receive
//! the values through [`ListView::apply_offset`](crate::view::ListView::apply_offset);
//! nothing is parsed back out of rendered state.

use slotline_core::alloc::HashMap;

use crate::id::SlotId;

/// Offsets closer than this to a whole step are treated as that step.
pub const OFFSET_EPSILON: f32 = 1e-3;

/// Displacement table for one gesture.
#[derive(Debug, Clone, Default)]
pub struct OffsetTracker {
    /// Uniform slot extent captured at drag start.
    item_size: f32,
    /// Nonzero offsets in pixels. Untouched slots are absent.
    offsets: HashMap<SlotId, f32>,
}

impl OffsetTracker {
    pub fn new(item_size: f32) -> Self {
        Self {
            item_size,
            offsets: HashMap::default(),
        }
    }

    pub fn item_size(&self) -> f32 {
        self.item_size
    }

    /// False for degenerate (zero, negative or NaN) item sizes.
    pub fn can_shift(&self) -> bool {
        self.item_size.is_finite() && self.item_size > OFFSET_EPSILON
    }

    /// Current displacement in pixels, 0 when untouched.
    pub fn current_offset(&self, slot: SlotId) -> f32 {
        self.offsets.get(&slot).copied().unwrap_or(0.0)
    }

    /// Set a displacement. Returns true if the stored value changed.
    pub fn set_offset(&mut self, slot: SlotId, value: f32) -> bool {
        let previous = self.current_offset(slot);
        if value.abs() <= OFFSET_EPSILON {
            self.offsets.remove(&slot);
        } else {
            self.offsets.insert(slot, value);
        }
        (previous - value).abs() > OFFSET_EPSILON
    }

    /// Whole-slot step of an item: -1, 0 or +1.
    ///
    /// Anything other than exactly one item size either way counts as 0.
    pub fn item_step(&self, slot: SlotId) -> i32 {
        if !self.can_shift() {
            return 0;
        }
        let offset = self.current_offset(slot);
        if (offset + self.item_size).abs() <= OFFSET_EPSILON {
            -1
        } else if (offset - self.item_size).abs() <= OFFSET_EPSILON {
            1
        } else {
            0
        }
    }

    /// Number of ordinary items currently displaced.
    pub fn shifted_item_count(&self) -> usize {
        self.offsets.keys().filter(|slot| !slot.is_placeholder()).count()
    }

    /// All displaced slots with their offsets.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, f32)> + '_ {
        self.offsets.iter().map(|(&slot, &offset)| (slot, offset))
    }

    /// Drop every offset.
    pub fn clear(&mut self) {
        self.offsets.clear();
    }
}
