//! The reflow step: move the placeholder to a target item and shift every
//! item in between by one slot.

use crate::container::Container;
use crate::id::{ItemId, SlotId};
use crate::index::IndexResolver;
use crate::offset::{OFFSET_EPSILON, OffsetTracker};

/// Which way the placeholder travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the start of the sequence.
    Up,
    /// Toward the end of the sequence.
    Down,
}

impl Direction {
    /// Sign of the placeholder's travel along the axis.
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }

    /// Travel needed for the placeholder to reach `target`.
    fn between(placeholder: f32, target: f32) -> Self {
        if placeholder > target {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Outcome of one reflow step.
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub target: ItemId,
    pub direction: Direction,
    /// Effective index of the target before the step.
    pub target_index: isize,
    /// Placeholder effective index before the step.
    pub placeholder_from: f32,
    /// Placeholder offset in pixels after the step.
    pub placeholder_offset: f32,
    /// Every item touched, with its new offset in pixels.
    pub moved: Vec<(ItemId, f32)>,
}

/// Move the placeholder onto `target`'s visual slot.
///
/// Items whose effective index lies between the placeholder and the target
/// (inclusive) each take one step: an item already displaced snaps back to 0,
/// an untouched one moves one slot against the placeholder's travel. The
/// placeholder advances one slot per item touched, so the number of displaced
/// items always equals the placeholder's distance from its origin.
///
/// Returns `None` without touching anything when the item size is degenerate
/// or the target is not a child of the container.
pub fn shift_toward(
    container: &Container,
    offsets: &mut OffsetTracker,
    target: ItemId,
) -> Option<Shift> {
    if !offsets.can_shift() {
        tracing::debug!(item_size = offsets.item_size(), "degenerate item size; not shifting");
        return None;
    }

    let (direction, target_index, placeholder_from, selected) = {
        let resolver = IndexResolver::new(container, offsets);
        let target_index = resolver.effective_index(target)?;
        let placeholder_index = resolver.placeholder_effective_index()?;

        let direction = Direction::between(placeholder_index, target_index as f32);
        let (low, high) = match direction {
            Direction::Up => (target_index as f32, placeholder_index),
            Direction::Down => (placeholder_index, target_index as f32),
        };

        let selected: Vec<ItemId> = container
            .items()
            .filter(|item| {
                resolver
                    .effective_index(*item)
                    .is_some_and(|index| (low..=high).contains(&(index as f32)))
            })
            .collect();

        (direction, target_index, placeholder_index, selected)
    };

    let size = offsets.item_size();
    let item_offset = -direction.sign() * size;

    let mut moved = Vec::with_capacity(selected.len());
    for item in selected {
        let slot = SlotId::Item(item);
        let next = if offsets.current_offset(slot).abs() > OFFSET_EPSILON {
            0.0
        } else {
            item_offset
        };
        offsets.set_offset(slot, next);
        moved.push((item, next));
    }

    let placeholder_offset =
        offsets.current_offset(SlotId::Placeholder) + direction.sign() * size * moved.len() as f32;
    offsets.set_offset(SlotId::Placeholder, placeholder_offset);

    tracing::trace!(
        ?direction,
        target_index,
        placeholder_from,
        placeholder_offset,
        moved = moved.len(),
        "reflow step"
    );

    Some(Shift {
        target,
        direction,
        target_index,
        placeholder_from,
        placeholder_offset,
        moved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 40.0;

    fn id(key: &str) -> ItemId {
        ItemId::new(key)
    }

    /// `[a, b, c, d]` with `dragged` swapped out for the placeholder.
    fn setup(dragged: &str) -> (Container, OffsetTracker) {
        let items = ["a", "b", "c", "d"].iter().map(|k| id(k));
        let mut container = Container::new(items).unwrap();
        container.swap_in_placeholder(id(dragged)).unwrap();
        (container, OffsetTracker::new(SIZE))
    }

    fn placeholder_index(container: &Container, offsets: &OffsetTracker) -> f32 {
        IndexResolver::new(container, offsets)
            .placeholder_effective_index()
            .unwrap()
    }

    #[test]
    fn test_step_down_one_slot() {
        let (container, mut offsets) = setup("a");

        let shift = shift_toward(&container, &mut offsets, id("b")).unwrap();

        assert_eq!(shift.direction, Direction::Down);
        assert_eq!(shift.moved, vec![(id("b"), -SIZE)]);
        assert_eq!(offsets.current_offset(SlotId::Placeholder), SIZE);
        assert_eq!(placeholder_index(&container, &offsets), 1.0);
    }

    #[test]
    fn test_step_up_one_slot() {
        let (container, mut offsets) = setup("d");

        let shift = shift_toward(&container, &mut offsets, id("c")).unwrap();

        assert_eq!(shift.direction, Direction::Up);
        assert_eq!(shift.moved, vec![(id("c"), SIZE)]);
        assert_eq!(placeholder_index(&container, &offsets), 2.0);
    }

    #[test]
    fn test_snap_back_when_reversing() {
        let (container, mut offsets) = setup("a");
        shift_toward(&container, &mut offsets, id("b")).unwrap();
        shift_toward(&container, &mut offsets, id("c")).unwrap();
        assert_eq!(offsets.shifted_item_count(), 2);

        // b now sits visually in slot 0; targeting it pulls the placeholder
        // all the way back and both b and c return home.
        let shift = shift_toward(&container, &mut offsets, id("b")).unwrap();

        assert_eq!(shift.direction, Direction::Up);
        assert_eq!(shift.moved.len(), 2);
        assert!(shift.moved.iter().all(|(_, offset)| *offset == 0.0));
        assert_eq!(offsets.shifted_item_count(), 0);
        assert_eq!(placeholder_index(&container, &offsets), 0.0);
    }

    #[test]
    fn test_skipped_slots_are_filled() {
        let (container, mut offsets) = setup("a");

        // Jump straight from the origin onto d.
        let shift = shift_toward(&container, &mut offsets, id("d")).unwrap();

        assert_eq!(shift.moved.len(), 3);
        assert_eq!(offsets.shifted_item_count(), 3);
        assert_eq!(placeholder_index(&container, &offsets), 3.0);
    }

    #[test]
    fn test_crossing_origin() {
        let (container, mut offsets) = setup("b");

        shift_toward(&container, &mut offsets, id("d")).unwrap();
        assert_eq!(placeholder_index(&container, &offsets), 3.0);

        // a is still at slot 0; going there clears c, d and pushes a down.
        shift_toward(&container, &mut offsets, id("a")).unwrap();

        assert_eq!(placeholder_index(&container, &offsets), 0.0);
        assert_eq!(offsets.current_offset(SlotId::Item(id("a"))), SIZE);
        assert_eq!(offsets.current_offset(SlotId::Item(id("c"))), 0.0);
        assert_eq!(offsets.current_offset(SlotId::Item(id("d"))), 0.0);
        assert_eq!(offsets.shifted_item_count(), 1);
    }

    #[test]
    fn test_zero_size_is_noop() {
        let (container, _) = setup("a");
        let mut offsets = OffsetTracker::new(0.0);

        assert!(shift_toward(&container, &mut offsets, id("c")).is_none());
        assert_eq!(offsets.iter().count(), 0);
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let (container, mut offsets) = setup("a");
        assert!(shift_toward(&container, &mut offsets, id("a")).is_none());
        assert!(shift_toward(&container, &mut offsets, id("zzz")).is_none());
        assert_eq!(offsets.iter().count(), 0);
    }
}
