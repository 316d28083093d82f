//! The reorderable list controller.
//!
//! [`ReorderList`] owns the base order, the offset tracker and the gesture
//! phase. Hosts feed it pointer events and forward animation completions; it
//! drives the placeholder reflow and the final structural commit through the
//! host's [`Geometry`], [`ListView`] and [`Animator`].

use slotline_core::geometry::LayoutRect;
use slotline_core::math::Vec2;
use slotline_core::profiling::profile_function;

use crate::commit::{Reordered, reconcile, resolve_slot};
use crate::config::ReorderConfig;
use crate::container::Container;
use crate::error::ReorderResult;
use crate::gesture::{Commit, Gesture, GesturePhase};
use crate::id::{ItemId, SlotId};
use crate::index::IndexResolver;
use crate::markers::{MarkTarget, Markers};
use crate::offset::OffsetTracker;
use crate::reorder::{Shift, shift_toward};
use crate::view::{AnimationHandle, Animator, Geometry, ListView, SnapAnimation};

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The snap animation is running; report its completion through
    /// [`ReorderList::animation_finished`].
    Animating(AnimationHandle),
    /// The target slot could not be measured, so the commit was applied
    /// without animating.
    Committed(Reordered),
}

/// A pointer-reorderable list of items.
#[derive(Debug, Clone)]
pub struct ReorderList {
    config: ReorderConfig,
    container: Container,
    offsets: OffsetTracker,
    phase: GesturePhase,
}

impl ReorderList {
    /// Create a list with the default configuration.
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> ReorderResult<Self> {
        Self::with_config(items, ReorderConfig::default())
    }

    pub fn with_config(
        items: impl IntoIterator<Item = ItemId>,
        config: ReorderConfig,
    ) -> ReorderResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            container: Container::new(items)?,
            offsets: OffsetTracker::new(0.0),
            phase: GesturePhase::Idle,
        })
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Items in base order. While a gesture is active the dragged item is
    /// missing from this list.
    pub fn order(&self) -> Vec<ItemId> {
        self.container.order()
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    pub fn offsets(&self) -> &OffsetTracker {
        &self.offsets
    }

    /// Placeholder effective index, while a gesture is active.
    pub fn placeholder_index(&self) -> Option<f32> {
        if self.phase.is_idle() {
            return None;
        }
        IndexResolver::new(&self.container, &self.offsets).placeholder_effective_index()
    }

    /// Start a drag on the item under `point`.
    ///
    /// Returns true if a gesture was armed. Ignored (false) when a gesture is
    /// already active, when the list is empty, or when nothing reorderable is
    /// under the pointer.
    pub fn pointer_down<H>(&mut self, point: Vec2, host: &mut H) -> bool
    where
        H: Geometry + ListView,
    {
        match &self.phase {
            GesturePhase::Idle => {}
            GesturePhase::Dragging(gesture) => {
                tracing::debug!(item = %gesture.item, "pointer down during drag; ignored");
                return false;
            }
            GesturePhase::Committing(commit) => {
                tracing::warn!(item = %commit.gesture.item, "pointer down while commit is animating; ignored");
                return false;
            }
        }

        if self.container.is_empty() {
            return false;
        }
        let Some(item) = host.item_at(point).filter(|item| self.container.contains(*item)) else {
            return false;
        };
        let Some(bounds) = host.measure(SlotId::Item(item)) else {
            tracing::debug!(%item, "pressed item has no layout box; ignored");
            return false;
        };
        let Some(origin) = self.container.swap_in_placeholder(item) else {
            return false;
        };

        self.offsets = OffsetTracker::new(self.config.axis.extent(&bounds));

        host.insert_placeholder(origin, bounds.size());
        host.detach_item(item, bounds);

        host.set_markers(MarkTarget::Container, Markers::CONTAINER, true);
        for slot in self.container.slots() {
            host.set_markers(MarkTarget::Slot(*slot), Markers::LIST_DRAG, true);
        }
        host.set_markers(MarkTarget::Slot(SlotId::Placeholder), Markers::PLACEHOLDER, true);
        host.set_markers(MarkTarget::Slot(SlotId::Item(item)), Markers::DRAGGED_ITEM, true);

        tracing::debug!(%item, origin, item_size = self.offsets.item_size(), "drag started");
        self.phase = GesturePhase::Dragging(Gesture::new(item, origin, bounds, point));
        true
    }

    /// Follow the pointer and reflow siblings when it enters a new item.
    ///
    /// Returns the reflow step taken, if any.
    pub fn pointer_move<H>(&mut self, point: Vec2, host: &mut H) -> Option<Shift>
    where
        H: Geometry + ListView,
    {
        profile_function!();

        let GesturePhase::Dragging(gesture) = &mut self.phase else {
            return None;
        };

        let position = gesture.follow(point);
        host.set_absolute_position(gesture.item, position);

        let dragged = gesture.item;
        let under = host
            .item_at(point)
            .filter(|item| *item != dragged && self.container.contains(*item));
        let target = gesture.observe_target(under)?;

        let shift = shift_toward(&self.container, &mut self.offsets, target)?;

        let axis = self.config.axis;
        for (item, offset) in &shift.moved {
            host.apply_offset(SlotId::Item(*item), axis, *offset);
        }
        host.apply_offset(SlotId::Placeholder, axis, shift.placeholder_offset);

        Some(shift)
    }

    /// Release the pointer and snap the dragged item into its slot.
    ///
    /// Does nothing (returns `None`) unless a drag is active.
    pub fn pointer_up<H, A>(&mut self, host: &mut H, animator: &mut A) -> Option<Release>
    where
        H: Geometry + ListView,
        A: Animator,
    {
        let gesture = match std::mem::replace(&mut self.phase, GesturePhase::Idle) {
            GesturePhase::Dragging(gesture) => gesture,
            other => {
                self.phase = other;
                return None;
            }
        };

        let effective = IndexResolver::new(&self.container, &self.offsets)
            .placeholder_effective_index()
            .unwrap_or(gesture.origin as f32);
        let travel = self.offsets.current_offset(SlotId::Placeholder);
        let index = resolve_slot(effective, travel, self.container.len());

        let destination = self
            .container
            .get(index)
            .and_then(|slot| host.measure(slot))
            .map(|rect: LayoutRect| rect.position());

        let Some(to) = destination else {
            tracing::debug!(item = %gesture.item, index, "target slot has no layout box; committing without animation");
            let reordered = reconcile(
                &mut self.container,
                &mut self.offsets,
                host,
                gesture.item,
                gesture.origin,
                index,
            );
            return Some(Release::Committed(reordered));
        };

        let handle = animator.animate(SnapAnimation {
            item: gesture.item,
            from: gesture.position,
            to,
            duration: self.config.commit_duration,
            easing: self.config.commit_easing,
        });

        tracing::debug!(item = %gesture.item, effective, index, ?handle, "drag released");
        self.phase = GesturePhase::Committing(Commit {
            gesture,
            index,
            handle,
        });
        Some(Release::Animating(handle))
    }

    /// Complete the commit started by [`pointer_up`](Self::pointer_up).
    ///
    /// Handles that do not belong to the running commit are ignored.
    pub fn animation_finished<V: ListView>(
        &mut self,
        handle: AnimationHandle,
        view: &mut V,
    ) -> Option<Reordered> {
        let commit = match std::mem::replace(&mut self.phase, GesturePhase::Idle) {
            GesturePhase::Committing(commit) if commit.handle == handle => commit,
            other => {
                tracing::debug!(?handle, "stale animation handle; ignored");
                self.phase = other;
                return None;
            }
        };

        Some(reconcile(
            &mut self.container,
            &mut self.offsets,
            view,
            commit.gesture.item,
            commit.gesture.origin,
            commit.index,
        ))
    }

    /// Abort the active gesture and put the item back where it started.
    ///
    /// Works while dragging or committing. Returns false when idle. A running
    /// snap animation is not stopped; its completion is ignored afterwards.
    pub fn cancel<V: ListView>(&mut self, view: &mut V) -> bool {
        let gesture = match std::mem::replace(&mut self.phase, GesturePhase::Idle) {
            GesturePhase::Idle => return false,
            GesturePhase::Dragging(gesture) => gesture,
            GesturePhase::Committing(commit) => commit.gesture,
        };

        tracing::debug!(item = %gesture.item, origin = gesture.origin, "gesture cancelled");
        reconcile(
            &mut self.container,
            &mut self.offsets,
            view,
            gesture.item,
            gesture.origin,
            gesture.origin,
        );
        true
    }
}
