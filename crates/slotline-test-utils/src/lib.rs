//! Test utilities for slotline hosts.
//!
//! - [`RecordingView`] - a [`StackView`](slotline::StackView) that records
//!   every side effect the engine writes
//! - [`ManualAnimator`] - an [`Animator`](slotline::Animator) whose snaps
//!   complete only when the test says so
//! - helpers for building item lists and pointer positions
//!
//! # Example
//!
//! ```rust
//! use slotline::ReorderList;
//! use slotline_test_utils::{ManualAnimator, RecordingView, ids, point_in_slot};
//!
//! let mut list = ReorderList::new(ids(&["a", "b", "c"])).unwrap();
//! let mut view = RecordingView::stack(&["a", "b", "c"]);
//! let mut animator = ManualAnimator::new();
//!
//! list.pointer_down(point_in_slot(0), &mut view);
//! list.pointer_move(point_in_slot(1), &mut view);
//! list.pointer_up(&mut view, &mut animator);
//!
//! for handle in animator.finish_all() {
//!     list.animation_finished(handle, &mut view);
//! }
//! assert_eq!(list.order(), ids(&["b", "a", "c"]));
//! ```

pub mod manual_animator;
pub mod recording_view;

pub use manual_animator::ManualAnimator;
pub use recording_view::{RecordingView, ViewCall};

use slotline::{ItemId, Vec2};

/// Item size used by [`RecordingView::stack`].
pub const ITEM_SIZE: Vec2 = Vec2::new(200.0, 40.0);

/// Item ids for a list of keys.
pub fn ids(keys: &[&str]) -> Vec<ItemId> {
    keys.iter().map(|key| ItemId::new(key)).collect()
}

/// Center of slot `index` in a vertical [`RecordingView::stack`].
pub fn point_in_slot(index: usize) -> Vec2 {
    Vec2::new(ITEM_SIZE.x / 2.0, (index as f32 + 0.5) * ITEM_SIZE.y)
}
