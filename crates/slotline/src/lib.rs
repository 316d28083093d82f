//! Slotline - pointer-driven reordering of sibling items
//!
//! The user presses an item, drags it along the list's axis, and the other
//! items slide one slot at a time to open a gap under the pointer. On release
//! the item snaps into the gap and the structural order is updated once.
//!
//! - [`ReorderList`] is the controller: pointer events in, side effects out.
//! - [`Geometry`], [`ListView`] and [`Animator`] are what a host implements.
//! - [`StackView`] and [`TweenAnimator`] are headless implementations for
//!   uniform stacked lists.
//!
//! ## Quick Start
//!
//! ```rust
//! use slotline::{Axis, ItemId, Release, ReorderList, StackView, TweenAnimator, Vec2};
//!
//! let items: Vec<ItemId> = ["a", "b", "c", "d"].into_iter().map(ItemId::new).collect();
//! let mut list = ReorderList::new(items.clone()).unwrap();
//! let mut view = StackView::new(Vec2::ZERO, Vec2::new(200.0, 40.0), Axis::Vertical, items);
//! let mut animator = TweenAnimator::new();
//!
//! list.pointer_down(Vec2::new(100.0, 20.0), &mut view);
//! list.pointer_move(Vec2::new(100.0, 60.0), &mut view);
//! list.pointer_move(Vec2::new(100.0, 100.0), &mut view);
//!
//! if let Some(Release::Animating(_)) = list.pointer_up(&mut view, &mut animator) {
//!     // In the frame loop:
//!     for handle in animator.update(0.25) {
//!         list.animation_finished(handle, &mut view);
//!     }
//! }
//!
//! let order: Vec<ItemId> = ["b", "c", "a", "d"].into_iter().map(ItemId::new).collect();
//! assert_eq!(list.order(), order);
//! ```

pub mod animation;
pub mod commit;
pub mod config;
pub mod container;
pub mod error;
pub mod gesture;
pub mod id;
pub mod index;
pub mod list;
pub mod markers;
pub mod offset;
pub mod reorder;
pub mod stack;
pub mod view;

pub use animation::{EasingFunction, Tween, TweenAnimator};
pub use commit::{Reordered, resolve_slot};
pub use config::{DEFAULT_COMMIT_DURATION, ReorderConfig};
pub use container::Container;
pub use error::{ReorderError, ReorderResult};
pub use gesture::{Commit, Gesture, GesturePhase};
pub use id::{ItemId, SlotId};
pub use index::IndexResolver;
pub use list::{Release, ReorderList};
pub use markers::{MarkTarget, Markers};
pub use offset::OffsetTracker;
pub use reorder::{Direction, Shift, shift_toward};
pub use stack::StackView;
pub use view::{AnimationHandle, Animator, Geometry, ListView, SnapAnimation};

// Re-export core types hosts need at the boundary
pub use slotline_core::geometry::{Axis, LayoutRect};
pub use slotline_core::math::Vec2;
