//! Headless tween animator for the commit snap.
//!
//! Hosts without their own animation system can drive a [`TweenAnimator`] from
//! their frame loop and forward finished handles back to the list.
//!
//! # Example
//!
//! ```ignore
//! let mut animator = TweenAnimator::new();
//! list.pointer_up(&mut view, &mut animator);
//!
//! // Each frame:
//! for handle in animator.update(delta_time) {
//!     list.animation_finished(handle, &mut view);
//! }
//! for (item, position) in animator.positions() {
//!     view.set_absolute_position(item, position);
//! }
//! ```

use slotline_core::alloc::HashMap;
use slotline_core::math::Vec2;

use crate::id::ItemId;
use crate::view::{AnimationHandle, Animator, SnapAnimation};

/// Easing functions for the snap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    #[default]
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in-out
    CubicInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}

/// One running position tween.
#[derive(Debug, Clone)]
pub struct Tween {
    item: ItemId,
    from: Vec2,
    to: Vec2,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    easing: EasingFunction,
}

impl Tween {
    pub fn new(snap: SnapAnimation) -> Self {
        Self {
            item: snap.item,
            from: snap.from,
            to: snap.to,
            duration: snap.duration.max(0.0),
            elapsed: 0.0,
            easing: snap.easing,
        }
    }

    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Current interpolated position.
    pub fn value(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.from.lerp(self.to, t)
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `delta_time` seconds.
    ///
    /// Returns true if the tween is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        self.elapsed = (self.elapsed + delta_time.max(0.0)).min(self.duration);
        !self.is_done()
    }
}

/// Frame-driven [`Animator`] implementation.
#[derive(Debug, Default)]
pub struct TweenAnimator {
    next_handle: u64,
    tweens: HashMap<AnimationHandle, Tween>,
}

impl TweenAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every tween. Returns the handles that finished, oldest first.
    ///
    /// Finished tweens are dropped, so each handle is returned exactly once.
    pub fn update(&mut self, delta_time: f32) -> Vec<AnimationHandle> {
        let mut finished = Vec::new();
        self.tweens.retain(|handle, tween| {
            let running = tween.update(delta_time);
            if !running {
                finished.push(*handle);
            }
            running
        });
        finished.sort();
        finished
    }

    /// Current position of a running tween.
    pub fn position(&self, handle: AnimationHandle) -> Option<Vec2> {
        self.tweens.get(&handle).map(Tween::value)
    }

    /// Current positions of every animated item.
    pub fn positions(&self) -> impl Iterator<Item = (ItemId, Vec2)> + '_ {
        self.tweens.values().map(|tween| (tween.item(), tween.value()))
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// Drop a tween without reporting it as finished.
    pub fn stop(&mut self, handle: AnimationHandle) -> bool {
        self.tweens.remove(&handle).is_some()
    }
}

impl Animator for TweenAnimator {
    fn animate(&mut self, snap: SnapAnimation) -> AnimationHandle {
        let handle = AnimationHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        tracing::trace!(?handle, item = %snap.item, duration = snap.duration, "snap animation started");
        self.tweens.insert(handle, Tween::new(snap));
        handle
    }
}
