//! Configuration for a reorderable list.

use slotline_core::geometry::Axis;

use crate::animation::EasingFunction;
use crate::error::{ReorderError, ReorderResult};

/// Default duration of the commit snap, in seconds.
pub const DEFAULT_COMMIT_DURATION: f32 = 0.2;

/// Behaviour of a [`ReorderList`](crate::list::ReorderList).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderConfig {
    /// Axis items are stacked and dragged along.
    pub axis: Axis,
    /// Duration of the snap into the final slot, in seconds.
    pub commit_duration: f32,
    /// Easing of the snap.
    pub commit_easing: EasingFunction,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            commit_duration: DEFAULT_COMMIT_DURATION,
            commit_easing: EasingFunction::EaseOut,
        }
    }
}

impl ReorderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the drag axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the snap duration in seconds.
    pub fn commit_duration(mut self, seconds: f32) -> Self {
        self.commit_duration = seconds;
        self
    }

    /// Set the snap easing.
    pub fn commit_easing(mut self, easing: EasingFunction) -> Self {
        self.commit_easing = easing;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> ReorderResult<()> {
        if !self.commit_duration.is_finite() || self.commit_duration < 0.0 {
            return Err(ReorderError::InvalidDuration(self.commit_duration));
        }
        Ok(())
    }
}
