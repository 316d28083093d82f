//! Error types for building a reorderable list.
//!
//! Gesture handling never fails; these only come out of construction and
//! configuration.

use crate::id::ItemId;

/// Errors that can occur when setting up a reorderable list.
#[derive(Debug, Clone, PartialEq)]
pub enum ReorderError {
    /// The same item appears twice in the initial order.
    DuplicateItem(ItemId),
    /// The commit animation duration is negative or not finite.
    InvalidDuration(f32),
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::DuplicateItem(id) => write!(f, "Item {} appears more than once", id),
            ReorderError::InvalidDuration(secs) => {
                write!(f, "Commit duration must be finite and non-negative, got {}", secs)
            }
        }
    }
}

impl std::error::Error for ReorderError {}

/// Result type for list construction.
pub type ReorderResult<T> = Result<T, ReorderError>;
