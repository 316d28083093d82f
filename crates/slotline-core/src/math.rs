//! Vector math used for pointer coordinates and layout boxes.
//!
//! Everything here is re-exported from [`glam`]. Pointer positions, grab
//! offsets and item sizes are all [`Vec2`] in layout space (pixels, origin at
//! the top-left, y growing downward).
//!
//! ```
//! use slotline_core::math::Vec2;
//!
//! let pointer = Vec2::new(120.0, 64.0);
//! let item_origin = Vec2::new(100.0, 40.0);
//! let grab_offset = pointer - item_origin;
//! assert_eq!(grab_offset, Vec2::new(20.0, 24.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
