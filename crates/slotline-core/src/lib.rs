//! Slotline Core
//!
//! Shared building blocks for the slotline reorder engine: math types, hashed
//! collections, layout primitives, logging and profiling setup.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
