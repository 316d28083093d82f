//! Hash collections used across slotline.
//!
//! Offset and marker tables are keyed by small copyable ids and are hit on
//! every pointer move, so they use AHash instead of SipHash.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
