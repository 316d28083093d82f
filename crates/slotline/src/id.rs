//! Identifiers for reorderable items and container slots.
//!
//! Items are referred to by value everywhere, never by reference, so the
//! last-seen drag target can be compared with `==` across pointer moves.

use std::fmt;

/// A stable identifier for one reorderable item.
///
/// # Example
/// ```
/// use slotline::ItemId;
///
/// let a = ItemId::new("row-a");
/// assert_eq!(a, ItemId::from("row-a"));
/// assert_ne!(a, ItemId::new("row-b"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Create an item ID from a string key.
    ///
    /// Uses FNV-1a so the same key always maps to the same ID.
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    /// Create an item ID from a raw u64 (for host-generated IDs).
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let mut hash = FNV_OFFSET_BASIS;
        for byte in s.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId(0x{:016x})", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

/// A position holder in the container: a real item or the drop placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Item(ItemId),
    Placeholder,
}

impl SlotId {
    /// The item in this slot, if it is not the placeholder.
    pub fn item(&self) -> Option<ItemId> {
        match self {
            SlotId::Item(id) => Some(*id),
            SlotId::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SlotId::Placeholder)
    }
}

impl From<ItemId> for SlotId {
    fn from(id: ItemId) -> Self {
        SlotId::Item(id)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::Item(id) => write!(f, "{}", id),
            SlotId::Placeholder => f.write_str("Placeholder"),
        }
    }
}
