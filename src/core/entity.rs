//! Card identification.
//!
//! Every physical card gets a unique `CardId` when the deck is built.
//! Ids come from an explicit `IdAllocator` owned by the construction step,
//! so two decks built from fresh allocators get identical ids.
//!
//! ```
//! use property_deal::core::{CardId, IdAllocator};
//!
//! let mut ids = IdAllocator::new();
//! assert_eq!(ids.alloc(), CardId(0));
//! assert_eq!(ids.alloc(), CardId(1));
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic card id source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub const fn allocated(&self) -> u32 {
        self.next
    }
}
