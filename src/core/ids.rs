//! Card identification.
//!
//! Every card drawn during a run gets a unique [`CardId`]. IDs are handed
//! out by an explicit [`CardIdGen`] value rather than a process-wide
//! counter, so a deck built from the same generator state and seed is
//! identical every time.
//!
//! ```
//! use trio_engine::core::{CardId, CardIdGen};
//!
//! let mut ids = CardIdGen::new();
//! assert_eq!(ids.next_id(), CardId(0));
//! assert_eq!(ids.next_id(), CardId(1));
//!
//! // Resuming from a saved counter continues the sequence.
//! let mut resumed = CardIdGen::starting_at(ids.peek());
//! assert_eq!(resumed.next_id(), CardId(2));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card on the board or in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic card ID allocator.
///
/// Threaded through deck generation and board refills.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdGen {
    next: u32,
}

impl CardIdGen {
    /// Start allocating from zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start allocating from a saved counter.
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Allocate the next ID.
    pub fn next_id(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }

    /// The value the next allocation will use.
    #[must_use]
    pub const fn peek(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_allocation() {
        let mut ids = CardIdGen::new();
        let allocated: Vec<_> = (0..5).map(|_| ids.next_id()).collect();
        assert_eq!(allocated, vec![CardId(0), CardId(1), CardId(2), CardId(3), CardId(4)]);
        assert_eq!(ids.peek(), 5);
    }

    #[test]
    fn test_independent_generators() {
        let mut a = CardIdGen::new();
        let mut b = CardIdGen::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), CardId(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
