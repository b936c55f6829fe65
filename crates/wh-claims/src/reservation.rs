//! `ReservationTable`: a per-tick set with atomic claim-if-absent.

use std::hash::Hash;

use crate::Set;

/// Items claimed during the current tick.
///
/// Two instances live on the [`ClaimBoard`][crate::ClaimBoard]: destination
/// cells and boxes.  The first agent to [`claim`][Self::claim] an item wins;
/// every later claim for the same item in the same tick is refused.
#[derive(Debug, Clone)]
pub struct ReservationTable<T> {
    claimed: Set<T>,
}

impl<T> Default for ReservationTable<T> {
    fn default() -> Self {
        Self { claimed: Set::default() }
    }
}

impl<T: Copy + Eq + Hash> ReservationTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `item` if nobody has yet.  Returns `true` if this call won it.
    #[inline]
    pub fn claim(&mut self, item: T) -> bool {
        self.claimed.insert(item)
    }

    #[inline]
    pub fn is_claimed(&self, item: &T) -> bool {
        self.claimed.contains(item)
    }

    /// Forget every claim.  Called once per tick, after the Advance phase.
    pub fn clear(&mut self) {
        self.claimed.clear();
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
