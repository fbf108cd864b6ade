//! A player's hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Power;

/// Cards held by a player, in the order they were drawn.
///
/// Play is by slot index and removal keeps the order of the remaining
/// cards, so slot numbers shift down after a play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Power; 10]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card at the end of the hand.
    pub fn push(&mut self, card: Power) {
        self.cards.push(card);
    }

    /// Remove and return the card at `slot`, or `None` if out of range.
    pub fn take(&mut self, slot: usize) -> Option<Power> {
        (slot < self.cards.len()).then(|| self.cards.remove(slot))
    }

    /// Card at `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Power> {
        self.cards.get(slot).copied()
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the held cards' powers.
    #[must_use]
    pub fn total_power(&self) -> Power {
        self.cards.iter().sum()
    }

    /// Held cards in slot order.
    #[must_use]
    pub fn cards(&self) -> &[Power] {
        &self.cards
    }
}

impl FromIterator<Power> for Hand {
    fn from_iter<I: IntoIterator<Item = Power>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
