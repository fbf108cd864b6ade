//! Special abilities keyed by card power.

use serde::{Deserialize, Serialize};

use super::Power;
use crate::core::config::SpecialPowers;

/// What happens when a card is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Score the card's power for its owner.
    None,
    /// Score the card plus every card of the same power left in the owner's
    /// deck, removing those cards from the deck.
    Muster,
    /// Score the card for the opponent; the owner draws a replacement.
    Spy,
    /// Score the card, then burn up to the scorch cap from the opponent.
    Scorch,
}

impl Ability {
    /// Classify a card by its power.
    ///
    /// ```
    /// use gwent_lite::cards::Ability;
    /// use gwent_lite::core::config::SpecialPowers;
    ///
    /// let specials = SpecialPowers::default();
    /// assert_eq!(Ability::of(3, &specials), Ability::Muster);
    /// assert_eq!(Ability::of(4, &specials), Ability::None);
    /// ```
    #[must_use]
    pub fn of(power: Power, specials: &SpecialPowers) -> Self {
        if power == specials.muster {
            Ability::Muster
        } else if power == specials.spy {
            Ability::Spy
        } else if power == specials.scorch {
            Ability::Scorch
        } else {
            Ability::None
        }
    }

    /// Check if this card has a special ability.
    #[must_use]
    pub fn is_special(self) -> bool {
        !matches!(self, Ability::None)
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ability::None => "",
            Ability::Muster => "MUSTER",
            Ability::Spy => "SPY",
            Ability::Scorch => "SCORCH",
        };
        f.write_str(name)
    }
}
