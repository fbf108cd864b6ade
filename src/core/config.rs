//! Game configuration.
//!
//! `GameConfig` holds every rule constant of a GwentLite table. The derived
//! quantities (maximum card power, generation mean and spread, observation
//! length) are computed from it rather than stored, so a config can never
//! disagree with itself.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Power;

/// Power values that carry a special ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialPowers {
    /// Pulls every matching card out of the owner's deck.
    pub muster: Power,
    /// Scores for the opponent and draws a replacement.
    pub spy: Power,
    /// Scores and burns part of the opponent's round points.
    pub scorch: Power,
}

impl Default for SpecialPowers {
    fn default() -> Self {
        Self {
            muster: 3,
            spy: 6,
            scorch: 9,
        }
    }
}

/// Rule constants for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cards in a generated deck.
    pub min_deck_size: usize,

    /// Total power of a generated deck.
    pub max_deck_power: Power,

    /// Hand capacity; also the opening hand size.
    pub hand_limit: usize,

    /// Cards drawn by each player at every round transition.
    pub round_draw: usize,

    /// Maximum points a scorch removes from the opponent.
    pub scorch_damage: Power,

    /// Round wins needed to end the game.
    pub rounds_to_win: u32,

    /// Which powers trigger abilities.
    pub specials: SpecialPowers,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_deck_size: 25,
            max_deck_power: 100,
            hand_limit: 10,
            round_draw: 3,
            scorch_damage: 5,
            rounds_to_win: 2,
            specials: SpecialPowers::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated deck size.
    #[must_use]
    pub fn with_min_deck_size(mut self, size: usize) -> Self {
        self.min_deck_size = size;
        self
    }

    /// Set the generated deck's total power.
    #[must_use]
    pub fn with_max_deck_power(mut self, power: Power) -> Self {
        self.max_deck_power = power;
        self
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the per-round draw count.
    #[must_use]
    pub fn with_round_draw(mut self, count: usize) -> Self {
        self.round_draw = count;
        self
    }

    /// Set the scorch cap.
    #[must_use]
    pub fn with_scorch_damage(mut self, damage: Power) -> Self {
        self.scorch_damage = damage;
        self
    }

    /// Set the number of round wins that ends the game.
    #[must_use]
    pub fn with_rounds_to_win(mut self, rounds: u32) -> Self {
        self.rounds_to_win = rounds;
        self
    }

    /// Check that the constants describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_limit == 0 {
            return Err(ConfigError::ZeroHandLimit);
        }
        if self.min_deck_size < self.hand_limit {
            return Err(ConfigError::DeckSmallerThanHand {
                min_deck_size: self.min_deck_size,
                hand_limit: self.hand_limit,
            });
        }
        if (self.max_deck_power as usize) < self.min_deck_size {
            return Err(ConfigError::PowerBudgetTooSmall {
                max_deck_power: self.max_deck_power,
                min_deck_size: self.min_deck_size,
            });
        }
        if self.rounds_to_win == 0 {
            return Err(ConfigError::ZeroRoundsToWin);
        }
        Ok(())
    }

    /// Highest power a single card can have.
    ///
    /// Every other card of a generated deck has power at least 1.
    #[must_use]
    pub fn max_card_power(&self) -> Power {
        self.max_deck_power - self.min_deck_size as Power + 1
    }

    /// Mean of the normal distribution card powers are sampled from.
    #[must_use]
    pub fn generation_mean(&self) -> f64 {
        (f64::from(self.max_deck_power) / self.min_deck_size as f64).round()
    }

    /// Upper bound (inclusive) of the standard deviations a deck may be
    /// generated with. Each generation picks uniformly from `0..=max`.
    #[must_use]
    pub fn max_generation_stdev(&self) -> u32 {
        (f64::from(self.max_deck_power) / self.min_deck_size as f64 * 16.0 / 9.0).round() as u32
    }

    /// Length of the vector returned by `GwentLite::observe`.
    ///
    /// Deck histogram, hand slots, 5 own aggregates, 7 opponent aggregates,
    /// round number and active count.
    #[must_use]
    pub fn observation_size(&self) -> usize {
        self.max_card_power() as usize + self.hand_limit + 5 + 7 + 2
    }

    /// Number of distinct action indices: pass plus one per hand slot.
    #[must_use]
    pub fn action_space_size(&self) -> usize {
        self.hand_limit + 1
    }
}
