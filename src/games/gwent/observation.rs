//! Observation encoding for agents.
//!
//! `observe` is the only view of the game that observation-driven agents
//! get. It exposes the observer's own deck histogram and hand, but of the
//! opponent only what the table shows: sizes, aggregates and scores.

use super::game::GwentLite;
use crate::core::PlayerId;

/// Headroom added to the highest card power when normalizing round points.
const POINTS_HEADROOM: f32 = 9.0;

impl GwentLite {
    /// Encode the game from `player`'s perspective.
    ///
    /// Layout (length `observation_size()`):
    /// - own deck histogram, normalized by deck size (`max_card_power`)
    /// - own hand, each card over `max_card_power`, zero-padded (`hand_limit`)
    /// - own unplayed cards, round points, round wins, remaining power,
    ///   average remaining power (5)
    /// - opponent deck size, hand size, unplayed cards, round points,
    ///   round wins, remaining power, average remaining power (7)
    /// - round number, number of active players (2)
    #[must_use]
    pub fn observe(&self, player: PlayerId) -> Vec<f32> {
        let config = &self.config;
        let opponent = player.opponent();

        let max_card_power = config.max_card_power() as f32;
        let deck_size = config.min_deck_size as f32;
        let deck_power = config.max_deck_power as f32;
        let points_scale = max_card_power + POINTS_HEADROOM;
        let wins_scale = config.rounds_to_win as f32;
        let max_rounds = (2 * config.rounds_to_win - 1) as f32;

        let mut features = Vec::with_capacity(config.observation_size());

        features.extend(self.decks[player].features());

        let hand = self.hands[player].cards();
        features.extend((0..config.hand_limit).map(|slot| {
            hand.get(slot).map_or(0.0, |&card| card as f32 / max_card_power)
        }));

        features.extend([
            self.unplayed[player] as f32 / deck_size,
            self.points[player] as f32 / points_scale,
            self.round_wins[player] as f32 / wins_scale,
            self.remaining_power[player] as f32 / deck_power,
            self.average_remaining_power(player) as f32 / max_card_power,
        ]);

        features.extend([
            self.decks[opponent].size() as f32 / deck_size,
            self.hands[opponent].len() as f32 / config.hand_limit as f32,
            self.unplayed[opponent] as f32 / deck_size,
            self.points[opponent] as f32 / points_scale,
            self.round_wins[opponent] as f32 / wins_scale,
            self.remaining_power[opponent] as f32 / deck_power,
            self.average_remaining_power(opponent) as f32 / max_card_power,
        ]);

        features.extend([
            self.round as f32 / max_rounds,
            self.active.len() as f32 / 2.0,
        ]);

        features
    }
}
