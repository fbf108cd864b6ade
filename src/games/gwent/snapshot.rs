//! Serializable snapshots of a game in progress.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::game::GwentLite;
use crate::cards::Power;
use crate::core::{
    ActionRecord, GameConfig, GameRng, GameRngState, PlayerId, PlayerMap, SnapshotError,
    PLAYER_COUNT,
};
use crate::zones::{Deck, DeckSource, Hand};

/// Everything needed to resume a game exactly where it stopped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    /// Deck contents, bottom first.
    pub decks: PlayerMap<Vec<Power>>,
    pub hands: PlayerMap<Vec<Power>>,
    pub points: PlayerMap<Power>,
    pub round_wins: PlayerMap<u32>,
    pub round: u32,
    pub active: Vec<PlayerId>,
    pub cursor: usize,
    pub round_one_first: PlayerId,
    pub history: Vec<ActionRecord>,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

impl GwentLite {
    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            decks: self.decks.map(|_, deck| deck.cards().collect()),
            hands: self.hands.map(|_, hand| hand.cards().to_vec()),
            points: self.points,
            round_wins: self.round_wins,
            round: self.round,
            active: self.active.to_vec(),
            cursor: self.cursor,
            round_one_first: self.round_one_first,
            history: self.history.iter().cloned().collect(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// Unplayed-card counts and remaining power are recomputed from the
    /// restored decks and hands.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let GameSnapshot {
            config,
            decks,
            hands,
            points,
            round_wins,
            round,
            active,
            cursor,
            round_one_first,
            history,
            rng,
        } = snapshot;

        config
            .validate()
            .map_err(|e| SnapshotError::Inconsistent(e.to_string()))?;

        let seated = |player: &PlayerId| player.index() < PLAYER_COUNT;
        if !active.iter().all(seated) || !seated(&round_one_first) {
            return Err(SnapshotError::Inconsistent(
                "player id outside the table".to_string(),
            ));
        }
        if active.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SnapshotError::Inconsistent(format!(
                "active players {active:?} repeat or are out of seat order"
            )));
        }
        if !active.is_empty() && cursor >= active.len() {
            return Err(SnapshotError::Inconsistent(format!(
                "cursor {cursor} does not index {} active players",
                active.len()
            )));
        }

        let max_card_power = config.max_card_power();
        let out_of_range = |cards: &[Power]| cards.iter().any(|&c| c == 0 || c > max_card_power);
        for player in PlayerId::all() {
            if out_of_range(&decks[player]) || out_of_range(&hands[player]) {
                return Err(SnapshotError::Inconsistent(format!(
                    "{player} holds a card outside 1..={max_card_power}"
                )));
            }
            if hands[player].len() > config.hand_limit {
                return Err(SnapshotError::Inconsistent(format!(
                    "{player} holds more than {} cards",
                    config.hand_limit
                )));
            }
        }

        let mut rng = GameRng::from_state(&rng);
        let template = Deck::new(config.min_deck_size, config.max_deck_power);
        let decks = decks.map(|_, cards| {
            let mut deck = template.clone();
            deck.reset(DeckSource::Explicit(cards.clone()), &mut rng);
            deck
        });
        let hands = hands.map(|_, cards| cards.iter().copied().collect::<Hand>());
        let unplayed = PlayerMap::new(|p| hands[p].len() + decks[p].size());
        let remaining_power =
            PlayerMap::new(|p| hands[p].total_power() + decks[p].total_power());

        let sequence = history.len() as u32;
        Ok(Self {
            config,
            decks,
            hands,
            unplayed,
            points,
            round_wins,
            remaining_power,
            round,
            active: SmallVec::from_vec(active),
            cursor,
            round_one_first,
            history: history.into_iter().collect::<Vector<_>>(),
            sequence,
            rng,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;
    use crate::games::gwent::GwentLiteBuilder;

    fn mid_game() -> GwentLite {
        let mut game = GwentLiteBuilder::new().seed(21).build().unwrap();
        game.act(Action::Play(0));
        game.act(Action::Play(2));
        game.act(Action::Pass);
        game
    }

    #[test]
    fn test_snapshot_round_trip() {
        let game = mid_game();
        let restored = GwentLite::from_snapshot(game.snapshot()).unwrap();

        assert_eq!(restored.snapshot(), game.snapshot());
        assert_eq!(restored.current_mover(), game.current_mover());
        assert_eq!(restored.history().len(), 3);
    }

    #[test]
    fn test_restored_game_continues_identically() {
        let mut game = mid_game();
        let mut restored = GwentLite::from_snapshot(game.snapshot()).unwrap();

        for _ in 0..6 {
            game.act_index(1);
            restored.act_index(1);
        }
        assert_eq!(restored.snapshot(), game.snapshot());

        game.reset();
        restored.reset();
        assert_eq!(restored.snapshot(), game.snapshot());
    }

    #[test]
    fn test_bincode_bytes() {
        let snapshot = mid_game().snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        let decoded = GameSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(matches!(
            GameSnapshot::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn test_inconsistent_snapshot_rejected() {
        let mut snapshot = mid_game().snapshot();
        snapshot.cursor = 5;
        assert!(matches!(
            GwentLite::from_snapshot(snapshot),
            Err(SnapshotError::Inconsistent(_))
        ));

        let mut snapshot = mid_game().snapshot();
        snapshot.hands[PlayerId::ZERO].push(0);
        assert!(matches!(
            GwentLite::from_snapshot(snapshot),
            Err(SnapshotError::Inconsistent(_))
        ));
    }

    fn restore_fails(edit: impl FnOnce(&mut GameSnapshot)) -> bool {
        let game = GwentLiteBuilder::new().seed(21).build().unwrap();
        let mut snapshot = game.snapshot();
        edit(&mut snapshot);
        matches!(
            GwentLite::from_snapshot(snapshot),
            Err(SnapshotError::Inconsistent(_))
        )
    }

    #[test]
    fn test_repeated_active_player_rejected() {
        assert!(restore_fails(|s| s.active = vec![PlayerId::ZERO, PlayerId::ZERO]));
    }

    #[test]
    fn test_active_out_of_seat_order_rejected() {
        assert!(restore_fails(|s| s.active = vec![PlayerId::ONE, PlayerId::ZERO]));
    }

    #[test]
    fn test_unknown_player_rejected() {
        assert!(restore_fails(|s| s.active = vec![PlayerId(5)]));
        assert!(restore_fails(|s| s.round_one_first = PlayerId(2)));
    }

    #[test]
    fn test_totals_follow_restored_cards() {
        let game = GwentLiteBuilder::new().seed(21).build().unwrap();
        let mut snapshot = game.snapshot();
        snapshot.hands[PlayerId::ZERO] = vec![7, 2];
        snapshot.decks[PlayerId::ZERO] = vec![1, 1, 1];

        let mut restored = GwentLite::from_snapshot(snapshot).unwrap();
        assert_eq!(restored.unplayed_cards(PlayerId::ZERO), 5);
        assert_eq!(restored.remaining_power(PlayerId::ZERO), 12);
        assert_eq!(
            restored.unplayed_cards(PlayerId::ONE),
            game.unplayed_cards(PlayerId::ONE)
        );

        restored.cursor = 0;
        restored.act(Action::Play(0));
        assert_eq!(restored.unplayed_cards(PlayerId::ZERO), 4);
        assert_eq!(restored.remaining_power(PlayerId::ZERO), 5);
        assert_eq!(restored.points(PlayerId::ZERO), 7);
    }
}
