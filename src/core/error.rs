//! Error types for configuration and snapshot handling.
//!
//! Misuse of engine preconditions (drawing from an empty deck, asking for the
//! mover when nobody is active) is not represented here: those panic.

use thiserror::Error;

use super::player::PlayerId;

/// Unsatisfiable rule constants or an unusable explicit deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand limit must be at least 1")]
    ZeroHandLimit,

    #[error("minimum deck size {min_deck_size} is smaller than the opening hand of {hand_limit}")]
    DeckSmallerThanHand {
        min_deck_size: usize,
        hand_limit: usize,
    },

    #[error("deck power budget {max_deck_power} cannot cover {min_deck_size} cards of power 1")]
    PowerBudgetTooSmall {
        max_deck_power: u32,
        min_deck_size: usize,
    },

    #[error("rounds to win must be at least 1")]
    ZeroRoundsToWin,

    #[error("search depth must be at least 1")]
    ZeroSearchDepth,

    #[error("invalid deck for {player}: {reason}")]
    InvalidDeck { player: PlayerId, reason: String },
}

/// Failure to encode or decode a `GameSnapshot`.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),

    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),

    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(String),
}
