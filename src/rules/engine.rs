//! Rules engine trait.
//!
//! The search is written against this trait rather than against a concrete
//! game. An engine owns its whole state; searching clones the engine and
//! applies actions to the clones.

use serde::{Deserialize, Serialize};

use crate::core::{Action, PlayerId, PlayerMap};

/// A single player's result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Tie => "tie",
        };
        f.write_str(name)
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner; the other player lost.
    Winner(PlayerId),
    /// Both players finished together.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The result from one player's point of view.
    #[must_use]
    pub fn outcome(&self, player: PlayerId) -> Outcome {
        match self {
            GameResult::Winner(p) if *p == player => Outcome::Win,
            GameResult::Winner(_) => Outcome::Loss,
            GameResult::Tie => Outcome::Tie,
        }
    }

    /// Per-player outcomes.
    #[must_use]
    pub fn outcomes(&self) -> PlayerMap<Outcome> {
        PlayerMap::new(|player| self.outcome(player))
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `current_mover`: only meaningful while the game is not over
/// - `legal_actions`: never empty while the game is not over
/// - `apply_action`: must be deterministic so searches are reproducible
/// - `check_game_over`: `None` while the game continues
pub trait RulesEngine: Clone {
    /// The player whose action is expected next.
    fn current_mover(&self) -> PlayerId;

    /// Every legal action for the current mover, in a fixed order.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action for the current mover.
    ///
    /// Returns whether the action was accepted.
    fn apply_action(&mut self, action: Action) -> bool;

    /// Check if the game is over.
    fn check_game_over(&self) -> Option<GameResult>;

    /// Check if the game has ended.
    fn is_over(&self) -> bool {
        self.check_game_over().is_some()
    }
}
