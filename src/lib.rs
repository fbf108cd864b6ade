//! # gwent-lite
//!
//! A two-player, round-based card game engine built as a research
//! environment, plus agents that play it.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through a seeded `GameRng`,
//!    so a seed and an action sequence reproduce a game exactly.
//!
//! 2. **Cheap Clones**: decks live in `im` vectors and hands in small
//!    inline buffers, so search can clone the engine at every node.
//!
//! 3. **Permissive Actions**: an action index past the end of the hand is
//!    a pass. External agents rely on this.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, actions, errors
//! - `cards`: Card powers and their abilities
//! - `zones`: Deck and hand
//! - `rules`: RulesEngine trait and game results
//! - `games`: The GwentLite engine, observations and snapshots
//! - `search`: Minimax with alpha-beta pruning
//! - `agents`: Minimax, random and observation-driven players
//! - `play`: Match runner

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;
pub mod search;
pub mod agents;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameRng, GameRngState, PlayerId, PlayerMap,
    SnapshotError, SpecialPowers,
};

pub use crate::cards::{Ability, Power};

pub use crate::zones::{Deck, DeckSource, Hand};

pub use crate::rules::{GameResult, Outcome, RulesEngine};

pub use crate::games::gwent::{GameSnapshot, GwentLite, GwentLiteBuilder};

pub use crate::search::{
    Evaluator, GwentHeuristic, MinimaxSearch, SearchConfig, SearchResult, SearchStats,
};

pub use crate::agents::{Agent, MinimaxAgent, ObservationAgent, PolicyAgent, RandomAgent};

pub use crate::play::{play_from, play_game, MatchRecord, Termination, DEFAULT_MAX_TURNS};
