//! Core engine types: players, RNG, configuration, actions, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, SpecialPowers};
pub use error::{ConfigError, SnapshotError};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
