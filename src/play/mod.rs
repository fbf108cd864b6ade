//! Driving a game to completion with two agents.

mod runner;

pub use runner::{play_from, play_game, MatchRecord, Termination, DEFAULT_MAX_TURNS};
