//! Rules engine trait and game results.
//!
//! Games implement `RulesEngine` to define:
//! - Whose turn it is and which actions they may take
//! - How actions modify state
//! - When the game ends and who won
//!
//! The search only ever talks to a game through this trait.

pub mod engine;

pub use engine::{GameResult, Outcome, RulesEngine};
