//! Players that pick actions for a `GwentLite` game.
//!
//! - `MinimaxAgent`: alpha-beta search over the full game state
//! - `RandomAgent`: uniform over `0..=hand_size`
//! - `ObservationAgent`: adapts a `PolicyAgent` that only sees the
//!   observation vector (learned policies live behind this trait)

mod minimax;
mod policy;
mod random;

pub use minimax::MinimaxAgent;
pub use policy::{ObservationAgent, PolicyAgent};
pub use random::RandomAgent;

use crate::core::Action;
use crate::games::gwent::GwentLite;

/// Something that can take a turn.
///
/// Called only while the game is running; the returned action is applied
/// for `game.current_mover()`.
pub trait Agent {
    /// Short label for logs and match records.
    fn name(&self) -> &str;

    fn select_action(&mut self, game: &GwentLite) -> Action;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_action(&mut self, game: &GwentLite) -> Action {
        (**self).select_action(game)
    }
}
