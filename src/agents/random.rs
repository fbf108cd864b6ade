use crate::core::{Action, GameRng};
use crate::games::gwent::GwentLite;

use super::Agent;

/// Picks uniformly among pass and every card in hand.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_action(&mut self, game: &GwentLite) -> Action {
        let hand_size = game.hand(game.current_mover()).len();
        let index = self.rng.gen_range_usize(0..hand_size + 1);
        Action::from_index(index, hand_size)
    }
}
