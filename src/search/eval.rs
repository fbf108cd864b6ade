//! Position evaluation.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::games::gwent::GwentLite;
use crate::rules::Outcome;

/// Scores a position from one player's point of view.
///
/// Higher is better for `origin`. The search only compares scores, so any
/// scale works as long as terminal results dominate.
pub trait Evaluator<E> {
    fn evaluate(&self, state: &E, origin: PlayerId) -> i64;
}

/// Hand-tuned GwentLite evaluation.
///
/// Finished games score `±win_score` (0 for a tie). Otherwise round wins,
/// round points and hand size are compared against the opponent's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GwentHeuristic {
    pub win_score: i64,
    pub round_win_weight: i64,
    pub point_weight: i64,
    pub hand_weight: i64,
}

impl Default for GwentHeuristic {
    fn default() -> Self {
        Self {
            win_score: 100_000,
            round_win_weight: 10_000,
            point_weight: 10,
            hand_weight: 50,
        }
    }
}

impl Evaluator<GwentLite> for GwentHeuristic {
    fn evaluate(&self, state: &GwentLite, origin: PlayerId) -> i64 {
        if let Some(result) = state.check_game_over() {
            return match result.outcome(origin) {
                Outcome::Win => self.win_score,
                Outcome::Loss => -self.win_score,
                Outcome::Tie => 0,
            };
        }

        let opponent = origin.opponent();
        let wins = i64::from(state.round_wins(origin)) - i64::from(state.round_wins(opponent));
        let points = i64::from(state.points(origin)) - i64::from(state.points(opponent));
        let hands = state.hand(origin).len() as i64 - state.hand(opponent).len() as i64;

        wins * self.round_win_weight + points * self.point_weight + hands * self.hand_weight
    }
}
