use log::debug;
use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::core::{PlayerId, PlayerMap};
use crate::games::gwent::GwentLite;
use crate::rules::GameResult;

/// Turn cap used by the evaluation harness.
pub const DEFAULT_MAX_TURNS: usize = 100;

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    GameOver,
    TurnLimit,
}

/// Result of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// `None` if the turn cap was hit first.
    pub outcome: Option<GameResult>,
    /// Actions applied.
    pub turns: usize,
    pub termination: Termination,
}

/// Reset `game` and play it out.
///
/// `agents[p]` chooses for player `p`. Stops at game over or after
/// `max_turns` actions, whichever comes first.
pub fn play_game<A: Agent>(
    game: &mut GwentLite,
    agents: &mut PlayerMap<A>,
    max_turns: usize,
) -> MatchRecord {
    game.reset();
    play_from(game, agents, max_turns)
}

/// Play out `game` from its current state.
pub fn play_from<A: Agent>(
    game: &mut GwentLite,
    agents: &mut PlayerMap<A>,
    max_turns: usize,
) -> MatchRecord {
    let mut turns = 0;

    while turns < max_turns && game.check_game_over().is_none() {
        let mover = game.current_mover();
        let action = agents[mover].select_action(game);
        game.act(action);
        turns += 1;
    }

    let outcome = game.check_game_over();
    let termination = match outcome {
        Some(_) => Termination::GameOver,
        None => Termination::TurnLimit,
    };

    debug!(
        "{} vs {}: {:?} after {turns} turns ({termination:?})",
        agents[PlayerId::ZERO].name(),
        agents[PlayerId::ONE].name(),
        outcome,
    );

    MatchRecord {
        outcome,
        turns,
        termination,
    }
}
