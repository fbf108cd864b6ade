use crate::core::{Action, ConfigError};
use crate::games::gwent::GwentLite;
use crate::search::{MinimaxSearch, SearchConfig};

use super::Agent;

/// Plays the action found by `MinimaxSearch`.
#[derive(Clone, Debug, Default)]
pub struct MinimaxAgent {
    search: MinimaxSearch,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            search: MinimaxSearch::new(config)?,
        })
    }

    /// The underlying search, for its statistics.
    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select_action(&mut self, game: &GwentLite) -> Action {
        self.search.decide(game)
    }
}
