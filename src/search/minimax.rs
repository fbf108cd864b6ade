//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The search explores clones of the live engine; the caller's state is
//! never touched. Whether a node maximizes or minimizes is decided by who
//! moves there, not by ply parity: after a pass the other player may act
//! several times in a row.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ConfigError, PlayerId};
use crate::rules::RulesEngine;

use super::config::SearchConfig;
use super::eval::{Evaluator, GwentHeuristic};
use super::stats::SearchStats;

/// Best root action and its backed-up score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub action: Action,
    pub score: i64,
}

/// Minimax search context.
///
/// Generic over the evaluator; the engine type is chosen per call.
#[derive(Clone, Debug)]
pub struct MinimaxSearch<V = GwentHeuristic> {
    config: SearchConfig,
    evaluator: V,
    stats: SearchStats,
}

impl MinimaxSearch<GwentHeuristic> {
    /// Create a search using the GwentLite heuristic.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::with_evaluator(config, GwentHeuristic::default())
    }
}

impl Default for MinimaxSearch<GwentHeuristic> {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            evaluator: GwentHeuristic::default(),
            stats: SearchStats::default(),
        }
    }
}

impl<V> MinimaxSearch<V> {
    /// Create a search with a custom evaluator.
    pub fn with_evaluator(config: SearchConfig, evaluator: V) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            evaluator,
            stats: SearchStats::default(),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &V {
        &self.evaluator
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Nodes entered during the most recent search.
    #[must_use]
    pub fn expanded_nodes(&self) -> u64 {
        self.stats.nodes_expanded
    }

    /// Best action for the current mover.
    ///
    /// Panics if the game is already over.
    pub fn decide<E>(&mut self, state: &E) -> Action
    where
        E: RulesEngine,
        V: Evaluator<E>,
    {
        self.search(state).action
    }

    /// Search from `state` and return the best root action with its score.
    ///
    /// Root actions are tried in legal-action order and only a strictly
    /// better score replaces the incumbent, so ties go to the earliest
    /// action. `Pass` is returned if nothing beats the initial sentinel.
    ///
    /// Panics if the game is already over.
    pub fn search<E>(&mut self, state: &E) -> SearchResult
    where
        E: RulesEngine,
        V: Evaluator<E>,
    {
        assert!(!state.is_over(), "search started from a finished game");

        let start = Instant::now();
        self.stats.reset();

        let origin = state.current_mover();
        let depth = self.config.depth.saturating_sub(1);

        let mut best = SearchResult {
            action: Action::Pass,
            score: i64::MIN,
        };
        let mut alpha = i64::MIN;
        let beta = i64::MAX;

        for action in state.legal_actions() {
            let mut child = state.clone();
            child.apply_action(action);

            let score = self.minimax(&child, depth, alpha, beta, origin);
            if score > best.score {
                best = SearchResult { action, score };
            }
            alpha = alpha.max(best.score);
        }

        self.stats.elapsed_us = start.elapsed().as_micros() as u64;
        debug!(
            "{origin} chose {} (score {}): {}",
            best.action, best.score, self.stats
        );
        best
    }

    fn minimax<E>(
        &mut self,
        state: &E,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        origin: PlayerId,
    ) -> i64
    where
        E: RulesEngine,
        V: Evaluator<E>,
    {
        self.stats.nodes_expanded += 1;

        if depth == 0 || state.is_over() {
            self.stats.evaluations += 1;
            return self.evaluator.evaluate(state, origin);
        }

        let maximizing = state.current_mover() == origin;
        let mut value = if maximizing { i64::MIN } else { i64::MAX };

        for action in state.legal_actions() {
            let mut child = state.clone();
            child.apply_action(action);
            let score = self.minimax(&child, depth - 1, alpha, beta, origin);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(score);
            } else {
                value = value.min(score);
                beta = beta.min(score);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        value
    }
}
