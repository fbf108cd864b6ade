//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered below the root.
    pub nodes_expanded: u64,

    /// Heuristic evaluations (leaves and terminal states).
    pub evaluations: u64,

    /// Sibling lists abandoned on `beta <= alpha`.
    pub cutoffs: u64,

    /// Total time spent searching (microseconds).
    pub elapsed_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes expanded per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.elapsed_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.elapsed_us as f64 / 1_000_000.0)
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} evals, {} cutoffs in {}us",
            self.nodes_expanded, self.evaluations, self.cutoffs, self.elapsed_us
        )
    }
}
