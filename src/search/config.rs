//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Minimax search parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below the root, the root action included.
    pub depth: u32,

    /// Skip siblings once `beta <= alpha`.
    /// Turning this off searches the full tree; results are identical.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Enable or disable alpha-beta cutoffs.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// A search must look at least one action ahead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroSearchDepth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 4);
        assert!(config.pruning);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_depth(2).with_pruning(false);
        assert_eq!(config.depth, 2);
        assert!(!config.pruning);
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(
            SearchConfig::default().with_depth(0).validate(),
            Err(ConfigError::ZeroSearchDepth)
        );
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_depth(6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
