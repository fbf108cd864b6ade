//! Adversarial search over any `RulesEngine`.
//!
//! ## Usage
//!
//! ```rust
//! use gwent_lite::games::gwent::GwentLiteBuilder;
//! use gwent_lite::search::{MinimaxSearch, SearchConfig};
//!
//! let mut game = GwentLiteBuilder::new().seed(7).build().unwrap();
//! let mut search = MinimaxSearch::new(SearchConfig::default().with_depth(2)).unwrap();
//!
//! let action = search.decide(&game);
//! game.act(action);
//! println!("expanded {} nodes", search.expanded_nodes());
//! ```

pub mod config;
pub mod eval;
pub mod minimax;
pub mod stats;

pub use config::SearchConfig;
pub use eval::{Evaluator, GwentHeuristic};
pub use minimax::{MinimaxSearch, SearchResult};
pub use stats::SearchStats;
