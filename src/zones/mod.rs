//! Card locations: each player owns a `Deck` and a `Hand`.
//!
//! Played cards leave the game entirely; their power lives on only in the
//! round points they produced.

pub mod deck;
pub mod hand;

pub use deck::{Deck, DeckSource};
pub use hand::Hand;
