//! GwentLite: a two-player, best-of-three card game.
//!
//! - Each player has a deck of power-valued cards and a hand of up to 10
//! - On your turn: play a card for points, or pass and sit out the round
//! - A round ends once both players have passed or run out of cards; the
//!   higher score takes the round, a tie credits both
//! - First to two round wins takes the game
//!
//! Powers 3, 6 and 9 are special: Muster, Spy and Scorch.

mod game;
mod observation;
mod snapshot;

pub use game::{GwentLite, GwentLiteBuilder};
pub use snapshot::GameSnapshot;
