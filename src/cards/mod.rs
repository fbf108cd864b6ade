//! Cards: a card is nothing but its power.
//!
//! Three power values carry abilities (see `Ability`); every other card
//! simply scores its power for the player who plays it.

pub mod ability;

pub use ability::Ability;

/// Power of a card, and the unit of round points.
pub type Power = u32;
