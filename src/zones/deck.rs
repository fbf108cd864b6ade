//! A player's draw pile.
//!
//! The deck is a stack (draws come off the back) plus a histogram of the
//! powers still in it. Every mutation goes through a method that keeps the
//! two in sync, so `histogram()` always equals the multiset of `cards()`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Power;
use crate::core::GameRng;

/// How a deck is (re)built.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckSource {
    /// Use this composition as-is; the last element is the top of the deck.
    /// Explicit compositions are never shuffled.
    Explicit(Vec<Power>),
    /// Sample a random composition and shuffle it.
    Generated {
        /// Mean card power.
        mean: f64,
        /// Standard deviation of card power.
        stdev: f64,
    },
}

/// A player's draw pile with its power histogram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Cards in draw order; the top is the last element.
    cards: Vector<Power>,

    /// `histogram[p - 1]` is the number of cards of power `p`.
    histogram: Vec<u32>,

    /// Number of cards a generated deck holds.
    min_deck_size: usize,

    /// Total power of a generated deck.
    max_deck_power: Power,
}

impl Deck {
    /// Create an empty deck for the given constraints.
    #[must_use]
    pub fn new(min_deck_size: usize, max_deck_power: Power) -> Self {
        assert!(
            max_deck_power as usize >= min_deck_size && min_deck_size > 0,
            "deck power budget cannot cover the deck size"
        );
        let max_card_power = max_deck_power - min_deck_size as Power + 1;

        Self {
            cards: Vector::new(),
            histogram: vec![0; max_card_power as usize],
            min_deck_size,
            max_deck_power,
        }
    }

    /// Highest power a card in this deck may have.
    #[must_use]
    pub fn max_card_power(&self) -> Power {
        self.histogram.len() as Power
    }

    /// Rebuild the deck from the given source.
    ///
    /// Explicit compositions must only contain powers in
    /// `1..=max_card_power`.
    pub fn reset(&mut self, source: DeckSource, rng: &mut GameRng) {
        let cards = match source {
            DeckSource::Explicit(cards) => cards,
            DeckSource::Generated { mean, stdev } => {
                let mut cards = self.generate(mean, stdev, rng);
                rng.shuffle(&mut cards);
                cards
            }
        };

        self.histogram.iter_mut().for_each(|count| *count = 0);
        for &card in &cards {
            assert!(
                card >= 1 && card <= self.max_card_power(),
                "card power {card} outside 1..={}",
                self.max_card_power()
            );
            self.histogram[card as usize - 1] += 1;
        }
        self.cards = cards.into_iter().collect();
    }

    /// Sample a composition of `min_deck_size` cards whose powers sum to
    /// exactly `max_deck_power`.
    ///
    /// Each card is a rounded normal sample clamped to `1..=budget`, where
    /// the budget is the highest power the remaining cards still allow.
    /// Leftover budget goes to the last card.
    fn generate(&self, mean: f64, stdev: f64, rng: &mut GameRng) -> Vec<Power> {
        let mut budget = self.max_card_power();
        let mut cards = Vec::with_capacity(self.min_deck_size);

        while cards.len() < self.min_deck_size {
            if budget == 1 {
                cards.push(1);
                continue;
            }

            let sample = rng.gen_normal(mean, stdev).round();
            let card = if sample < 1.0 {
                1
            } else if sample > f64::from(budget) {
                budget
            } else {
                sample as Power
            };

            cards.push(card);
            budget -= card - 1;
        }

        if let Some(last) = cards.last_mut() {
            *last += budget - 1;
        }

        cards
    }

    /// Draw the top card.
    ///
    /// Panics if the deck is empty; callers check `is_empty` first or use
    /// `try_draw`.
    pub fn draw(&mut self) -> Power {
        self.try_draw().expect("draw from an empty deck")
    }

    /// Draw the top card, or `None` if the deck is empty.
    pub fn try_draw(&mut self) -> Option<Power> {
        let card = self.cards.pop_back()?;
        self.histogram[card as usize - 1] -= 1;
        Some(card)
    }

    /// Remove every card of the given power, returning how many were removed.
    pub fn remove_all(&mut self, power: Power) -> usize {
        if power == 0 || power > self.max_card_power() {
            return 0;
        }

        let removed = self.histogram[power as usize - 1] as usize;
        if removed > 0 {
            self.cards.retain(|&card| card != power);
            self.histogram[power as usize - 1] = 0;
        }
        removed
    }

    /// Histogram normalized by the number of remaining cards.
    ///
    /// All zeros when the deck is empty.
    #[must_use]
    pub fn features(&self) -> Vec<f32> {
        let size = self.size();
        if size == 0 {
            return vec![0.0; self.histogram.len()];
        }
        self.histogram
            .iter()
            .map(|&count| count as f32 / size as f32)
            .collect()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the remaining cards' powers.
    #[must_use]
    pub fn total_power(&self) -> Power {
        self.cards.iter().sum()
    }

    /// Number of remaining cards of the given power.
    #[must_use]
    pub fn count(&self, power: Power) -> u32 {
        match power {
            0 => 0,
            p if p > self.max_card_power() => 0,
            p => self.histogram[p as usize - 1],
        }
    }

    /// Raw power histogram (index `p - 1` counts power `p`).
    #[must_use]
    pub fn histogram(&self) -> &[u32] {
        &self.histogram
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> impl Iterator<Item = Power> + '_ {
        self.cards.iter().copied()
    }

    /// Total power of a freshly generated deck.
    #[must_use]
    pub fn max_deck_power(&self) -> Power {
        self.max_deck_power
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards: Vec<_> = self.cards().collect();
        write!(f, "{cards:?}")
    }
}
