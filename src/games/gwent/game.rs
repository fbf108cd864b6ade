//! GwentLite engine.

use im::Vector;
use log::{debug, trace};
use smallvec::{smallvec, SmallVec};

use crate::cards::{Ability, Power};
use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameRng, PlayerId, PlayerMap,
};
use crate::rules::{GameResult, RulesEngine};
use crate::zones::{Deck, DeckSource, Hand};

/// Full GwentLite game state.
///
/// Cloning is cheap (decks share structure through `im`) and fully
/// isolated: mutating a clone never affects the original.
#[derive(Clone, Debug)]
pub struct GwentLite {
    pub(super) config: GameConfig,
    pub(super) decks: PlayerMap<Deck>,
    pub(super) hands: PlayerMap<Hand>,

    /// Cards neither played nor mustered (deck + hand).
    pub(super) unplayed: PlayerMap<usize>,

    /// Points scored this round.
    pub(super) points: PlayerMap<Power>,

    pub(super) round_wins: PlayerMap<u32>,

    /// Power of the cards neither played nor mustered.
    pub(super) remaining_power: PlayerMap<Power>,

    /// 1-based round number; 0 before the first reset.
    pub(super) round: u32,

    /// Players still in the current round, in seat order.
    pub(super) active: SmallVec<[PlayerId; 2]>,

    /// Index into `active` of the current mover.
    pub(super) cursor: usize,

    /// Who moved first in round one; decides who opens after a tied round.
    pub(super) round_one_first: PlayerId,

    pub(super) history: Vector<ActionRecord>,
    pub(super) sequence: u32,
    pub(super) rng: GameRng,
}

impl GwentLite {
    /// Create an engine in its initial state. Call `reset` before playing.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let deck = Deck::new(config.min_deck_size, config.max_deck_power);
        Ok(Self {
            decks: PlayerMap::with_value(deck),
            hands: PlayerMap::default(),
            unplayed: PlayerMap::default(),
            points: PlayerMap::default(),
            round_wins: PlayerMap::default(),
            remaining_power: PlayerMap::default(),
            round: 0,
            active: SmallVec::new(),
            cursor: 0,
            round_one_first: PlayerId::ZERO,
            history: Vector::new(),
            sequence: 0,
            rng: GameRng::new(seed),
            config,
        })
    }

    /// Start a new game with freshly generated decks.
    pub fn reset(&mut self) {
        self.start(PlayerMap::with_value(None));
    }

    /// Start a new game, using explicit deck compositions where given and
    /// generated decks elsewhere.
    ///
    /// The last card of an explicit composition is the top of the deck.
    /// Nothing is changed if a composition is rejected.
    pub fn reset_with(&mut self, decks: PlayerMap<Option<Vec<Power>>>) -> Result<(), ConfigError> {
        for (player, deck) in decks.iter() {
            if let Some(cards) = deck {
                self.validate_deck(player, cards)?;
            }
        }
        self.start(decks);
        Ok(())
    }

    fn validate_deck(&self, player: PlayerId, cards: &[Power]) -> Result<(), ConfigError> {
        let hand_limit = self.config.hand_limit;
        if cards.len() < hand_limit {
            return Err(ConfigError::InvalidDeck {
                player,
                reason: format!("{} cards cannot fill an opening hand of {hand_limit}", cards.len()),
            });
        }

        let max_card_power = self.config.max_card_power();
        if let Some(&card) = cards.iter().find(|&&c| c == 0 || c > max_card_power) {
            return Err(ConfigError::InvalidDeck {
                player,
                reason: format!("card power {card} outside 1..={max_card_power}"),
            });
        }
        Ok(())
    }

    fn start(&mut self, decks: PlayerMap<Option<Vec<Power>>>) {
        let mean = self.config.generation_mean();
        let max_stdev = self.config.max_generation_stdev();

        for (player, composition) in decks.iter() {
            let source = match composition {
                Some(cards) => DeckSource::Explicit(cards.clone()),
                None => DeckSource::Generated {
                    mean,
                    stdev: f64::from(self.rng.gen_range_inclusive(0..=max_stdev)),
                },
            };
            let mut deck_rng = self.rng.fork();
            self.decks[player].reset(source, &mut deck_rng);

            self.unplayed[player] = self.decks[player].size();
            self.remaining_power[player] = self.decks[player].total_power();

            self.hands[player].clear();
            for _ in 0..self.config.hand_limit {
                let card = self.decks[player].draw();
                self.hands[player].push(card);
            }

            self.points[player] = 0;
            self.round_wins[player] = 0;
        }

        self.round = 1;
        self.active = smallvec![PlayerId::ZERO, PlayerId::ONE];
        self.cursor = self.rng.gen_range_usize(0..2);
        self.round_one_first = self.current_mover();
        self.history = Vector::new();
        self.sequence = 0;

        debug!(
            "new game: {} opens, deck power {}/{}",
            self.round_one_first, self.remaining_power[PlayerId::ZERO], self.remaining_power[PlayerId::ONE]
        );
    }

    /// The player whose action is expected next.
    ///
    /// Panics if no player is active, which only happens before the first
    /// reset.
    #[must_use]
    pub fn current_mover(&self) -> PlayerId {
        self.try_current_mover()
            .expect("current mover requested with no active players")
    }

    /// The player whose action is expected next, or `None` before the first
    /// reset.
    #[must_use]
    pub fn try_current_mover(&self) -> Option<PlayerId> {
        self.active.get(self.cursor).copied()
    }

    /// Apply an action for the current mover.
    ///
    /// A play whose slot is past the end of the mover's hand is treated as
    /// a pass. Always returns `true`.
    pub fn act(&mut self, action: Action) -> bool {
        let mover = self.current_mover();
        let action = action.normalized(self.hands[mover].len());

        let played = match action {
            Action::Play(slot) => self.hands[mover].take(slot),
            Action::Pass => None,
        };
        self.record(mover, action, played);

        match played {
            None => self.leave_round(),
            Some(card) => {
                self.resolve(mover, card);
                if self.hands[mover].is_empty() {
                    self.leave_round();
                } else {
                    self.advance();
                }
            }
        }
        true
    }

    /// Apply a raw action index (`0` = pass, `i` = hand slot `i - 1`).
    pub fn act_index(&mut self, index: usize) -> bool {
        let hand_size = self.hands[self.current_mover()].len();
        self.act(Action::from_index(index, hand_size))
    }

    fn record(&mut self, player: PlayerId, action: Action, card: Option<Power>) {
        trace!("round {}: {player} {action} (card {card:?})", self.round);

        self.history.push_back(ActionRecord {
            player,
            action,
            card,
            round: self.round,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Score a played card and apply its ability.
    fn resolve(&mut self, mover: PlayerId, card: Power) {
        let opponent = mover.opponent();

        match Ability::of(card, &self.config.specials) {
            Ability::Spy => {
                self.points[opponent] += card;
                if let Some(drawn) = self.decks[mover].try_draw() {
                    self.hands[mover].push(drawn);
                }
            }
            Ability::Scorch => {
                self.points[mover] += card;
                let damage = self.points[opponent].min(self.config.scorch_damage);
                self.points[opponent] -= damage;
            }
            Ability::Muster => {
                self.points[mover] += card;
                let pulled = self.decks[mover].remove_all(card);
                let pulled_power = pulled as Power * card;
                self.points[mover] += pulled_power;
                self.unplayed[mover] -= pulled;
                self.remaining_power[mover] -= pulled_power;
            }
            Ability::None => {
                self.points[mover] += card;
            }
        }

        self.unplayed[mover] -= 1;
        self.remaining_power[mover] -= card;
    }

    /// Hand the turn to the next active player.
    fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.active.len();
    }

    /// Remove the mover from the round; end the round if nobody is left.
    fn leave_round(&mut self) {
        self.active.remove(self.cursor);
        if self.active.is_empty() {
            self.next_round();
        } else {
            self.cursor = (self.cursor + 1) % self.active.len();
        }
    }

    /// Credit the round, pick the next opener, and refill hands.
    fn next_round(&mut self) {
        let (p0, p1) = (self.points[PlayerId::ZERO], self.points[PlayerId::ONE]);

        let opener = if p0 == p1 {
            self.round_wins[PlayerId::ZERO] += 1;
            self.round_wins[PlayerId::ONE] += 1;
            self.round_one_first.opponent()
        } else {
            let winner = if p0 > p1 { PlayerId::ZERO } else { PlayerId::ONE };
            self.round_wins[winner] += 1;
            winner
        };

        debug!(
            "round {} ends {p0}-{p1}; round wins {}-{}, {opener} opens round {}",
            self.round,
            self.round_wins[PlayerId::ZERO],
            self.round_wins[PlayerId::ONE],
            self.round + 1
        );

        self.round += 1;
        self.active = smallvec![PlayerId::ZERO, PlayerId::ONE];
        self.cursor = opener.index();

        for player in PlayerId::all() {
            self.points[player] = 0;

            let room = self.config.hand_limit.saturating_sub(self.hands[player].len());
            for _ in 0..room.min(self.config.round_draw) {
                match self.decks[player].try_draw() {
                    Some(card) => self.hands[player].push(card),
                    None => break,
                }
            }
        }
    }

    /// Check if the game is over.
    ///
    /// A player who reaches the round-win target alone wins; reaching it
    /// together (only possible through a tied round) is a tie.
    #[must_use]
    pub fn check_game_over(&self) -> Option<GameResult> {
        let target = self.config.rounds_to_win;
        let done = self.round_wins.map(|_, &wins| wins >= target);

        match (done[PlayerId::ZERO], done[PlayerId::ONE]) {
            (false, false) => None,
            (true, false) => Some(GameResult::Winner(PlayerId::ZERO)),
            (false, true) => Some(GameResult::Winner(PlayerId::ONE)),
            (true, true) => Some(GameResult::Tie),
        }
    }

    /// Every legal action for the current mover: pass, then each hand slot.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        Action::all(self.hands[self.current_mover()].len()).collect()
    }

    // === Accessors ===

    /// The rule constants.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Length of the vector returned by `observe`.
    #[must_use]
    pub fn observation_size(&self) -> usize {
        self.config.observation_size()
    }

    /// Number of distinct action indices.
    #[must_use]
    pub fn action_space_size(&self) -> usize {
        self.config.action_space_size()
    }

    /// Current round (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// A player's draw pile.
    #[must_use]
    pub fn deck(&self, player: PlayerId) -> &Deck {
        &self.decks[player]
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Points scored by a player this round.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> Power {
        self.points[player]
    }

    /// Rounds won (tied rounds count for both players).
    #[must_use]
    pub fn round_wins(&self, player: PlayerId) -> u32 {
        self.round_wins[player]
    }

    /// Cards neither played nor mustered, in deck or hand.
    #[must_use]
    pub fn unplayed_cards(&self, player: PlayerId) -> usize {
        self.unplayed[player]
    }

    /// Power of the cards neither played nor mustered.
    #[must_use]
    pub fn remaining_power(&self, player: PlayerId) -> Power {
        self.remaining_power[player]
    }

    /// Average power per unplayed card, or 0 when none are left.
    #[must_use]
    pub fn average_remaining_power(&self, player: PlayerId) -> f64 {
        match self.unplayed[player] {
            0 => 0.0,
            n => f64::from(self.remaining_power[player]) / n as f64,
        }
    }

    /// Players still in the current round.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    /// Check if a player is still in the current round.
    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active.contains(&player)
    }

    /// Who moved first in round one.
    #[must_use]
    pub fn round_one_first_player(&self) -> PlayerId {
        self.round_one_first
    }

    /// Every action applied since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}

impl RulesEngine for GwentLite {
    fn current_mover(&self) -> PlayerId {
        GwentLite::current_mover(self)
    }

    fn legal_actions(&self) -> Vec<Action> {
        GwentLite::legal_actions(self)
    }

    fn apply_action(&mut self, action: Action) -> bool {
        self.act(action)
    }

    fn check_game_over(&self) -> Option<GameResult> {
        GwentLite::check_game_over(self)
    }
}

impl std::fmt::Display for GwentLite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Round {}", self.round)?;
        for player in PlayerId::all() {
            writeln!(
                f,
                "{player}: points {} | round wins {} | hand {:?} | deck {} | remaining power {}",
                self.points[player],
                self.round_wins[player],
                self.hands[player].cards(),
                self.decks[player].size(),
                self.remaining_power[player],
            )?;
        }
        match self.try_current_mover() {
            Some(mover) => write!(f, "To move: {mover}"),
            None => write!(f, "To move: nobody"),
        }
    }
}

/// Builder for creating a ready-to-play `GwentLite`.
///
/// ```
/// use gwent_lite::games::gwent::GwentLiteBuilder;
///
/// let game = GwentLiteBuilder::new().seed(7).build().unwrap();
/// assert_eq!(game.round(), 1);
/// assert_eq!(game.active_players().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GwentLiteBuilder {
    config: GameConfig,
    seed: u64,
    decks: PlayerMap<Option<Vec<Power>>>,
}

impl GwentLiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use these rule constants.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the engine's RNG.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Give a player an explicit deck (last card on top).
    pub fn deck(mut self, player: PlayerId, cards: Vec<Power>) -> Self {
        self.decks[player] = Some(cards);
        self
    }

    /// Build the engine and deal the opening hands.
    pub fn build(self) -> Result<GwentLite, ConfigError> {
        let mut game = GwentLite::new(self.config, self.seed)?;
        game.reset_with(self.decks)?;
        Ok(game)
    }
}
