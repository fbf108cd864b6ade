//! Randomized invariants of decks and the game state machine.

use gwent_lite::core::{GameRng, PlayerId};
use gwent_lite::games::gwent::{GwentLite, GwentLiteBuilder};
use gwent_lite::rules::RulesEngine;
use gwent_lite::zones::{Deck, DeckSource};
use proptest::prelude::*;

fn histogram_matches(deck: &Deck) -> bool {
    let mut expected = vec![0u32; deck.histogram().len()];
    for card in deck.cards() {
        expected[card as usize - 1] += 1;
    }
    expected == deck.histogram()
}

fn check_invariants(game: &GwentLite) -> Result<(), TestCaseError> {
    let limit = game.config().hand_limit;

    for player in PlayerId::all() {
        let deck = game.deck(player);
        let hand = game.hand(player);

        prop_assert!(histogram_matches(deck));
        prop_assert!(hand.len() <= limit);
        // Every card not yet played is either in hand or in the deck.
        prop_assert_eq!(game.unplayed_cards(player), hand.len() + deck.size());
        prop_assert_eq!(
            game.remaining_power(player),
            hand.total_power() + deck.total_power()
        );
    }

    let active = game.active_players();
    prop_assert!(!active.is_empty() && active.len() <= 2);
    prop_assert!(active.len() < 2 || active[0] != active[1]);

    if !game.is_over() {
        prop_assert!((1..=3).contains(&game.round()));
        prop_assert!(game.is_active(game.current_mover()));
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_generated_deck_budget(seed in any::<u64>(), stdev in 0u32..=7) {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::new(25, 100);
        deck.reset(DeckSource::Generated { mean: 4.0, stdev: f64::from(stdev) }, &mut rng);

        prop_assert_eq!(deck.size(), 25);
        prop_assert_eq!(deck.total_power(), 100);
        prop_assert!(deck.cards().all(|c| (1..=76).contains(&c)));
        prop_assert!(histogram_matches(&deck));
    }

    #[test]
    fn test_state_machine_invariants(
        seed in any::<u64>(),
        actions in prop::collection::vec(0usize..12, 0..120),
    ) {
        let mut game = GwentLiteBuilder::new().seed(seed).build().unwrap();
        check_invariants(&game)?;

        for index in actions {
            if game.is_over() {
                break;
            }
            let before = game.round_wins(PlayerId::ZERO) + game.round_wins(PlayerId::ONE);
            game.act_index(index);
            check_invariants(&game)?;

            let after = game.round_wins(PlayerId::ZERO) + game.round_wins(PlayerId::ONE);
            prop_assert!(after >= before && after <= before + 2);
        }
    }

    #[test]
    fn test_every_game_terminates(seed in any::<u64>(), policy in any::<u64>()) {
        let mut game = GwentLiteBuilder::new().seed(seed).build().unwrap();
        let mut rng = GameRng::new(policy);

        let mut turns = 0;
        while !game.is_over() {
            let hand = game.hand(game.current_mover()).len();
            game.act_index(rng.gen_range_usize(0..hand + 2));
            turns += 1;
            prop_assert!(turns <= 100);
        }

        let wins = [game.round_wins(PlayerId::ZERO), game.round_wins(PlayerId::ONE)];
        prop_assert!(wins.iter().any(|&w| w >= 2));
    }

    #[test]
    fn test_clone_isolation(seed in any::<u64>(), index in 0usize..11) {
        let game = GwentLiteBuilder::new().seed(seed).build().unwrap();
        let before = game.snapshot();

        let mut copy = game.clone();
        copy.act_index(index);
        copy.act_index(index);

        prop_assert_eq!(game.snapshot(), before);
    }
}
