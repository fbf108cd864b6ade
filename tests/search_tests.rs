//! Minimax search integration tests on GwentLite.

use gwent_lite::core::{Action, PlayerId, PlayerMap};
use gwent_lite::games::gwent::{GameSnapshot, GwentLite, GwentLiteBuilder};
use gwent_lite::search::{MinimaxSearch, SearchConfig};

const P0: PlayerId = PlayerId::ZERO;

fn search(depth: u32, pruning: bool) -> MinimaxSearch {
    MinimaxSearch::new(SearchConfig::default().with_depth(depth).with_pruning(pruning)).unwrap()
}

/// Deciding round of a 1-1 game: P1 has passed on `p1_points`, P0 holds
/// `hand` on zero points.
fn last_round(hand: Vec<u32>, p1_points: u32) -> GwentLite {
    let game = GwentLiteBuilder::new().seed(11).build().unwrap();
    let mut snapshot: GameSnapshot = game.snapshot();
    snapshot.round = 3;
    snapshot.round_wins = PlayerMap::from_pair(1, 1);
    snapshot.points = PlayerMap::from_pair(0, p1_points);
    snapshot.hands[P0] = hand;
    snapshot.active = vec![P0];
    snapshot.cursor = 0;
    GwentLite::from_snapshot(snapshot).unwrap()
}

/// A few positions from different stages of play.
fn positions() -> Vec<GwentLite> {
    let mut out = Vec::new();
    for seed in 0..3 {
        let mut game = GwentLiteBuilder::new().seed(seed).build().unwrap();
        out.push(game.clone());
        for step in 0..7 {
            game.act_index(step % 3 + 1);
        }
        if game.check_game_over().is_none() {
            out.push(game);
        }
    }
    out
}

// =============================================================================
// Correctness
// =============================================================================

#[test]
fn test_plays_the_winning_card() {
    let game = last_round(vec![5], 3);
    assert_eq!(game.legal_actions(), vec![Action::Pass, Action::Play(0)]);

    for depth in 1..=4 {
        let result = search(depth, true).search(&game);
        assert_eq!(result.action, Action::Play(0), "depth {depth}");
        assert_eq!(result.score, 100_000);
    }
}

#[test]
fn test_keeps_maximizing_while_opponent_sits_out() {
    // Three plays in a row are needed to beat 5; the opponent never moves.
    let game = last_round(vec![2, 2, 2], 5);

    let result = search(3, true).search(&game);
    assert_eq!(result.action, Action::Play(0));
    assert_eq!(result.score, 100_000);

    // Not deep enough to see the end: the heuristic still prefers playing.
    let shallow = search(1, true).search(&game);
    assert_eq!(shallow.action, Action::Play(0));
}

#[test]
fn test_lost_position_defaults_to_pass() {
    let game = last_round(vec![1], 5);
    let result = search(2, true).search(&game);

    assert_eq!(result.action, Action::Pass);
    assert_eq!(result.score, -100_000);
}

// =============================================================================
// Determinism and isolation
// =============================================================================

#[test]
fn test_search_is_deterministic() {
    for game in positions() {
        let mut a = search(3, true);
        let mut b = search(3, true);

        let first = a.search(&game);
        assert_eq!(first, a.search(&game));
        assert_eq!(first, b.search(&game));
        assert_eq!(a.expanded_nodes(), b.expanded_nodes());
    }
}

#[test]
fn test_same_seed_same_decision() {
    let g1 = GwentLiteBuilder::new().seed(44).build().unwrap();
    let g2 = GwentLiteBuilder::new().seed(44).build().unwrap();

    assert_eq!(search(3, true).decide(&g1), search(3, true).decide(&g2));
}

#[test]
fn test_live_game_untouched() {
    let game = GwentLiteBuilder::new().seed(2).build().unwrap();
    let before = game.snapshot();

    search(3, true).decide(&game);

    assert_eq!(game.snapshot(), before);
}

// =============================================================================
// Pruning
// =============================================================================

#[test]
fn test_pruning_equivalence() {
    for game in positions() {
        for depth in 1..=3 {
            let mut pruned = search(depth, true);
            let mut full = search(depth, false);

            assert_eq!(pruned.search(&game), full.search(&game), "depth {depth}\n{game}");
            assert!(pruned.expanded_nodes() <= full.expanded_nodes());
        }
    }
}

#[test]
fn test_pruning_cuts_nodes() {
    let game = GwentLiteBuilder::new().seed(1).build().unwrap();
    let mut pruned = search(3, true);
    let mut full = search(3, false);

    pruned.search(&game);
    full.search(&game);

    assert!(pruned.stats().cutoffs > 0);
    assert!(pruned.expanded_nodes() < full.expanded_nodes());
    assert_eq!(full.stats().cutoffs, 0);
}

#[test]
fn test_node_count_at_depth_one() {
    let game = GwentLiteBuilder::new().seed(1).build().unwrap();
    let mut s = search(1, true);
    s.search(&game);

    // One evaluated child per legal root action.
    assert_eq!(s.expanded_nodes(), 11);
    assert_eq!(s.stats().evaluations, 11);
}
