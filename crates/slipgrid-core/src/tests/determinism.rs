//! Determinism tests: the same seed must reproduce deals and whole
//! play-throughs exactly.

use super::helpers::{shuffled_4x4, TopDrawRng};
use crate::grid::{GridPos, GridState};
use crate::session::PuzzleSession;

#[test]
fn same_seed_same_deal() {
    assert_eq!(shuffled_4x4(42), shuffled_4x4(42));
    assert_eq!(shuffled_4x4(0), shuffled_4x4(0));
}

#[test]
fn shuffle_draws_once_per_index_with_shrinking_bounds() {
    // A source scripted to land every draw on its own inclusive bound
    // turns the Fisher-Yates pass into a no-op: index i swaps with itself.
    // Deviating from the 15, 14, .., 1 bound schedule either overruns the
    // script or breaks the identity, and drawing a 16th time panics.
    let mut rng = TopDrawRng::for_shuffle(4);
    let mut grid = GridState::new_solved(4).unwrap();
    grid.shuffle(&mut rng);

    assert_eq!(rng.draws(), 15);
    assert!(rng.is_exhausted());
    assert!(grid.is_solved());
}

#[test]
fn shuffle_draw_count_scales_with_the_edge() {
    for edge in [2, 3, 5] {
        let mut rng = TopDrawRng::for_shuffle(edge);
        let mut grid = GridState::new_solved(edge).unwrap();
        grid.shuffle(&mut rng);
        assert_eq!(rng.draws(), edge * edge - 1);
        assert!(grid.is_solved());
    }
}

#[test]
fn different_seeds_produce_different_deals() {
    assert_ne!(shuffled_4x4(1), shuffled_4x4(2));
}

#[test]
fn sessions_with_the_same_seed_replay_identically() {
    fn play(seed: u64) -> (Vec<Option<usize>>, PuzzleSession) {
        let mut session = PuzzleSession::new(4, seed).unwrap();
        let mut outcomes = Vec::new();
        // A fixed selection script; which selections move depends only on
        // the deal, which depends only on the seed.
        for (x, y) in [(0, 0), (1, 2), (3, 1), (2, 2), (0, 3), (3, 3), (1, 1)] {
            let applied = session.select(GridPos::new(x, y)).unwrap();
            outcomes.push(applied.map(|a| a.steps.len()));
        }
        (outcomes, session)
    }

    let (outcomes_a, session_a) = play(1234);
    let (outcomes_b, session_b) = play(1234);

    assert_eq!(outcomes_a, outcomes_b);
    assert_eq!(session_a.grid(), session_b.grid());
    assert_eq!(session_a.moves_taken(), session_b.moves_taken());
}

#[test]
fn reshuffles_continue_the_stream_deterministically() {
    let mut a = PuzzleSession::new(4, 7).unwrap();
    let mut b = PuzzleSession::new(4, 7).unwrap();

    a.reshuffle().unwrap();
    b.reshuffle().unwrap();
    assert_eq!(a.grid(), b.grid());

    // And the second re-deal differs from the first with overwhelming odds.
    let first = a.grid().clone();
    a.reshuffle().unwrap();
    assert_ne!(*a.grid(), first);
}
