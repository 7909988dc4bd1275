mod common;

use common::board;
use tacpuzzle::solver::{exists, solve};
use tacpuzzle::{Card, Hand, Solver};

fn twelve_to_home() -> Hand {
    Hand::new([Card::number(2), Card::number(3), Card::number(5), Card::number(1), Card::number(1)])
}

#[test]
fn finds_the_straight_run_home() {
    let b = board(0, 20, 16, Some(10), Some(12));
    let steps = solve(&b, &twelve_to_home()).expect("solvable");
    assert_eq!(steps.iter().map(|s| s.slot).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    let last = steps.last().unwrap();
    assert_eq!(last.decisions.enter_home, Some(true));
    assert!(last.state.is_player_home());
}

#[test]
fn wrong_total_has_no_solution() {
    let b = board(0, 20, 16, Some(10), Some(12));
    let hand = Hand::new([Card::number(2), Card::number(3), Card::number(5), Card::number(1), Card::number(2)]);
    assert!(!exists(&b, &hand));
    assert!(solve(&b, &hand).is_none());
}

#[test]
fn solution_is_deterministic() {
    let b = board(1, 3, 27, Some(12), Some(30));
    let hand = Hand::new([Card::discardable(8), Card::Trickster, Card::number(2), Card::Warrior, Card::number(3)]);
    let mut solver = Solver::new();
    let first = solver.solve(&b, &hand);
    let second = solver.solve(&b, &hand);
    assert_eq!(first, second);
    assert_eq!(first, Solver::new().solve(&b, &hand));
}

#[test]
fn going_home_early_is_pruned() {
    // Playing the 12 first reaches home with the 8 still in hand; the
    // solver must discard the 8 first instead.
    let b = board(0, 20, 16, Some(10), Some(12));
    let hand = Hand::from_slots([Some(Card::number(12)), Some(Card::discardable(8)), None, None, None]);
    let steps = solve(&b, &hand).expect("solvable");
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].slot, 1);
    assert_eq!(steps[0].decisions.discard, Some(true));
    assert_eq!(steps[1].slot, 0);
    assert_eq!(steps[1].decisions.enter_home, Some(true));
}

#[test]
fn solution_records_trickster_swap() {
    let b = board(0, 5, 16, Some(31), Some(20));
    let hand = Hand::from_slots([Some(Card::Trickster), Some(Card::number(1)), None, None, None]);
    let steps = solve(&b, &hand).expect("solvable");
    assert_eq!(steps[0].card, Card::Trickster);
    assert_eq!(steps[0].decisions.swap, Some((0, 1)));
    assert!(steps[1].state.is_player_home());
}

#[test]
fn empty_hand_solves_only_at_home() {
    let empty = Hand::from_slots([None; 5]);
    assert!(exists(&common::home_board(0, 16, None, None), &empty));
    assert!(!exists(&board(0, 20, 16, None, None), &empty));
}

#[test]
fn dead_table_is_consulted() {
    let b = board(0, 20, 16, Some(10), Some(12));
    let hand = Hand::new([Card::number(2), Card::number(3), Card::number(5), Card::number(1), Card::number(2)]);
    let mut solver = Solver::new();
    assert!(!solver.exists(&b, &hand));
    let stats = solver.dead_stats();
    assert!(stats.inserts > 0);
    assert!(stats.hits > 0, "{stats:?}");
    assert!(solver.nodes() > 0);
}
