mod common;

use common::board;
use tacpuzzle::round::Silent;
use tacpuzzle::{
    Card, Choice, Deal, ExecuteResult, ForcedSwap, OptionResolver, Piece, Prompt, Round, RoundEvent,
    RoundObserver, SolveStep,
};

#[derive(Default)]
struct Tally {
    wins: u32,
    strikes: Vec<String>,
}

impl RoundObserver for Tally {
    fn on_won(&mut self) {
        self.wins += 1;
    }
    fn on_strike(&mut self, reason: &str) {
        self.strikes.push(reason.to_string());
    }
}

fn run_home_deal(forced_swap: Option<ForcedSwap>) -> Deal {
    let last = if forced_swap.is_some() { 2 } else { 1 };
    Deal {
        hand: [Card::number(2), Card::number(3), Card::number(5), Card::number(1), Card::number(last)],
        board: board(0, 20, 16, Some(10), Some(12)),
        forced_swap,
    }
}

/// Feed one solver step through the round, answering whatever it asks.
fn play_step(round: &mut Round, step: &SolveStep, obs: &mut dyn RoundObserver) -> RoundEvent {
    let mut event = round.select_card(step.slot, obs).unwrap();
    while let RoundEvent::Pending(choice) = event {
        event = match choice {
            Choice::Swap => {
                let (a, b) = step.decisions.swap.unwrap();
                round.answer_swap(a, b, obs).unwrap()
            }
            Choice::Discard => round.answer(step.decisions.discard.unwrap(), obs).unwrap(),
            Choice::EnterHome | Choice::EnterHomeBackwards => {
                round.answer(step.decisions.enter_home.unwrap(), obs).unwrap()
            }
        };
    }
    event
}

#[test]
fn resolver_asks_then_executes() {
    let b = board(0, 0, 16, Some(8), Some(24));
    let mut r = OptionResolver::new();
    assert_eq!(r.select_card(2, Card::Trickster, &b).unwrap(), Prompt::Pending(Choice::Swap));
    assert_eq!(r.pending(), Some((2, Card::Trickster, Choice::Swap)));
    assert!(r.select_card(0, Card::Warrior, &b).is_err(), "one card at a time");
    assert!(r.answer(true).is_err(), "a swap is not yes/no");

    match r.answer_swap(0, 1).unwrap() {
        Prompt::Resolved { slot, decisions, result } => {
            assert_eq!(slot, 2);
            assert_eq!(decisions.swap, Some((0, 1)));
            assert_eq!(result.state().map(|s| s.get(Piece::Player)), Some(b.get(Piece::EnemyA)));
        }
        other => panic!("expected resolution, got {other:?}"),
    }
    assert!(r.is_idle());
}

#[test]
fn resolver_chains_discard_then_entry() {
    let b = board(0, 24, 16, None, None);
    let mut r = OptionResolver::new();
    assert_eq!(r.select_card(0, Card::discardable(8), &b).unwrap(), Prompt::Pending(Choice::Discard));
    assert_eq!(r.answer(false).unwrap(), Prompt::Pending(Choice::EnterHome));
    assert!(r.answer_swap(0, 1).is_err());
    let Prompt::Resolved { result, .. } = r.answer(true).unwrap() else {
        panic!("should resolve after the entry question");
    };
    assert!(result.state().unwrap().is_player_home());
}

#[test]
fn resolver_resolves_warrior_immediately_and_cancels() {
    let b = board(0, 2, 9, Some(5), None);
    let mut r = OptionResolver::new();
    assert!(matches!(r.select_card(1, Card::Warrior, &b).unwrap(), Prompt::Resolved { slot: 1, .. }));
    assert!(r.answer(true).is_err(), "nothing pending");

    r.select_card(0, Card::Trickster, &b).unwrap();
    r.cancel();
    assert!(r.is_idle());
}

#[test]
fn resolver_reports_strikes() {
    let b = board(0, 14, 16, None, None);
    let mut r = OptionResolver::new();
    let Prompt::Resolved { result, .. } = r.select_card(0, Card::number(2), &b).unwrap() else {
        panic!("number 2 has nothing to ask here");
    };
    assert_eq!(result, ExecuteResult::strike("would capture your partner"));
}

#[test]
fn round_is_won_by_playing_the_hand_out() {
    let mut round = Round::new(run_home_deal(None));
    let mut obs = Tally::default();
    assert!(!round.swap_required());
    for slot in 0..4 {
        let ev = round.select_card(slot, &mut obs).unwrap();
        assert_eq!(ev, RoundEvent::Played { slot, changed: vec![Piece::Player] });
    }
    assert_eq!(round.select_card(4, &mut obs).unwrap(), RoundEvent::Pending(Choice::EnterHome));
    assert_eq!(round.answer(true, &mut obs).unwrap(), RoundEvent::Won);
    assert!(round.is_solved());
    assert_eq!(obs.wins, 1);
    assert!(obs.strikes.is_empty());
    assert!(round.select_card(0, &mut obs).is_err());
}

#[test]
fn running_out_of_cards_strikes_and_resets() {
    let deal = run_home_deal(None);
    let mut round = Round::new(deal);
    let mut obs = Tally::default();
    for slot in 0..4 {
        round.select_card(slot, &mut obs).unwrap();
    }
    round.select_card(4, &mut obs).unwrap();
    let ev = round.answer(false, &mut obs).unwrap();
    assert_eq!(ev, RoundEvent::Struck("ran out of cards before reaching home".to_string()));
    assert_eq!(round.board(), &deal.board);
    assert_eq!(round.hand().len(), 5);
    assert_eq!(obs.strikes.len(), 1);
}

#[test]
fn entering_home_early_strikes() {
    let deal = Deal {
        hand: [Card::number(1), Card::number(2), Card::number(3), Card::number(5), Card::number(6)],
        board: board(0, 31, 16, Some(10), Some(12)),
        forced_swap: None,
    };
    let mut round = Round::new(deal);
    let mut obs = Tally::default();
    assert_eq!(round.select_card(0, &mut obs).unwrap(), RoundEvent::Pending(Choice::EnterHome));
    assert_eq!(
        round.answer(true, &mut obs).unwrap(),
        RoundEvent::Struck("entered home with cards left to play".to_string())
    );
    assert_eq!(round.board(), &deal.board);
}

#[test]
fn illegal_card_strikes_and_resets() {
    let deal = Deal {
        hand: [Card::number(3), Card::number(2), Card::number(3), Card::number(5), Card::number(6)],
        board: board(0, 11, 16, Some(10), Some(20)),
        forced_swap: None,
    };
    let mut round = Round::new(deal);
    let mut obs = Tally::default();
    assert!(matches!(round.select_card(1, &mut obs).unwrap(), RoundEvent::Played { .. }));
    assert_eq!(round.hand().len(), 4);
    // 13 + 3 lands on the partner.
    let ev = round.select_card(0, &mut obs).unwrap();
    assert_eq!(ev, RoundEvent::Struck("would capture your partner".to_string()));
    assert_eq!(round.hand().len(), 5);
    assert_eq!(round.board(), &deal.board);
}

#[test]
fn forced_swap_must_come_first_and_match() {
    let fs = ForcedSwap { slot: 4, card: Card::number(1) };
    let deal = run_home_deal(Some(fs));
    let mut round = Round::new(deal);
    let mut obs = Tally::default();
    assert!(round.swap_required());
    assert!(round.auto_solve().is_none());

    assert_eq!(
        round.select_card(0, &mut obs).unwrap(),
        RoundEvent::Struck("played 2 before swapping a card".to_string())
    );
    assert_eq!(
        round.swap_card(3, &mut obs),
        RoundEvent::Struck("swapped the wrong card (slot 3 instead of 4)".to_string())
    );
    assert!(round.swap_required(), "a strike restores the owed swap");

    assert_eq!(round.swap_card(4, &mut obs), RoundEvent::Swapped { slot: 4 });
    assert!(!round.swap_required());
    assert_eq!(round.hand().get(4), Some(Card::number(1)));

    let plan = round.auto_solve().expect("repaired hand solves");
    let mut last = None;
    for step in &plan {
        last = Some(play_step(&mut round, step, &mut obs));
    }
    assert_eq!(last, Some(RoundEvent::Won));
    assert_eq!(obs.strikes.len(), 2);
}

#[test]
fn swapping_without_a_debt_strikes() {
    let mut round = Round::new(run_home_deal(None));
    let ev = round.swap_card(0, &mut Silent);
    assert_eq!(ev, RoundEvent::Struck("no card needed swapping".to_string()));
}

#[test]
fn auto_solve_plays_through_a_trickster_deal() {
    let deal = Deal {
        hand: [Card::Trickster, Card::number(2), Card::number(3), Card::number(1), Card::number(4)],
        board: board(0, 5, 16, Some(22), Some(9)),
        forced_swap: None,
    };
    let mut round = Round::new(deal);
    let plan = round.auto_solve().expect("solvable");
    let mut obs = Tally::default();
    let events: Vec<RoundEvent> = plan.iter().map(|s| play_step(&mut round, s, &mut obs)).collect();
    assert_eq!(events.last(), Some(&RoundEvent::Won));
    assert!(obs.strikes.is_empty());
}
