use crate::board::BoardState;
use crate::cards::Card;
use crate::engine::apply::swap_pairs;
use crate::types::{Cell, Dir, Piece, Position, TRACK_LEN};

/// Are the `steps` cells walking back from `to` (exclusive) all empty?
/// Covers every cell crossed plus the cell the move started from.
#[inline]
fn clear_behind(state: &BoardState, to: Cell, steps: u8, sign: i32) -> bool {
    (1..=i32::from(steps)).all(|k| !state.is_occupied(to.step(-k * sign)))
}

fn unexecute_number(state: &BoardState, steps: u8, dir: Dir, discard: bool) -> Vec<BoardState> {
    let mut out = Vec::new();
    if discard {
        out.push(*state);
    }
    let sign = dir.sign();
    match state.player() {
        Position::Home => {
            // Entering home captures nothing, so only the start cell is restored.
            let entry = state.home_entry();
            if clear_behind(state, entry, steps, sign) {
                out.push(state.with_player(Position::Track(entry.step(-i32::from(steps) * sign))));
            }
        }
        Position::Track(to) => {
            if !clear_behind(state, to, steps, sign) {
                return out;
            }
            let prev = state.with_player(Position::Track(to.step(-i32::from(steps) * sign)));
            out.push(prev);
            for enemy in state.absent_enemies() {
                out.push(prev.with_piece(enemy, Some(Position::Track(to))));
            }
        }
    }
    out
}

fn unexecute_single_step(state: &BoardState, steps: u8) -> Vec<BoardState> {
    let (to, bulldozed): (Cell, Vec<Cell>) = match state.player() {
        // Home entry replaces the last step: only the cells before it were walked over.
        Position::Home => {
            let entry = state.home_entry();
            (entry, (1..i32::from(steps)).map(|j| entry.step(-j)).collect())
        }
        Position::Track(to) => (to, (0..i32::from(steps)).map(|j| to.step(-j)).collect()),
    };
    if !clear_behind(state, to, steps, 1) {
        return Vec::new();
    }
    let prev = state.with_player(Position::Track(to.step(-i32::from(steps))));
    let mut out = vec![prev];
    let absent: Vec<Piece> = state.absent_enemies().collect();
    for (i, &first) in absent.iter().enumerate() {
        for &c in &bulldozed {
            let one = prev.with_piece(first, Some(Position::Track(c)));
            out.push(one);
            // Both enemies may have been flattened by the same card.
            for &second in &absent[i + 1..] {
                for &d in bulldozed.iter().filter(|&&d| d != c) {
                    out.push(one.with_piece(second, Some(Position::Track(d))));
                }
            }
        }
    }
    out
}

fn unexecute_trickster(state: &BoardState) -> Vec<BoardState> {
    if state.is_player_home() {
        return Vec::new();
    }
    let active = state.seat();
    swap_pairs(state)
        .into_iter()
        .filter(|&(a, b)| a < b)
        .map(|(a, b)| state.swapped(Piece::from_seat(a, active), Piece::from_seat(b, active)))
        .collect()
}

fn unexecute_warrior(state: &BoardState) -> Vec<BoardState> {
    let Some(to) = state.player_cell() else {
        return Vec::new();
    };
    // A warrior always captures: the cell it landed on held an enemy, so one
    // captured enemy has to be put back there.
    let absent: Vec<Piece> = state.absent_enemies().collect();
    let mut out = Vec::new();
    if absent.is_empty() {
        return out;
    }
    for k in 1..i32::from(TRACK_LEN) {
        let from = to.step(-k);
        if state.is_occupied(from) {
            break;
        }
        for &enemy in &absent {
            out.push(
                state
                    .with_player(Position::Track(from))
                    .with_piece(enemy, Some(Position::Track(to))),
            );
        }
    }
    out
}

/// Every board from which playing `card` can lead to `state`.
///
/// Only the deal generator walks backwards; it relies on this covering the
/// true predecessor of every forward play.
pub fn unexecute_all(card: &Card, state: &BoardState) -> Vec<BoardState> {
    match *card {
        Card::Number { steps, dir, discard } => unexecute_number(state, steps, dir, discard),
        Card::SingleStep { steps } => unexecute_single_step(state, steps),
        Card::Trickster => unexecute_trickster(state),
        Card::Warrior => unexecute_warrior(state),
    }
}
