use crate::board::BoardState;
use crate::cards::Card;
use crate::state::{Choice, Decisions, ExecuteResult};
use crate::types::{Cell, Dir, Piece, Position, SEATS, TRACK_LEN};

const ALREADY_HOME: &str = "your piece is already home";

/// First cell among the `steps - 1` cells strictly between the player and the
/// destination that holds any piece.
#[inline]
fn first_blocker(state: &BoardState, from: Cell, steps: u8, sign: i32) -> Option<Cell> {
    (1..i32::from(steps))
        .map(|k| from.step(k * sign))
        .find(|&c| state.is_occupied(c))
}

/// Does a move of `steps` in `dir` end exactly on this seat's home entry?
#[inline]
fn lands_on_entry(state: &BoardState, steps: u8, dir: Dir) -> bool {
    state
        .player_cell()
        .is_some_and(|c| c.step(i32::from(steps) * dir.sign()) == state.home_entry())
}

/// Finish a move onto `dest`: refuse to land on the partner, otherwise capture
/// whatever enemy stands there.
#[inline]
fn land_on(state: BoardState, dest: Cell) -> ExecuteResult {
    if state.partner_cell() == Some(dest) {
        return ExecuteResult::strike("would capture your partner");
    }
    ExecuteResult::Success(state.capture_at(dest).with_player(Position::Track(dest)))
}

fn execute_number(
    state: &BoardState,
    decisions: &Decisions,
    steps: u8,
    dir: Dir,
    discard: bool,
) -> ExecuteResult {
    if discard && decisions.discard == Some(true) {
        return ExecuteResult::Success(*state);
    }
    let Some(from) = state.player_cell() else {
        return ExecuteResult::strike(ALREADY_HOME);
    };
    let sign = dir.sign();
    if first_blocker(state, from, steps, sign).is_some() {
        return ExecuteResult::strike("would move across another piece");
    }
    let dest = from.step(i32::from(steps) * sign);
    if decisions.enter_home == Some(true) {
        if dest != state.home_entry() {
            return ExecuteResult::strike("cannot move into home from here");
        }
        return ExecuteResult::Success(state.with_player(Position::Home));
    }
    land_on(*state, dest)
}

fn execute_single_step(state: &BoardState, decisions: &Decisions, steps: u8) -> ExecuteResult {
    let Some(from) = state.player_cell() else {
        return ExecuteResult::strike(ALREADY_HOME);
    };
    let mut next = *state;
    for k in 1..i32::from(steps) {
        let cell = from.step(k);
        match state.occupant(cell) {
            Some(Piece::Partner) => return ExecuteResult::strike("would bulldoze your partner"),
            Some(p) if p.is_enemy() => next = next.capture_at(cell),
            _ => {}
        }
    }
    let dest = from.step(i32::from(steps));
    if decisions.enter_home == Some(true) {
        if dest != state.home_entry() {
            return ExecuteResult::strike("cannot move into home from here");
        }
        return ExecuteResult::Success(next.with_player(Position::Home));
    }
    land_on(next, dest)
}

fn execute_trickster(state: &BoardState, decisions: &Decisions) -> ExecuteResult {
    if state.is_player_home() {
        return ExecuteResult::strike(ALREADY_HOME);
    }
    let Some((seat_a, seat_b)) = decisions.swap else {
        return ExecuteResult::strike("no pieces selected to swap");
    };
    if seat_a >= SEATS || seat_b >= SEATS {
        return ExecuteResult::strike("selected seat does not exist");
    }
    if seat_a == seat_b {
        return ExecuteResult::strike("must select two different pieces");
    }
    let a = Piece::from_seat(seat_a, state.seat());
    let b = Piece::from_seat(seat_b, state.seat());
    match (state.get(a), state.get(b)) {
        (None, _) | (_, None) => ExecuteResult::strike("cannot swap a piece that has been captured"),
        (Some(Position::Home), _) | (_, Some(Position::Home)) => {
            ExecuteResult::strike("cannot swap a piece that is already home")
        }
        _ => ExecuteResult::Success(state.swapped(a, b)),
    }
}

/// Nearest occupied cell strictly ahead of `from`, with its occupant.
#[inline]
pub(crate) fn first_occupied_ahead(state: &BoardState, from: Cell) -> Option<(Cell, Piece)> {
    (1..i32::from(TRACK_LEN))
        .map(|k| from.step(k))
        .find_map(|c| state.occupant(c).map(|p| (c, p)))
}

fn execute_warrior(state: &BoardState) -> ExecuteResult {
    let Some(from) = state.player_cell() else {
        return ExecuteResult::strike(ALREADY_HOME);
    };
    // The partner never leaves the track, so a well-formed board always has a
    // piece ahead of the player.
    let Some((dest, _)) = first_occupied_ahead(state, from) else {
        panic!("warrior found no piece ahead of cell {from}: {state}");
    };
    land_on(*state, dest)
}

/// Execute a card with the decisions gathered so far.
pub fn execute(card: &Card, state: &BoardState, decisions: &Decisions) -> ExecuteResult {
    match *card {
        Card::Number { steps, dir, discard } => execute_number(state, decisions, steps, dir, discard),
        Card::SingleStep { steps } => execute_single_step(state, decisions, steps),
        Card::Trickster => execute_trickster(state, decisions),
        Card::Warrior => execute_warrior(state),
    }
}

/// The next decision the card needs, or `None` once it can be executed.
pub fn pending_choice(card: &Card, state: &BoardState, decisions: &Decisions) -> Option<Choice> {
    match *card {
        Card::Number { steps, dir, discard } => {
            if discard && decisions.discard.is_none() {
                return Some(Choice::Discard);
            }
            if decisions.discard == Some(true) || decisions.enter_home.is_some() {
                return None;
            }
            let path_clear = state
                .player_cell()
                .is_some_and(|c| first_blocker(state, c, steps, dir.sign()).is_none());
            if path_clear && lands_on_entry(state, steps, dir) {
                return Some(match dir {
                    Dir::Forward => Choice::EnterHome,
                    Dir::Backward => Choice::EnterHomeBackwards,
                });
            }
            None
        }
        Card::SingleStep { steps } => {
            if decisions.enter_home.is_none() && lands_on_entry(state, steps, Dir::Forward) {
                Some(Choice::EnterHome)
            } else {
                None
            }
        }
        Card::Trickster => {
            if decisions.swap.is_none() {
                Some(Choice::Swap)
            } else {
                None
            }
        }
        Card::Warrior => None,
    }
}

/// Ordered seat pairs `(a, b)`, `a != b`, both pieces on the track, ascending.
pub fn swap_pairs(state: &BoardState) -> Vec<(u8, u8)> {
    let on_track = |seat: u8| {
        state
            .get(Piece::from_seat(seat, state.seat()))
            .and_then(Position::cell)
            .is_some()
    };
    let mut pairs = Vec::new();
    for a in 0..SEATS {
        for b in 0..SEATS {
            if a != b && on_track(a) && on_track(b) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

fn expand(card: &Card, state: &BoardState, decisions: Decisions, out: &mut Vec<(Decisions, BoardState)>) {
    match pending_choice(card, state, &decisions) {
        None => {
            if let ExecuteResult::Success(next) = execute(card, state, &decisions) {
                out.push((decisions, next));
            }
        }
        Some(Choice::Swap) => {
            for (a, b) in swap_pairs(state) {
                expand(card, state, decisions.with_swap(a, b), out);
            }
        }
        Some(choice) => {
            for value in [true, false] {
                if let Ok(d) = decisions.with_answer(choice, value) {
                    expand(card, state, d, out);
                }
            }
        }
    }
}

/// Every legal way to play `card`, with the decisions that produce it.
///
/// Order is deterministic: for yes/no choices "yes" comes first, swaps run
/// through seat pairs ascending.
pub fn outcomes(card: &Card, state: &BoardState) -> Vec<(Decisions, BoardState)> {
    let mut out = Vec::new();
    expand(card, state, Decisions::default(), &mut out);
    out
}

/// Every board reachable by playing `card`.
#[inline]
pub fn execute_all(card: &Card, state: &BoardState) -> Vec<BoardState> {
    outcomes(card, state).into_iter().map(|(_, s)| s).collect()
}
