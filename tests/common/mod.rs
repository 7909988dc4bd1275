#![allow(dead_code)]

use tacpuzzle::{BoardState, Cell, Position};

/// Board for `seat` with the player on a track cell.
pub fn board(seat: u8, player: i32, partner: i32, enemy_a: Option<i32>, enemy_b: Option<i32>) -> BoardState {
    BoardState::new(
        seat,
        Position::track(player),
        Cell::new(partner),
        enemy_a.map(Cell::new),
        enemy_b.map(Cell::new),
    )
    .expect("valid board")
}

/// Board for `seat` with the player already home.
pub fn home_board(seat: u8, partner: i32, enemy_a: Option<i32>, enemy_b: Option<i32>) -> BoardState {
    BoardState::new(
        seat,
        Position::Home,
        Cell::new(partner),
        enemy_a.map(Cell::new),
        enemy_b.map(Cell::new),
    )
    .expect("valid board")
}

/// Random well-formed board; the player is home one time in eight and each
/// enemy is missing one time in four.
pub fn random_board<R: rand::Rng>(rng: &mut R) -> BoardState {
    loop {
        let seat = rng.gen_range(0..4u8);
        let player = if rng.gen_range(0..8) == 0 {
            Position::Home
        } else {
            Position::track(rng.gen_range(0..32))
        };
        let partner = Cell::new(rng.gen_range(0..32));
        let mut enemy = || {
            if rng.gen_range(0..4) == 0 {
                None
            } else {
                Some(Cell::new(rng.gen_range(0..32)))
            }
        };
        let (a, b) = (enemy(), enemy());
        if let Ok(board) = BoardState::new(seat, player, partner, a, b) {
            return board;
        }
    }
}
