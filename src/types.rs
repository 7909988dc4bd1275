use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// Number of cells on the circular track.
pub const TRACK_LEN: u8 = 32;
/// Seats around the table (and pieces tracked on the board).
pub const SEATS: u8 = 4;

/// A cell on the 32-cell circular track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(u8);

impl Cell {
    /// Normalize any integer into `[0, 32)`.
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(raw: i32) -> Self {
        Cell(raw.rem_euclid(i32::from(TRACK_LEN)) as u8)
    }

    /// Cell where the given seat's pieces start; also the cell a piece of
    /// that seat turns into home from.
    #[inline]
    pub fn start(seat: u8) -> Self {
        Cell::new(8 * i32::from(seat))
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Walk `k` cells (negative walks backwards), wrapping around the track.
    #[inline]
    pub fn step(self, k: i32) -> Self {
        Cell::new(i32::from(self.0) + k)
    }

    /// Every 8th cell is a home-entry cell for one of the four seats.
    #[inline]
    pub fn is_home_entry(self) -> bool {
        self.0 % 8 == 0
    }

    /// Bends of the rendered track. Only of interest to animation.
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(self.0, 10 | 14 | 26 | 30)
    }
}

/// Forward distance from `rhs` to `self`, in `[0, 32)`.
impl Sub for Cell {
    type Output = u8;

    #[inline]
    fn sub(self, rhs: Cell) -> u8 {
        (self.0 + TRACK_LEN - rhs.0) % TRACK_LEN
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a piece is: somewhere on the track, or home.
///
/// `Home` can only be entered through an explicit card rule; cell arithmetic
/// never produces it. Serialized as the cell number, with `-1` for home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Position {
    Track(Cell),
    Home,
}

impl Position {
    #[inline]
    pub fn track(raw: i32) -> Self {
        Position::Track(Cell::new(raw))
    }

    #[inline]
    pub fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }

    #[inline]
    pub fn cell(self) -> Option<Cell> {
        match self {
            Position::Track(c) => Some(c),
            Position::Home => None,
        }
    }
}

impl From<Cell> for Position {
    #[inline]
    fn from(c: Cell) -> Self {
        Position::Track(c)
    }
}

impl From<Position> for i8 {
    #[allow(clippy::cast_possible_wrap)]
    fn from(p: Position) -> i8 {
        match p {
            Position::Track(c) => c.0 as i8,
            Position::Home => -1,
        }
    }
}

impl TryFrom<i8> for Position {
    type Error = String;

    #[allow(clippy::cast_sign_loss)]
    fn try_from(v: i8) -> Result<Self, String> {
        match v {
            -1 => Ok(Position::Home),
            0..=31 => Ok(Position::Track(Cell(v as u8))),
            _ => Err(format!("invalid position {v} (expected 0..=31 or -1 for home)")),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Track(c) => write!(f, "{c}"),
            Position::Home => write!(f, "Home"),
        }
    }
}

/// The four tracked pieces, in board-slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Piece {
    Player,
    Partner,
    EnemyA,
    EnemyB,
}

impl Piece {
    pub const ALL: [Piece; 4] = [Piece::Player, Piece::Partner, Piece::EnemyA, Piece::EnemyB];
    pub const ENEMIES: [Piece; 2] = [Piece::EnemyA, Piece::EnemyB];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Piece::Player => 0,
            Piece::Partner => 1,
            Piece::EnemyA => 2,
            Piece::EnemyB => 3,
        }
    }

    #[inline]
    pub fn is_enemy(self) -> bool {
        matches!(self, Piece::EnemyA | Piece::EnemyB)
    }

    /// Piece belonging to an absolute seat, seen from `active_seat`.
    /// The next seat clockwise is an enemy, the opposite seat the partner.
    #[inline]
    pub fn from_seat(seat: u8, active_seat: u8) -> Piece {
        match (seat + SEATS - active_seat % SEATS) % SEATS {
            0 => Piece::Player,
            1 => Piece::EnemyA,
            2 => Piece::Partner,
            _ => Piece::EnemyB,
        }
    }

    /// Inverse of [`Piece::from_seat`].
    #[inline]
    pub fn seat(self, active_seat: u8) -> u8 {
        let offset = match self {
            Piece::Player => 0,
            Piece::EnemyA => 1,
            Piece::Partner => 2,
            Piece::EnemyB => 3,
        };
        (active_seat + offset) % SEATS
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Piece::Player => "you",
            Piece::Partner => "partner",
            Piece::EnemyA => "enemy A",
            Piece::EnemyB => "enemy B",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dir {
    #[default]
    Forward,
    Backward,
}

impl Dir {
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Dir::Forward => 1,
            Dir::Backward => -1,
        }
    }
}
