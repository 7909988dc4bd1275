use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Piece, Position, SEATS};

/// Positions of the four tracked pieces, seen from one active seat.
///
/// Slots are `[player, partner, enemy_a, enemy_b]`. An empty enemy slot means
/// that enemy has been captured and is off the track. Player and partner are
/// always present; only the player may be home.
///
/// This is a plain `Copy` value: every transition hands back a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardLayout")]
pub struct BoardState {
    seat: u8,
    pieces: [Option<Position>; 4],
}

/// Wire form of a board, checked by [`BoardState::new`] on the way in.
#[derive(Deserialize)]
struct BoardLayout {
    seat: u8,
    pieces: [Option<Position>; 4],
}

impl TryFrom<BoardLayout> for BoardState {
    type Error = String;

    fn try_from(raw: BoardLayout) -> Result<Self, String> {
        let on_track = |piece: Piece| match raw.pieces[piece.index()] {
            Some(Position::Track(c)) => Ok(Some(c)),
            None => Ok(None),
            Some(Position::Home) => Err(format!("Only the player can be home, not the {piece}")),
        };
        let Some(player) = raw.pieces[Piece::Player.index()] else {
            return Err("The player piece is missing".to_string());
        };
        let partner = on_track(Piece::Partner)?.ok_or("The partner piece is missing")?;
        BoardState::new(raw.seat, player, partner, on_track(Piece::EnemyA)?, on_track(Piece::EnemyB)?)
    }
}

impl BoardState {
    /// Build and validate a board.
    pub fn new(
        seat: u8,
        player: Position,
        partner: Cell,
        enemy_a: Option<Cell>,
        enemy_b: Option<Cell>,
    ) -> Result<Self, String> {
        if seat >= SEATS {
            return Err(format!("Seat {seat} out of range (must be 0..4)"));
        }
        let board = Self {
            seat,
            pieces: [
                Some(player),
                Some(Position::Track(partner)),
                enemy_a.map(Position::Track),
                enemy_b.map(Position::Track),
            ],
        };
        let mut seen: Vec<Cell> = Vec::with_capacity(4);
        for p in Piece::ALL {
            if let Some(c) = board.cell_of(p) {
                if seen.contains(&c) {
                    return Err(format!("Two pieces share cell {c}"));
                }
                seen.push(c);
            }
        }
        Ok(board)
    }

    /// The finished position: player home, everyone else on the track.
    #[inline]
    pub fn win_state(seat: u8, partner: Cell, enemy_a: Cell, enemy_b: Cell) -> Result<Self, String> {
        Self::new(seat, Position::Home, partner, Some(enemy_a), Some(enemy_b))
    }

    #[inline]
    pub fn seat(&self) -> u8 {
        self.seat
    }

    #[inline]
    pub fn pieces(&self) -> [Option<Position>; 4] {
        self.pieces
    }

    #[inline]
    pub fn get(&self, piece: Piece) -> Option<Position> {
        self.pieces[piece.index()]
    }

    /// Track cell of a piece, if it is on the track.
    #[inline]
    pub fn cell_of(&self, piece: Piece) -> Option<Cell> {
        self.get(piece).and_then(Position::cell)
    }

    #[inline]
    pub fn player(&self) -> Position {
        self.get(Piece::Player).unwrap_or(Position::Home)
    }

    #[inline]
    pub fn player_cell(&self) -> Option<Cell> {
        self.cell_of(Piece::Player)
    }

    #[inline]
    pub fn partner_cell(&self) -> Option<Cell> {
        self.cell_of(Piece::Partner)
    }

    #[inline]
    pub fn is_player_home(&self) -> bool {
        self.player().is_home()
    }

    /// Cell the player turns into home from.
    #[inline]
    pub fn home_entry(&self) -> Cell {
        Cell::start(self.seat)
    }

    /// Which piece, if any, stands on a track cell.
    #[inline]
    pub fn occupant(&self, cell: Cell) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|&p| self.get(p) == Some(Position::Track(cell)))
    }

    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupant(cell).is_some()
    }

    #[inline]
    pub fn enemies_present(&self) -> usize {
        Piece::ENEMIES.iter().filter(|&&e| self.get(e).is_some()).count()
    }

    /// Enemy slots whose piece has been captured.
    #[inline]
    pub fn absent_enemies(&self) -> impl Iterator<Item = Piece> + '_ {
        Piece::ENEMIES.into_iter().filter(move |&e| self.get(e).is_none())
    }

    #[inline]
    pub fn with_piece(mut self, piece: Piece, pos: Option<Position>) -> Self {
        self.pieces[piece.index()] = pos;
        self
    }

    #[inline]
    pub fn with_player(self, pos: Position) -> Self {
        self.with_piece(Piece::Player, Some(pos))
    }

    /// Remove an enemy standing on `cell`. The partner is never removed.
    #[inline]
    pub fn capture_at(mut self, cell: Cell) -> Self {
        for e in Piece::ENEMIES {
            if self.get(e) == Some(Position::Track(cell)) {
                self.pieces[e.index()] = None;
            }
        }
        self
    }

    #[inline]
    pub fn swapped(mut self, a: Piece, b: Piece) -> Self {
        self.pieces.swap(a.index(), b.index());
        self
    }

    /// Pieces whose position differs between `self` and `next`.
    pub fn changed_pieces(&self, next: &BoardState) -> Vec<Piece> {
        Piece::ALL
            .into_iter()
            .filter(|&p| self.get(p) != next.get(p))
            .collect()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |p: Option<Position>| match p {
            Some(pos) => pos.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "seat {} | you:{} partner:{} enemies:{},{}",
            self.seat,
            show(self.get(Piece::Player)),
            show(self.get(Piece::Partner)),
            show(self.get(Piece::EnemyA)),
            show(self.get(Piece::EnemyB)),
        )
    }
}
