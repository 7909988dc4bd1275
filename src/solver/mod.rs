use serde::Serialize;

use crate::board::BoardState;
use crate::cards::Card;
use crate::state::{Decisions, Hand};

pub mod dead;
pub mod search;

pub use dead::{DeadStats, DeadTable};
pub use search::search;

/// One play of a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolveStep {
    /// Hand slot the card was played from.
    pub slot: usize,
    pub card: Card,
    /// Every decision made for this card, including the swap pair.
    pub decisions: Decisions,
    /// Board after the play.
    pub state: BoardState,
}

/// Exhaustive solver. Reusable across queries; each query starts from a
/// clean dead-position table.
#[derive(Debug, Default)]
pub struct Solver {
    dead: DeadTable,
    nodes: u64,
}

impl Solver {
    #[inline]
    pub fn new() -> Self {
        Self {
            dead: DeadTable::with_capacity(1 << 10),
            nodes: 0,
        }
    }

    /// Can the remaining hand be played out so the player ends home?
    pub fn exists(&mut self, state: &BoardState, hand: &Hand) -> bool {
        self.solve(state, hand).is_some()
    }

    /// The first solution in exploration order, play by play.
    pub fn solve(&mut self, state: &BoardState, hand: &Hand) -> Option<Vec<SolveStep>> {
        self.dead.clear();
        self.nodes = 0;
        let mut path = Vec::with_capacity(hand.len());
        if search(state, *hand, &mut self.dead, &mut self.nodes, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    /// Nodes visited by the last query.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn dead_stats(&self) -> DeadStats {
        self.dead.stats()
    }
}

/// One-shot existence check.
#[inline]
pub fn exists(state: &BoardState, hand: &Hand) -> bool {
    Solver::new().exists(state, hand)
}

/// One-shot solution reconstruction.
#[inline]
pub fn solve(state: &BoardState, hand: &Hand) -> Option<Vec<SolveStep>> {
    Solver::new().solve(state, hand)
}
