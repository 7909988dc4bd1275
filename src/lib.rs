#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod rules;
pub mod cards;
pub mod board;
pub mod state;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod resolver;
    pub mod unapply;
}

pub mod solver;
pub mod deal;
pub mod round;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::BoardState;
pub use crate::cards::{load_catalogue_from_json, Card, Catalogue};
pub use crate::deal::{Deal, DealGenerator, ForcedSwap};
pub use crate::engine::apply::{execute, execute_all, outcomes, pending_choice};
pub use crate::engine::resolver::{OptionResolver, Prompt};
pub use crate::engine::unapply::unexecute_all;
pub use crate::rng::{rng_for_deal, RandomSource};
pub use crate::round::{Round, RoundEvent, RoundObserver};
pub use crate::rules::DealRules;
pub use crate::solver::{SolveStep, Solver};
pub use crate::state::{Choice, Decisions, ExecuteResult, Hand};
pub use crate::types::{Cell, Dir, Piece, Position};
