use crate::board::BoardState;
use crate::cards::Card;
use crate::engine::apply::{execute, pending_choice};
use crate::state::{Choice, Decisions, ExecuteResult};

/// What the resolver needs next, or what the play came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Ask the player this before the card can be executed.
    Pending(Choice),
    /// All decisions are in; the card has been executed.
    Resolved {
        slot: usize,
        decisions: Decisions,
        result: ExecuteResult,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Stage {
    #[default]
    Idle,
    Awaiting {
        slot: usize,
        card: Card,
        board: BoardState,
        choice: Choice,
        decisions: Decisions,
    },
}

/// Turns a card with open decisions into one board transition.
///
/// `Idle` -> select a card -> (`Awaiting` a choice, answer, re-query)* -> `Idle`.
#[derive(Debug, Clone, Default)]
pub struct OptionResolver {
    stage: Stage,
}

impl OptionResolver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.stage == Stage::Idle
    }

    /// The card being played and the choice it is waiting on.
    #[inline]
    pub fn pending(&self) -> Option<(usize, Card, Choice)> {
        match self.stage {
            Stage::Idle => None,
            Stage::Awaiting { slot, card, choice, .. } => Some((slot, card, choice)),
        }
    }

    /// Start playing the card in `slot` against `board`.
    pub fn select_card(&mut self, slot: usize, card: Card, board: &BoardState) -> Result<Prompt, String> {
        if !self.is_idle() {
            return Err("Another card is still waiting for a decision".to_string());
        }
        Ok(self.advance(slot, card, *board, Decisions::default()))
    }

    /// Answer a yes/no choice.
    pub fn answer(&mut self, value: bool) -> Result<Prompt, String> {
        let Stage::Awaiting { slot, card, board, choice, decisions } = self.stage else {
            return Err("No decision is pending".to_string());
        };
        let decisions = decisions.with_answer(choice, value)?;
        Ok(self.advance(slot, card, board, decisions))
    }

    /// Answer a swap choice with two absolute seats.
    pub fn answer_swap(&mut self, seat_a: u8, seat_b: u8) -> Result<Prompt, String> {
        let Stage::Awaiting { slot, card, board, choice, decisions } = self.stage else {
            return Err("No decision is pending".to_string());
        };
        if choice != Choice::Swap {
            return Err(format!("Pending choice is '{choice}', not a swap"));
        }
        Ok(self.advance(slot, card, board, decisions.with_swap(seat_a, seat_b)))
    }

    /// Drop the card being played without executing it.
    #[inline]
    pub fn cancel(&mut self) {
        self.stage = Stage::Idle;
    }

    fn advance(&mut self, slot: usize, card: Card, board: BoardState, decisions: Decisions) -> Prompt {
        match pending_choice(&card, &board, &decisions) {
            Some(choice) => {
                self.stage = Stage::Awaiting { slot, card, board, choice, decisions };
                Prompt::Pending(choice)
            }
            None => {
                self.stage = Stage::Idle;
                Prompt::Resolved {
                    slot,
                    decisions,
                    result: execute(&card, &board, &decisions),
                }
            }
        }
    }
}
