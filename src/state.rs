use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::cards::Card;
use crate::types::Piece;

pub const HAND_SIZE: usize = 5;

/// A decision a card may still need before it can be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// Play the card face-up for no effect?
    Discard,
    /// Turn into home instead of passing the entry cell?
    EnterHome,
    /// Same, for a card moving backwards.
    EnterHomeBackwards,
    /// Pick the two pieces to exchange.
    Swap,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Choice::Discard => "discard this card?",
            Choice::EnterHome => "move into home?",
            Choice::EnterHomeBackwards => "move backwards into home?",
            Choice::Swap => "which two pieces to swap?",
        };
        f.write_str(s)
    }
}

/// Decisions already made for the card being played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decisions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discard: Option<bool>,
    /// Shared by both home-entry directions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter_home: Option<bool>,
    /// Absolute seats of the two pieces to swap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<(u8, u8)>,
}

impl Decisions {
    #[inline]
    pub fn is_resolved(&self, choice: Choice) -> bool {
        match choice {
            Choice::Discard => self.discard.is_some(),
            Choice::EnterHome | Choice::EnterHomeBackwards => self.enter_home.is_some(),
            Choice::Swap => self.swap.is_some(),
        }
    }

    /// Record a yes/no answer. `Swap` is not a yes/no choice and is rejected.
    pub fn with_answer(mut self, choice: Choice, value: bool) -> Result<Self, String> {
        match choice {
            Choice::Discard => self.discard = Some(value),
            Choice::EnterHome | Choice::EnterHomeBackwards => self.enter_home = Some(value),
            Choice::Swap => return Err("Swap needs two pieces, not a yes/no answer".to_string()),
        }
        Ok(self)
    }

    #[inline]
    pub fn with_swap(mut self, seat_a: u8, seat_b: u8) -> Self {
        self.swap = Some((seat_a, seat_b));
        self
    }
}

/// Result of executing a card: a new board, or a strike with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteResult {
    Success(BoardState),
    Strike(String),
}

impl ExecuteResult {
    #[inline]
    pub fn strike(reason: impl Into<String>) -> Self {
        ExecuteResult::Strike(reason.into())
    }

    #[inline]
    pub fn state(&self) -> Option<&BoardState> {
        match self {
            ExecuteResult::Success(s) => Some(s),
            ExecuteResult::Strike(_) => None,
        }
    }

    #[inline]
    pub fn is_strike(&self) -> bool {
        matches!(self, ExecuteResult::Strike(_))
    }

    /// Pieces that moved or were captured, relative to `before`.
    /// Empty for a strike.
    pub fn changed_pieces(&self, before: &BoardState) -> Vec<Piece> {
        match self {
            ExecuteResult::Success(s) => before.changed_pieces(s),
            ExecuteResult::Strike(_) => Vec::new(),
        }
    }
}

/// Five card slots; a played slot is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    slots: [Option<Card>; HAND_SIZE],
}

impl Hand {
    #[inline]
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { slots: cards.map(Some) }
    }

    #[inline]
    pub fn from_slots(slots: [Option<Card>; HAND_SIZE]) -> Self {
        Self { slots }
    }

    #[inline]
    pub fn slots(&self) -> [Option<Card>; HAND_SIZE] {
        self.slots
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<Card> {
        self.slots.get(slot).copied().flatten()
    }

    /// New hand with `slot` marked as played.
    #[inline]
    pub fn take(mut self, slot: usize) -> Self {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = None;
        }
        self
    }

    /// New hand with `slot` holding `card`.
    #[inline]
    pub fn replace(mut self, slot: usize, card: Card) -> Self {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = Some(card);
        }
        self
    }

    /// Unplayed cards with their slot, in slot order.
    #[inline]
    pub fn remaining(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|c| (i, c)))
    }

    /// Bit `i` set when slot `i` is still unplayed.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.slots
            .iter()
            .enumerate()
            .fold(0u8, |m, (i, c)| if c.is_some() { m | (1 << i) } else { m })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|c| c.is_some()).count()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .slots
            .iter()
            .map(|c| match c {
                Some(card) => card.to_string(),
                None => "(played)".to_string(),
            })
            .collect();
        f.write_str(&parts.join(", "))
    }
}
