use crate::board::BoardState;
use crate::deal::{Deal, ForcedSwap};
use crate::engine::resolver::{OptionResolver, Prompt};
use crate::solver::{SolveStep, Solver};
use crate::state::{Choice, ExecuteResult, Hand};
use crate::types::Piece;

/// Host hooks for the outcome of a round.
pub trait RoundObserver {
    fn on_won(&mut self);
    fn on_strike(&mut self, reason: &str);
}

/// Observer that ignores everything; the log still records outcomes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl RoundObserver for Silent {
    fn on_won(&mut self) {}
    fn on_strike(&mut self, _reason: &str) {}
}

/// What happened in response to one host action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// The selected card needs this decision first.
    Pending(Choice),
    /// A card was played; these pieces moved or were captured.
    Played { slot: usize, changed: Vec<Piece> },
    /// The required card substitution was performed.
    Swapped { slot: usize },
    /// Last card played with the player home.
    Won,
    /// Illegal action; the round has been reset to the deal.
    Struck(String),
}

/// One round in progress: the deal, the current board and hand, and the
/// card currently being resolved.
#[derive(Debug, Clone)]
pub struct Round {
    deal: Deal,
    board: BoardState,
    hand: Hand,
    must_swap: Option<ForcedSwap>,
    resolver: OptionResolver,
    solved: bool,
}

impl Round {
    pub fn new(deal: Deal) -> Self {
        log_setup(&deal);
        Self {
            deal,
            board: deal.board,
            hand: deal.hand(),
            must_swap: deal.forced_swap,
            resolver: OptionResolver::new(),
            solved: false,
        }
    }

    #[inline]
    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Is a card substitution still owed before play may start?
    #[inline]
    pub fn swap_required(&self) -> bool {
        self.must_swap.is_some()
    }

    /// Exchange the card in `slot` for the spare card.
    pub fn swap_card(&mut self, slot: usize, obs: &mut dyn RoundObserver) -> RoundEvent {
        if self.solved {
            return RoundEvent::Struck("round is already over".to_string());
        }
        match self.must_swap {
            None => self.strike("no card needed swapping", obs),
            Some(fs) if fs.slot != slot => self.strike(
                &format!("swapped the wrong card (slot {slot} instead of {})", fs.slot),
                obs,
            ),
            Some(fs) => {
                self.hand = self.hand.replace(fs.slot, fs.card);
                self.must_swap = None;
                log::info!("[round] swapped in {} at slot {}. Hand: {}", fs.card, slot, self.hand);
                RoundEvent::Swapped { slot }
            }
        }
    }

    /// Start playing the card in `slot`.
    pub fn select_card(&mut self, slot: usize, obs: &mut dyn RoundObserver) -> Result<RoundEvent, String> {
        if self.solved {
            return Err("Round is already over".to_string());
        }
        let Some(card) = self.hand.get(slot) else {
            return Err(format!("Slot {slot} holds no card"));
        };
        if self.must_swap.is_some() {
            return Ok(self.strike(&format!("played {card} before swapping a card"), obs));
        }
        let prompt = self.resolver.select_card(slot, card, &self.board)?;
        Ok(self.handle(prompt, obs))
    }

    /// Answer the pending yes/no choice.
    pub fn answer(&mut self, value: bool, obs: &mut dyn RoundObserver) -> Result<RoundEvent, String> {
        let prompt = self.resolver.answer(value)?;
        Ok(self.handle(prompt, obs))
    }

    /// Answer the pending swap with two absolute seats.
    pub fn answer_swap(&mut self, seat_a: u8, seat_b: u8, obs: &mut dyn RoundObserver) -> Result<RoundEvent, String> {
        let prompt = self.resolver.answer_swap(seat_a, seat_b)?;
        Ok(self.handle(prompt, obs))
    }

    /// Solution for the rest of the round from the current board and hand.
    /// `None` while a substitution is still owed, or if the position is lost.
    pub fn auto_solve(&self) -> Option<Vec<SolveStep>> {
        if self.must_swap.is_some() || self.solved {
            return None;
        }
        Solver::new().solve(&self.board, &self.hand)
    }

    /// Put the round back to its dealt state.
    pub fn reset(&mut self) {
        self.board = self.deal.board;
        self.hand = self.deal.hand();
        self.must_swap = self.deal.forced_swap;
        self.resolver.cancel();
    }

    fn handle(&mut self, prompt: Prompt, obs: &mut dyn RoundObserver) -> RoundEvent {
        let (slot, result) = match prompt {
            Prompt::Pending(choice) => return RoundEvent::Pending(choice),
            Prompt::Resolved { slot, result, .. } => (slot, result),
        };
        let card = self.hand.get(slot);
        let next = match result {
            ExecuteResult::Strike(reason) => return self.strike(&reason, obs),
            ExecuteResult::Success(next) => next,
        };
        let changed = self.board.changed_pieces(&next);
        self.board = next;
        self.hand = self.hand.take(slot);
        if let Some(card) = card {
            log::info!("[round] played {card}: {}", self.board);
        }

        match (self.hand.is_empty(), self.board.is_player_home()) {
            (true, true) => {
                self.solved = true;
                log::info!("[round] solved");
                obs.on_won();
                RoundEvent::Won
            }
            (false, true) => self.strike("entered home with cards left to play", obs),
            (true, false) => self.strike("ran out of cards before reaching home", obs),
            (false, false) => RoundEvent::Played { slot, changed },
        }
    }

    fn strike(&mut self, reason: &str, obs: &mut dyn RoundObserver) -> RoundEvent {
        log::warn!("[round] strike: {reason}. Layout was {}", layout_json(&self.board));
        obs.on_strike(reason);
        self.reset();
        RoundEvent::Struck(reason.to_string())
    }
}

fn layout_json(board: &BoardState) -> String {
    serde_json::json!({
        "playerseat": board.seat(),
        "positions": board.pieces(),
    })
    .to_string()
}

fn log_setup(deal: &Deal) {
    log::info!("[round] {}", layout_json(&deal.board));
    log::info!("[round] initial hand: {}", deal.hand());
    match deal.forced_swap {
        Some(_) => log::info!("[round] you must swap a card"),
        None => log::info!("[round] you must not swap a card"),
    }
}
