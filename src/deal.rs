//! Deal generation by walking backwards from a finished board.
//!
//! A hand of five cards is drawn, the board is set to a win state, and each
//! card is "unplayed" in turn by picking one of its reverse moves at random.
//! The board reached after the last reverse move is the starting position,
//! so the hand solves it by construction. Optionally one card is then
//! replaced so that the presented hand no longer solves; the player has to
//! swap the original card back in first.

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::cards::{validate_catalogue, Card, Catalogue};
use crate::engine::unapply::unexecute_all;
use crate::rng::{shuffle, RandomSource};
use crate::rules::DealRules;
use crate::solver::Solver;
use crate::state::{Hand, HAND_SIZE};
use crate::types::{Cell, SEATS, TRACK_LEN};

/// The card the player must swap back into `slot` before playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedSwap {
    pub slot: usize,
    pub card: Card,
}

/// One round as presented to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub hand: [Card; HAND_SIZE],
    pub board: BoardState,
    pub forced_swap: Option<ForcedSwap>,
}

impl Deal {
    #[inline]
    pub fn hand(&self) -> Hand {
        Hand::new(self.hand)
    }

    /// The hand after performing the required substitution, if any.
    #[inline]
    pub fn repaired_hand(&self) -> Hand {
        match self.forced_swap {
            Some(fs) => self.hand().replace(fs.slot, fs.card),
            None => self.hand(),
        }
    }

    #[inline]
    pub fn has_trickster(&self) -> bool {
        self.hand.iter().any(Card::is_trickster)
            || self.forced_swap.is_some_and(|fs| fs.card.is_trickster())
    }
}

pub struct DealGenerator<'a> {
    catalogue: &'a Catalogue,
    rules: DealRules,
}

impl<'a> DealGenerator<'a> {
    /// Deal from `catalogue` under the rules it carries.
    pub fn new(catalogue: &'a Catalogue) -> Result<Self, String> {
        validate_catalogue(catalogue)?;
        check_rules(catalogue, catalogue.rules)?;
        Ok(Self {
            catalogue,
            rules: catalogue.rules,
        })
    }

    /// Deal under `rules` instead of the catalogue's own.
    pub fn with_rules(mut self, rules: DealRules) -> Result<Self, String> {
        check_rules(self.catalogue, rules)?;
        self.rules = rules;
        Ok(self)
    }

    #[inline]
    pub fn rules(&self) -> DealRules {
        self.rules
    }

    /// Deal, restarting from scratch until an attempt succeeds.
    ///
    /// The catalogue must be able to produce a solvable deal at all (any
    /// forward number card will do); otherwise this never returns.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Deal {
        let mut attempts: u64 = 0;
        loop {
            attempts += 1;
            if let Some(deal) = self.attempt(rng) {
                log::debug!("[deal] accepted after {attempts} attempt(s)");
                return deal;
            }
        }
    }

    /// One generation attempt; `None` means the draw was discarded.
    pub fn attempt<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Deal> {
        let mut hand: [Card; HAND_SIZE] =
            std::array::from_fn(|_| self.catalogue.cards[rng.draw(0, self.catalogue.len())]);
        let final_board = random_win_state(rng);
        let board = unplay_hand(&mut hand, final_board, rng)?;

        shuffle(&mut hand, rng);

        let mut solver = Solver::new();
        if !solver.exists(&board, &Hand::new(hand)) {
            log::warn!("[deal] backward walk produced an unsolvable board {board}, redrawing");
            return None;
        }

        let mut forced_swap = None;
        if self.rules.forced_swap && rng.draw(0, 2) != 0 {
            let (broken, fs) = break_hand(&hand, &board, self.catalogue, &mut solver, rng)?;
            hand = broken;
            forced_swap = Some(fs);
        }

        let deal = Deal {
            hand,
            board,
            forced_swap,
        };
        if self.rules.require_trickster && !deal.has_trickster() {
            log::debug!("[deal] no Trickster dealt, redrawing");
            return None;
        }
        Some(deal)
    }
}

/// Rules the catalogue can never satisfy would make `generate` spin forever.
fn check_rules(catalogue: &Catalogue, rules: DealRules) -> Result<(), String> {
    if rules.require_trickster && !catalogue.iter().any(Card::is_trickster) {
        return Err("Rules require a Trickster but the catalogue has none".to_string());
    }
    Ok(())
}

/// Player home, the other three pieces on distinct random cells.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn random_win_state<R: RandomSource + ?Sized>(rng: &mut R) -> BoardState {
    let seat = rng.draw(0, usize::from(SEATS)) as u8;
    let mut cells: Vec<Cell> = Vec::with_capacity(3);
    while cells.len() < 3 {
        let c = Cell::new(rng.draw(0, usize::from(TRACK_LEN)) as i32);
        if !cells.contains(&c) {
            cells.push(c);
        }
    }
    BoardState::win_state(seat, cells[0], cells[1], cells[2])
        .unwrap_or_else(|e| unreachable!("distinct cells always form a board: {e}"))
}

/// Walk backwards through the hand from `board`, reordering `hand` into play
/// order reversed. Returns the starting board, or `None` if some card has no
/// usable reverse move.
fn unplay_hand<R: RandomSource + ?Sized>(
    hand: &mut [Card; HAND_SIZE],
    mut board: BoardState,
    rng: &mut R,
) -> Option<BoardState> {
    for i in 0..HAND_SIZE {
        let first_play = i == HAND_SIZE - 1;
        let usable = |card: &Card, board: &BoardState| -> Vec<BoardState> {
            unexecute_all(card, board)
                .into_iter()
                // Every board before a play has the player on the track, and
                // the round opens with both enemies present.
                .filter(|b| !b.is_player_home() && (!first_play || b.enemies_present() == 2))
                .collect()
        };
        // Cards still unprocessed can be pulled forward if this one is stuck.
        let (j, undos) = (i..HAND_SIZE).find_map(|j| {
            let undos = usable(&hand[j], &board);
            (!undos.is_empty()).then_some((j, undos))
        })?;
        hand.swap(i, j);
        board = undos[rng.draw(0, undos.len())];
    }
    Some(board)
}

/// Replace one card with a random substitute so that the hand stops solving.
/// Returns the broken hand and the card to swap back, or `None` if no slot
/// can be broken with the drawn substitute.
fn break_hand<R: RandomSource + ?Sized>(
    hand: &[Card; HAND_SIZE],
    board: &BoardState,
    catalogue: &Catalogue,
    solver: &mut Solver,
    rng: &mut R,
) -> Option<([Card; HAND_SIZE], ForcedSwap)> {
    let substitute = catalogue.cards[rng.draw(0, catalogue.len())];
    let mut order: [usize; HAND_SIZE] = std::array::from_fn(|i| i);
    shuffle(&mut order, rng);
    for slot in order {
        let mut trial = *hand;
        trial[slot] = substitute;
        if !solver.exists(board, &Hand::new(trial)) {
            let fs = ForcedSwap {
                slot,
                card: hand[slot],
            };
            return Some((trial, fs));
        }
    }
    log::debug!("[deal] substitute {substitute} breaks no slot, redrawing");
    None
}

/// Confirm a deal behaves as dealt: a plain hand solves; a hand owing a swap
/// does not solve until the swap is made.
pub fn check_deal(deal: &Deal, solver: &mut Solver) -> Result<(), String> {
    let as_dealt = solver.exists(&deal.board, &deal.hand());
    match deal.forced_swap {
        None if !as_dealt => Err(format!("hand {} does not solve {}", deal.hand(), deal.board)),
        None => Ok(()),
        Some(_) if as_dealt => Err(format!(
            "hand {} solves {} although a swap is required",
            deal.hand(),
            deal.board
        )),
        Some(fs) => {
            if solver.exists(&deal.board, &deal.repaired_hand()) {
                Ok(())
            } else {
                Err(format!(
                    "swapping {} into slot {} does not make {} solvable",
                    fs.card, fs.slot, deal.board
                ))
            }
        }
    }
}
