use crate::board::BoardState;
use crate::engine::apply::outcomes;
use crate::state::Hand;

use super::dead::DeadTable;
use super::SolveStep;

/// Depth-first search for a way to play out `hand` from `state` ending home.
///
/// Explores hand slots in order, then each card's decision branches in their
/// declared order, so the first solution found is always the same one.
/// Appends the plays of the solution to `path` and returns true when found;
/// `path` is left as it was on failure.
pub fn search(
    state: &BoardState,
    hand: Hand,
    dead: &mut DeadTable,
    nodes: &mut u64,
    path: &mut Vec<SolveStep>,
) -> bool {
    *nodes += 1;
    if hand.is_empty() {
        return state.is_player_home();
    }
    // Home with cards left over can never finish.
    if state.is_player_home() {
        return false;
    }
    let key = (*state, hand.mask());
    if dead.contains(&key) {
        return false;
    }

    for (slot, card) in hand.remaining() {
        for (decisions, next) in outcomes(&card, state) {
            path.push(SolveStep {
                slot,
                card,
                decisions,
                state: next,
            });
            if search(&next, hand.take(slot), dead, nodes, path) {
                return true;
            }
            path.pop();
        }
    }

    dead.insert(key);
    false
}
