//! Exhaustive minimax search over the full game tree.
//!
//! Plain depth-first recursion without memoization or pruning; the state
//! space is small enough (at most 9! leaf paths, usually far fewer thanks
//! to early termination) that nothing cleverer is needed. Ties between
//! equally-valued moves break deterministically toward the
//! lexicographically smallest `(row, col)` action, because action sets
//! iterate in that order and only strict improvements replace the
//! incumbent.

use super::{Action, Board, Player, rules};
use crate::Result;

/// Best achievable value for the maximizing side (X), with the move that
/// achieves it.
///
/// Terminal boards evaluate to `(utility, None)`.
///
/// # Errors
///
/// Propagates rules-engine errors. These indicate a contract violation
/// (the search only ever applies actions drawn from
/// [`rules::actions`](super::rules::actions)), so they are not expected
/// during a correct search.
pub fn max_value(board: &Board) -> Result<(i32, Option<Action>)> {
    if rules::terminal(board) {
        return Ok((rules::utility(board), None));
    }

    let mut best_value = i32::MIN;
    let mut best_action = None;

    for action in rules::actions(board).into_iter().flatten() {
        let (child_value, _) = min_value(&rules::result(board, action)?)?;
        if child_value > best_value {
            best_value = child_value;
            best_action = Some(action);
        }
    }

    Ok((best_value, best_action))
}

/// Mirror of [`max_value`] for the minimizing side (O): keeps the move
/// with the strictly lowest value, first action wins ties.
pub fn min_value(board: &Board) -> Result<(i32, Option<Action>)> {
    if rules::terminal(board) {
        return Ok((rules::utility(board), None));
    }

    let mut best_value = i32::MAX;
    let mut best_action = None;

    for action in rules::actions(board).into_iter().flatten() {
        let (child_value, _) = max_value(&rules::result(board, action)?)?;
        if child_value < best_value {
            best_value = child_value;
            best_action = Some(action);
        }
    }

    Ok((best_value, best_action))
}

/// The optimal action for the side to move, or `None` on a terminal board.
///
/// The returned action is optimal under perfect play: following it
/// guarantees the side to move at least the game-theoretic value of the
/// position against any opponent, and exactly that value against an
/// optimal one.
pub fn minimax(board: &Board) -> Result<Option<Action>> {
    if rules::terminal(board) {
        return Ok(None);
    }

    let (_, action) = match rules::player(board)? {
        Player::X => max_value(board)?,
        Player::O => min_value(board)?,
    };

    Ok(action)
}
