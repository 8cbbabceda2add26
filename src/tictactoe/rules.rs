//! Game rules engine: turn inference, legal moves, successors, terminal
//! detection, and utility.
//!
//! All functions treat the [`Board`] as immutable; [`result`] returns a
//! fresh board rather than mutating in place.

use std::collections::BTreeSet;

use super::{Action, Board, Player, lines};
use crate::{Error, Result};

/// Determine which player has the next turn.
///
/// The side with fewer placed pieces moves next; X moves on equal counts,
/// so X always opens.
///
/// # Errors
///
/// Returns [`Error::GameAlreadyOver`] when the board has no empty cells,
/// since no player can have a turn on a finished board.
pub fn player(board: &Board) -> Result<Player> {
    let count = board.count_pieces();
    if count.empty == 0 {
        return Err(Error::GameAlreadyOver);
    }

    if count.x <= count.o {
        Ok(Player::X)
    } else {
        Ok(Player::O)
    }
}

/// All legal actions on the board: the coordinates of every empty cell.
///
/// Returns `None` (not an empty set) when the board is full. Callers must
/// treat the absence of an action set as a terminal signal.
pub fn actions(board: &Board) -> Option<BTreeSet<Action>> {
    let moves: BTreeSet<Action> = board
        .iter_cells()
        .filter(|&(_, _, cell)| cell == super::Cell::Empty)
        .map(|(row, col, _)| Action::new(row, col))
        .collect();

    if moves.is_empty() { None } else { Some(moves) }
}

/// Return the board that results from applying `action`.
///
/// The acting player is derived via [`player`], never passed in, which
/// binds move legality to turn order automatically.
///
/// # Errors
///
/// - [`Error::InvalidCoordinate`] if `action` indexes outside the grid
/// - [`Error::CellOccupied`] if the target cell is not empty
#[must_use = "result returns a new board; the original is unchanged"]
pub fn result(board: &Board, action: Action) -> Result<Board> {
    let Action { row, col } = action;

    if row >= 3 || col >= 3 {
        return Err(Error::InvalidCoordinate { row, col });
    }

    if !board.is_empty_cell(row, col) {
        return Err(Error::CellOccupied { row, col });
    }

    let mover = player(board)?;
    let mut next = *board;
    next.cells[row][col] = mover.to_cell();
    Ok(next)
}

/// The winner of the game, if there is one.
///
/// Checks all 8 winning lines; at most one player can have a line in any
/// position reachable by legal play.
pub fn winner(board: &Board) -> Option<Player> {
    if lines::has_won(board, Player::X) {
        Some(Player::X)
    } else if lines::has_won(board, Player::O) {
        Some(Player::O)
    } else {
        None
    }
}

/// True iff the game is over: the board is full or someone has won
pub fn terminal(board: &Board) -> bool {
    actions(board).is_none() || winner(board).is_some()
}

/// Game-theoretic value of a board: +1 if X has won, -1 if O has won,
/// 0 otherwise.
///
/// Only meaningful on terminal boards; on a non-terminal board this
/// returns 0 like a draw.
pub fn utility(board: &Board) -> i32 {
    winner(board).map_or(0, Player::utility)
}
