//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Player};

/// Winning line coordinates on the 3x3 board
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Check if a player has three in a row anywhere on the board
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.cells[row][col] == target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    #[test]
    fn test_has_won_horizontal() {
        let board = Board::from_string("XXX......").unwrap();
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let board = Board::from_string("O..O..O..").unwrap();
        assert!(has_won(&board, Player::O));
        assert!(!has_won(&board, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let board = Board::from_string("X...X...X").unwrap();
        assert!(has_won(&board, Player::X));

        let board = Board::from_string("..O.O.O..").unwrap();
        assert!(has_won(&board, Player::O));
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }
}
