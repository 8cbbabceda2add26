//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Game-theoretic value of a win for this player: X wins are +1, O wins -1.
    pub fn utility(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A move on the board: the coordinates of an empty cell to fill.
///
/// `Ord` is lexicographic by `(row, col)`, which gives action sets a
/// deterministic iteration order. The search relies on this for
/// reproducible tie-breaking among equally-valued moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// A 3x3 Tic-Tac-Toe grid.
///
/// Pure value type: `Copy`, 9 bytes, no notion of whose turn it is. The
/// side to move is always derived from the piece counts by
/// [`rules::player`](crate::tictactoe::rules::player), which keeps move
/// legality bound to turn order by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; 3]; 3],
}

impl Board {
    /// Create the initial empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters; whitespace is filtered
    /// out, so row-per-line layouts work:
    ///
    /// ```
    /// use gridrank::tictactoe::{Board, Cell};
    ///
    /// let board = Board::from_string(
    ///     "XO.
    ///      .X.
    ///      ..O",
    /// )
    /// .unwrap();
    /// assert_eq!(board.get(1, 1), Some(Cell::X));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters are present
    /// or any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().take(9).enumerate() {
            board.cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }
        Ok(board)
    }

    /// Get cell at (row, col), or `None` if the coordinates are off-board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Check whether a cell is empty; off-board coordinates are not empty
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Empty)
    }

    /// Iterate over all cells with their coordinates, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(move |(col, &cell)| (row, col, cell))
            })
    }

    /// Check if the board has no empty cells left
    pub fn is_full(&self) -> bool {
        self.count_pieces().empty == 0
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for (_, _, cell) in self.iter_cells() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if row_idx < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for (_, _, cell) in board.iter_cells() {
            assert_eq!(cell, Cell::Empty);
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::X));
        assert_eq!(board.get(0, 1), Some(Cell::O));
        assert_eq!(board.get(0, 2), Some(Cell::X));
        assert_eq!(board.get(1, 0), Some(Cell::Empty));

        // Too short
        assert!(Board::from_string("XO").is_err());

        // Invalid character
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert!(!board.is_empty_cell(3, 3));
    }

    #[test]
    fn test_action_ordering_is_row_major() {
        let mut actions = vec![Action::new(2, 0), Action::new(0, 1), Action::new(0, 0)];
        actions.sort();
        assert_eq!(
            actions,
            vec![Action::new(0, 0), Action::new(0, 1), Action::new(2, 0)]
        );
    }

    #[test]
    fn test_player_utility_mapping() {
        assert_eq!(Player::X.utility(), 1);
        assert_eq!(Player::O.utility(), -1);
    }

    #[test]
    fn test_display_roundtrip() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let shown = format!("{board}");
        assert!(shown.contains("XOX"));
        assert!(shown.contains(".O."));
        assert!(shown.contains("X.."));
        let parsed = Board::from_string(&shown).unwrap();
        assert_eq!(parsed, board);
    }
}
