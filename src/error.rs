//! Error types for the gridrank crate

use thiserror::Error;

/// Main error type for the gridrank crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate ({row}, {col}) is outside the 3x3 board")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("game already over: the board has no empty cells")]
    GameAlreadyOver,

    #[error("corpus contains no pages")]
    EmptyCorpus,

    #[error("page '{page}' is not part of the link graph")]
    UnknownPage { page: String },

    #[error("rank iteration did not converge within {iterations} iterations")]
    ConvergenceFailure { iterations: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
