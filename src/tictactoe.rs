//! Tic-Tac-Toe game model, rules engine, and minimax search

pub mod board;
pub mod lines;
pub mod minimax;
pub mod rules;

pub use board::{Action, Board, Cell, Player};
pub use lines::WINNING_LINES;
pub use minimax::{max_value, min_value, minimax};
pub use rules::{actions, player, result, terminal, utility, winner};
