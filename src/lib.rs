//! Two self-contained algorithmic cores
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe rules engine with exhaustive minimax search
//! - PageRank estimation over a directed link graph, via Monte Carlo
//!   sampling and via iterative fixed-point computation
//!
//! The two cores are independent: nothing is shared between the game side
//! and the ranking side apart from the crate-wide error type.

pub mod error;
pub mod pagerank;
pub mod tictactoe;
pub mod utils;

pub use error::{Error, Result};
pub use pagerank::{
    Distribution, LinkGraph, PageId, RankConfig, RankTable, iterate_rank, sample_rank,
    transition_model,
};
pub use tictactoe::{Action, Board, Cell, Player, minimax};
