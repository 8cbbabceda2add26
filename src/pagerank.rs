//! PageRank estimation over a directed link graph
//!
//! Two estimators of the same stationary distribution: a Monte Carlo
//! random-surfer walk and an iterative fixed-point solver. Both consume an
//! immutable [`LinkGraph`] built from externally supplied corpus data.

pub mod config;
pub mod graph;
pub mod iterate;
pub mod sample;
pub mod transition;

use std::collections::BTreeMap;

pub use config::RankConfig;
pub use graph::{LinkGraph, PageId};
pub use iterate::iterate_rank;
pub use sample::sample_rank;
pub use transition::transition_model;

/// Probability distribution over next pages for a single source page
pub type Distribution = BTreeMap<PageId, f64>;

/// Estimated stationary probability per page; values sum to 1
pub type RankTable = BTreeMap<PageId, f64>;
