//! Iterative fixed-point rank solver.

use crate::{Error, Result};

use super::{LinkGraph, RankConfig, RankTable};

/// Compute the stationary distribution by repeated application of the
/// PageRank update until the maximum per-page change drops to the
/// configured tolerance.
///
/// Every sweep is synchronous (Jacobi-style): a fresh rank table is built
/// from the previous iteration's values, so no page ever reads a rank that
/// was already updated in the same sweep.
///
/// Per update, a page `p` receives `(1 - damping)` plus `damping` times
/// the incoming mass, where a source `q` contributes `rank(q) / |links(q)|`
/// if it links to `p`, and a dangling source spreads `rank(q) / N` to
/// every page. Under this update the ranks sum to `N` at the fixed point
/// rather than 1, hence the final division of every rank by the page
/// count before returning.
///
/// # Errors
///
/// - [`Error::InvalidConfig`] for an unusable configuration
/// - [`Error::ConvergenceFailure`] if the iteration cap is hit; with
///   damping in `(0, 1)` the update is a contraction, so this only
///   triggers for pathological tolerance settings
pub fn iterate_rank(graph: &LinkGraph, config: &RankConfig) -> Result<RankTable> {
    config.validate()?;

    let universe_size = graph.page_count() as f64;
    let mut ranks: RankTable = graph
        .pages()
        .map(|page| (page.clone(), 1.0 / universe_size))
        .collect();

    for _ in 0..config.max_iterations {
        let next: RankTable = graph
            .pages()
            .map(|page| {
                let mut incoming = 0.0;
                for (source, links) in graph.iter() {
                    if links.is_empty() {
                        // Dangling source: its whole rank spreads uniformly
                        incoming += ranks[source] / universe_size;
                    }
                    if links.contains(page) {
                        incoming += ranks[source] / links.len() as f64;
                    }
                }
                let rank = (1.0 - config.damping) + config.damping * incoming;
                (page.clone(), rank)
            })
            .collect();

        let max_change = graph
            .pages()
            .map(|page| (next[page] - ranks[page]).abs())
            .fold(0.0, f64::max);

        ranks = next;

        if max_change <= config.tolerance {
            for rank in ranks.values_mut() {
                *rank /= universe_size;
            }
            return Ok(ranks);
        }
    }

    Err(Error::ConvergenceFailure {
        iterations: config.max_iterations,
    })
}
