//! Monte Carlo rank estimation by random-surfer sampling.

use rand::{Rng, prelude::IndexedRandom};

use crate::{Result, utils::weighted_sample};

use super::{LinkGraph, PageId, RankConfig, RankTable};

/// Estimate every page's stationary probability from a single long random
/// walk.
///
/// Starting from a uniformly random page, `config.samples` next-page draws
/// are taken from the transition model of the current page; each draw adds
/// exactly `1 / samples` to the drawn page's rank, so the returned table
/// sums to 1 by construction.
///
/// The generator is injected so tests can seed it; see
/// `StdRng::seed_from_u64`.
///
/// # Errors
///
/// Returns an error for an invalid configuration or an empty corpus
/// (the latter is ruled out by [`LinkGraph`] construction).
pub fn sample_rank<R: Rng>(
    graph: &LinkGraph,
    config: &RankConfig,
    rng: &mut R,
) -> Result<RankTable> {
    config.validate()?;

    let pages: Vec<&PageId> = graph.pages().collect();
    let mut current = (*pages
        .choose(rng)
        .expect("link graph construction guarantees at least one page"))
    .clone();

    let mut ranks: RankTable = graph.pages().map(|page| (page.clone(), 0.0)).collect();
    let increment = 1.0 / config.samples as f64;

    for _ in 0..config.samples {
        let distribution = super::transition_model(graph, &current, config.damping)?;
        let weighted: Vec<(PageId, f64)> = distribution.into_iter().collect();
        let next = weighted_sample(rng, &weighted)
            .expect("transition distribution covers the whole non-empty universe");

        *ranks
            .get_mut(&next)
            .expect("transition model only yields pages of the graph") += increment;
        current = next;
    }

    Ok(ranks)
}
