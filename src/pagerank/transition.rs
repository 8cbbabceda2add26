//! Transition model of the random surfer.

use crate::{Error, Result};

use super::{Distribution, LinkGraph, PageId};

/// Probability distribution over the next page, given the surfer sits on
/// `page`.
///
/// For a page with outbound links, every page in the universe receives the
/// teleport share `(1 - damping) / N` and each linked page additionally
/// receives `damping / |links|`; the result sums to 1.
///
/// For a dangling page (no outbound links after corpus filtering) the
/// distribution is uniform `1 / N` over the whole universe. The damping
/// factor plays no role in this branch. The iterative solver handles
/// dangling mass differently; the two treatments are intentionally not
/// unified.
///
/// # Errors
///
/// Returns [`Error::UnknownPage`] if `page` is not part of the graph.
pub fn transition_model(graph: &LinkGraph, page: &PageId, damping: f64) -> Result<Distribution> {
    let links = graph.links(page).ok_or_else(|| Error::UnknownPage {
        page: page.to_string(),
    })?;
    let universe_size = graph.page_count() as f64;

    let distribution: Distribution = if links.is_empty() {
        graph
            .pages()
            .map(|p| (p.clone(), 1.0 / universe_size))
            .collect()
    } else {
        let base = (1.0 - damping) / universe_size;
        let link_share = damping / links.len() as f64;

        let mut distribution: Distribution =
            graph.pages().map(|p| (p.clone(), base)).collect();
        for target in links {
            if let Some(probability) = distribution.get_mut(target) {
                *probability += link_share;
            }
        }
        distribution
    };

    debug_assert!(
        (distribution.values().sum::<f64>() - 1.0).abs() < 1e-9,
        "transition distribution must sum to 1"
    );

    Ok(distribution)
}
