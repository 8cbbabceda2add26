//! Utility functions for the gridrank crate

use rand::{Rng, distr::StandardUniform, prelude::IndexedRandom};

/// Performs weighted random sampling from a collection of items.
///
/// The standard algorithm: draw a threshold in `[0, total)` and walk the
/// items, subtracting weights until the threshold is crossed.
///
/// # Behavior
///
/// - If all weights are zero or negative, falls back to uniform selection
/// - The last item is returned if the threshold never crosses zero
///   (numerical stability)
/// - Returns `None` only for an empty slice
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use gridrank::utils::weighted_sample;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let items = vec![("a", 1.0), ("b", 2.0), ("c", 1.0)];
/// let sampled = weighted_sample(&mut rng, &items);
/// assert!(sampled.is_some());
/// ```
pub fn weighted_sample<R, T>(rng: &mut R, items: &[(T, f64)]) -> Option<T>
where
    R: Rng,
    T: Clone,
{
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|(_, w)| *w).sum();

    if total <= 0.0 {
        return items.choose(rng).map(|(item, _)| item.clone());
    }

    let mut threshold = rng.sample::<f64, _>(StandardUniform) * total;

    for (item, weight) in items {
        if threshold < *weight {
            return Some(item.clone());
        }
        threshold -= weight;
    }

    items.last().map(|(item, _)| item.clone())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_weighted_sample_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<(i32, f64)> = vec![];
        assert_eq!(weighted_sample(&mut rng, &items), None);
    }

    #[test]
    fn test_weighted_sample_single_item() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 1.0)];
        assert_eq!(weighted_sample(&mut rng, &items), Some("a"));
    }

    #[test]
    fn test_weighted_sample_zero_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 0.0), ("b", 0.0), ("c", 0.0)];
        // Should fall back to uniform sampling
        let result = weighted_sample(&mut rng, &items);
        assert!(result.is_some());
    }

    #[test]
    fn test_weighted_sample_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 1.0), ("b", 2.0), ("c", 1.0)];

        let mut counts = std::collections::HashMap::new();
        for _ in 0..1000 {
            let sample = weighted_sample(&mut rng, &items).unwrap();
            *counts.entry(sample).or_insert(0) += 1;
        }

        let count_a = counts.get(&"a").copied().unwrap_or(0);
        let count_b = counts.get(&"b").copied().unwrap_or(0);
        let count_c = counts.get(&"c").copied().unwrap_or(0);

        assert!(count_b > count_a, "b should appear more than a");
        assert!(count_b > count_c, "b should appear more than c");
        assert!(count_a > 0 && count_c > 0, "all items should appear");
    }

    #[test]
    fn test_weighted_sample_deterministic() {
        let items = vec![("a", 1.0), ("b", 2.0), ("c", 1.0)];

        let mut rng1 = StdRng::seed_from_u64(12345);
        let result1 = weighted_sample(&mut rng1, &items);

        let mut rng2 = StdRng::seed_from_u64(12345);
        let result2 = weighted_sample(&mut rng2, &items);

        assert_eq!(result1, result2);
    }
}
