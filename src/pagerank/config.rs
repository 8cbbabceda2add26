//! Configuration for the rank estimators.
//!
//! The reference constants (damping 0.85, 10 000 samples, 0.001 tolerance)
//! live here as explicit defaults instead of ambient globals, so callers
//! always pass configuration into the estimators by value.

use crate::{Error, Result};

/// Configuration shared by both rank estimators.
///
/// # Examples
///
/// ```
/// use gridrank::pagerank::RankConfig;
///
/// let config = RankConfig::new()
///     .with_damping(0.9)
///     .with_samples(50_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    /// Probability of following an actual outbound link rather than
    /// teleporting uniformly; must lie in (0, 1)
    pub damping: f64,
    /// Number of random-walk steps drawn by the Monte Carlo estimator
    pub samples: usize,
    /// Maximum per-page change below which iteration stops
    pub tolerance: f64,
    /// Safety cap on solver iterations; convergence is contraction-
    /// guaranteed, the cap only guards against pathological inputs
    pub max_iterations: usize,
}

impl RankConfig {
    /// Create a configuration with the reference defaults.
    pub fn new() -> Self {
        RankConfig {
            damping: 0.85,
            samples: 10_000,
            tolerance: 0.001,
            max_iterations: 100_000,
        }
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the Monte Carlo sample count.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration safety cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Check that the configuration is usable by the estimators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the damping factor is outside
    /// `(0, 1)`, the sample count is zero, or the tolerance is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || self.damping <= 0.0 || self.damping >= 1.0 {
            return Err(Error::InvalidConfig {
                message: format!("damping factor {} must lie in (0, 1)", self.damping),
            });
        }
        if self.samples == 0 {
            return Err(Error::InvalidConfig {
                message: "sample count must be positive".to_string(),
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!("tolerance {} must be positive and finite", self.tolerance),
            });
        }
        Ok(())
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self::new()
    }
}
