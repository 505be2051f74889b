//! Analysis configuration.

use serde::{Deserialize, Serialize};

use cdsbasis_math::interpolation::InterpolationMethod;

/// Configuration for one analysis run.
///
/// Owned by the caller and passed by value into each call; the core holds
/// no module-level defaults. `Default` gives the documented standard
/// conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Recovery rate used when the snapshot carries none.
    pub recovery_rate_default: f64,
    /// Neutral half-width for signal classification, in basis points.
    /// The boundary is inclusive: a basis of exactly ±ε is Neutral.
    pub basis_threshold_bps: f64,
    /// Residual tolerance for every root solve (relative leg mismatch in
    /// the bootstrap, price mismatch in the Z-spread solve).
    pub root_solver_tolerance: f64,
    /// Iteration cap enforced uniformly in every solver call.
    pub root_solver_max_iterations: u32,
    /// Interpolation scheme for the risk-free discount curve.
    pub discount_interpolation: InterpolationMethod,
    /// Parallel-shift size for bump-and-reprice risk metrics, in basis
    /// points.
    pub rate_bump_size_bps: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            recovery_rate_default: 0.40,
            basis_threshold_bps: 5.0,
            root_solver_tolerance: 1e-6,
            root_solver_max_iterations: 100,
            discount_interpolation: InterpolationMethod::LinearZero,
            rate_bump_size_bps: 1.0,
        }
    }
}

impl AnalyticsConfig {
    /// Sets the default recovery rate.
    #[must_use]
    pub fn with_recovery_rate_default(mut self, recovery: f64) -> Self {
        self.recovery_rate_default = recovery;
        self
    }

    /// Sets the neutral half-width in basis points.
    #[must_use]
    pub fn with_basis_threshold_bps(mut self, threshold: f64) -> Self {
        self.basis_threshold_bps = threshold;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_root_solver_tolerance(mut self, tolerance: f64) -> Self {
        self.root_solver_tolerance = tolerance;
        self
    }

    /// Sets the solver iteration cap.
    #[must_use]
    pub fn with_root_solver_max_iterations(mut self, max_iterations: u32) -> Self {
        self.root_solver_max_iterations = max_iterations;
        self
    }

    /// Sets the discount-curve interpolation scheme.
    #[must_use]
    pub fn with_discount_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.discount_interpolation = method;
        self
    }

    /// Sets the rate bump size in basis points.
    #[must_use]
    pub fn with_rate_bump_size_bps(mut self, bump_bps: f64) -> Self {
        self.rate_bump_size_bps = bump_bps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_conventions() {
        let config = AnalyticsConfig::default();
        assert!((config.recovery_rate_default - 0.40).abs() < f64::EPSILON);
        assert!((config.basis_threshold_bps - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.root_solver_max_iterations, 100);
        assert_eq!(
            config.discount_interpolation,
            InterpolationMethod::LinearZero
        );
    }

    #[test]
    fn builders_chain() {
        let config = AnalyticsConfig::default()
            .with_basis_threshold_bps(10.0)
            .with_rate_bump_size_bps(0.5);
        assert!((config.basis_threshold_bps - 10.0).abs() < f64::EPSILON);
        assert!((config.rate_bump_size_bps - 0.5).abs() < f64::EPSILON);
    }
}
