//! Bracketed root-finding.
//!
//! Two solvers are provided:
//!
//! - [`brent`]: bisection combined with secant and inverse quadratic
//!   interpolation; superlinear on smooth functions, never worse than
//!   bisection. The default choice for every solve in this workspace.
//! - [`bisection`]: linear but unconditionally reliable; kept as the
//!   reference implementation and fallback.
//!
//! Both require a sign-changing bracket and are capped by
//! [`SolverConfig::max_iterations`]; convergence is declared on the residual
//! (`|f(x)| < tolerance`), so the tolerance carries the same units as the
//! objective function. A solver that exhausts its budget returns
//! [`MathError::ConvergenceFailed`] rather than the best guess so far.

mod bisection;
mod brent;

pub use bisection::bisection;
pub use brent::brent;

/// Default residual tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Residual tolerance: converged when `|f(x)| < tolerance`.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the residual tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a successful root-finding run.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Iterations consumed.
    pub iterations: u32,
    /// Residual at the root.
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builders() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn solvers_agree_on_smooth_function() {
        let f = |x: f64| x * x * x - x - 2.0;
        let config = SolverConfig::default();

        let b = brent(f, 1.0, 2.0, &config).unwrap();
        let bi = bisection(f, 1.0, 2.0, &config).unwrap();

        assert!((b.root - bi.root).abs() < 1e-8);
        assert!(b.iterations <= bi.iterations);
    }
}
