//! Bisection root-finding.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding.
///
/// Halves a sign-changing bracket until the midpoint residual drops below
/// [`SolverConfig::tolerance`]. Linear convergence, but every step is
/// guaranteed to keep a valid bracket, which makes this the reference
/// implementation for the faster solvers.
///
/// # Errors
///
/// [`MathError::InvalidBracket`] when `f(a)` and `f(b)` share a sign,
/// [`MathError::ConvergenceFailed`] when the iteration budget runs out.
///
/// # Example
///
/// ```rust
/// use cdsbasis_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let config = SolverConfig::new(1e-9, 60);
/// let result = bisection(f, 1.0, 2.0, &config).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let fa = f(a);
    let fb = f(b);

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    if fa.abs() < config.tolerance {
        return Ok(SolverResult {
            root: a,
            iterations: 0,
            residual: fa,
        });
    }
    if fb.abs() < config.tolerance {
        return Ok(SolverResult {
            root: b,
            iterations: 0,
            residual: fb,
        });
    }

    let mut fa = fa;
    let mut fm = fb;

    for iteration in 0..config.max_iterations {
        let m = (a + b) / 2.0;
        fm = f(m);

        if fm.abs() < config.tolerance {
            return Ok(SolverResult {
                root: m,
                iterations: iteration + 1,
                residual: fm,
            });
        }

        if fa * fm < 0.0 {
            b = m;
        } else {
            a = m;
            fa = fm;
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fm.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn finds_sqrt_two() {
        let f = |x: f64| x * x - 2.0;
        let config = SolverConfig::new(1e-9, 80);

        let result = bisection(f, 1.0, 2.0, &config).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn accepts_root_at_endpoint() {
        let f = |x: f64| x;

        let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 0.0);
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let f = |x: f64| x * x + 1.0;

        let result = bisection(f, -1.0, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn fails_when_budget_exhausted() {
        let f = |x: f64| x * x * x;
        let config = SolverConfig::new(1e-15, 5);

        let result = bisection(f, -1.0, 2.0, &config);

        assert!(matches!(result, Err(MathError::ConvergenceFailed { .. })));
    }
}
