//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Keeps a sign-changing bracket at all times and, per step, attempts inverse
/// quadratic interpolation, then a secant step, and falls back to bisection
/// whenever the candidate would leave the safe region. Convergence is
/// declared when the residual drops below [`SolverConfig::tolerance`].
///
/// Requires `f(a)` and `f(b)` to have opposite signs.
///
/// # Errors
///
/// [`MathError::InvalidBracket`] when the bracket has no sign change, and
/// [`MathError::ConvergenceFailed`] when the iteration budget runs out or
/// the bracket collapses to machine precision with the residual still above
/// tolerance.
///
/// # Example
///
/// ```rust
/// use cdsbasis_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    // Keep b as the best estimate: |f(b)| <= |f(a)|.
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        if fb.abs() < config.tolerance {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        // Bracket collapsed to machine precision without meeting the
        // residual tolerance: the objective cannot be resolved further.
        if (b - a).abs() < 4.0 * f64::EPSILON * (b.abs() + 1.0) {
            return Err(MathError::convergence_failed(iteration, fb.abs()));
        }

        let mut use_bisection = true;
        let mut s = 0.0;

        if (fa - fc).abs() > f64::EPSILON && (fb - fc).abs() > f64::EPSILON {
            // Inverse quadratic interpolation through (a, fa), (b, fb), (c, fc).
            let r = fb / fc;
            let p = fa / fc;
            let q = fa / fb;

            s = b
                - (q * (q - r) * (b - a) + (1.0 - r) * (b - c) * p)
                    / ((q - 1.0) * (r - 1.0) * (p - 1.0));

            let m = (a + b) / 2.0;
            if s > m.min(b) && s < m.max(b) && (s - b).abs() < e.abs() / 2.0 {
                use_bisection = false;
            }
        } else if (fb - fa).abs() > f64::EPSILON {
            // Secant step.
            s = b - fb * (b - a) / (fb - fa);

            let m = (a + b) / 2.0;
            if s > m.min(b) && s < m.max(b) && (s - b).abs() < e.abs() / 2.0 {
                use_bisection = false;
            }
        }

        if use_bisection {
            s = (a + b) / 2.0;
            e = b - a;
            d = e;
        } else {
            e = d;
            d = s - b;
        }

        c = b;
        fc = fb;

        let fs = f(s);

        if fa * fs < 0.0 {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }

        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn finds_sqrt_two() {
        let f = |x: f64| x * x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn finds_cubic_root() {
        let f = |x: f64| x * x * x - x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-10);
        assert_relative_eq!(result.root, 1.521_379_706_804_568, epsilon = 1e-9);
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let f = |x: f64| x * x - 2.0;

        let result = brent(f, 2.0, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn respects_iteration_cap() {
        let f = |x: f64| x.tanh();
        let config = SolverConfig::new(1e-300, 3);

        let result = brent(f, -1.0, 2.0, &config);

        assert!(matches!(result, Err(MathError::ConvergenceFailed { .. })));
    }

    #[test]
    fn converges_faster_than_bisection_budget() {
        let f = |x: f64| x * x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        // Bisection would need ~34 iterations for 1e-10 on a unit bracket.
        assert!(result.iterations < 20);
    }

    #[test]
    fn handles_flat_side_bracket() {
        // Root close to the left endpoint; tests the secant/bisection guards.
        let f = |x: f64| (x - 1.000_1) * (x + 10.0);

        let result = brent(f, 1.0, 5.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 1.000_1, epsilon = 1e-8);
    }

    mod properties {
        use super::*;
        use crate::solvers::bisection;
        use proptest::prelude::*;

        proptest! {
            /// Any root strictly inside the bracket is found with a
            /// residual below tolerance.
            #[test]
            fn finds_interior_roots(root in 0.01_f64..2.99) {
                let f = |x: f64| (x - root) * ((x - root).abs() + 1.0);
                let result = brent(f, 0.0, 3.0, &SolverConfig::default()).unwrap();

                prop_assert!(f(result.root).abs() < 1e-10);
                prop_assert!((result.root - root).abs() < 1e-6);
            }

            /// Brent and bisection agree wherever both converge.
            #[test]
            fn agrees_with_bisection(root in 0.1_f64..1.9, scale in 0.5_f64..5.0) {
                let f = |x: f64| scale * (x - root);
                let config = SolverConfig::new(1e-10, 200);

                let b = brent(f, 0.0, 2.0, &config).unwrap();
                let bi = bisection(f, 0.0, 2.0, &config).unwrap();

                prop_assert!((b.root - bi.root).abs() < 1e-7);
            }
        }
    }
}
