//! Log-linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{find_segment, validate_points, Interpolator};

/// Log-linear interpolation: linear in `ln(y)`.
///
/// The standard scheme for discount factors, where a straight line in log
/// space is equivalent to a piecewise-constant instantaneous forward rate.
/// All ordinates must be strictly positive.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    log_ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Fails on fewer than two points, mismatched lengths, non-ascending
    /// abscissae, or any non-positive ordinate.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_points(&xs, &ys)?;
        if let Some(y) = ys.iter().find(|y| **y <= 0.0) {
            return Err(MathError::invalid_input(format!(
                "log-linear interpolation requires positive values, got {y}"
            )));
        }
        let log_ys = ys.iter().map(|y| y.ln()).collect();
        Ok(Self {
            xs,
            log_ys,
            allow_extrapolation: false,
        })
    }

    /// Enables flat extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let (min, max) = (self.xs[0], self.xs[self.xs.len() - 1]);

        if x < min || x > max {
            if !self.allow_extrapolation {
                return Err(MathError::ExtrapolationNotAllowed { x, min, max });
            }
            return Ok(if x < min {
                self.log_ys[0].exp()
            } else {
                self.log_ys[self.log_ys.len() - 1].exp()
            });
        }

        let i = find_segment(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (l0, l1) = (self.log_ys[i], self.log_ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok((l0 + t * (l1 - l0)).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_constant_forward_rate() {
        // DF nodes from a flat 5% curve; log-linear must reproduce the
        // same curve everywhere in between.
        let xs = vec![0.0, 1.0, 2.0, 5.0];
        let ys: Vec<f64> = xs.iter().map(|t| (-0.05_f64 * t).exp()).collect();

        let interp = LogLinearInterpolator::new(xs, ys).unwrap();

        for t in [0.3, 0.5, 1.7, 3.2, 4.9] {
            let df = interp.interpolate(t).unwrap();
            assert_relative_eq!(df, (-0.05_f64 * t).exp(), epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_non_positive_values() {
        let result = LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.0]);
        assert!(result.is_err());
    }

    #[test]
    fn refuses_extrapolation_by_default() {
        let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.95]).unwrap();
        assert!(interp.interpolate(2.0).is_err());
    }
}
