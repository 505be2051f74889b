//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{find_segment, validate_points, Interpolator};

/// Linear interpolation between data points.
///
/// With extrapolation enabled, queries outside the data range return the
/// nearest endpoint value (flat extrapolation), which is the convention for
/// zero-rate curves in this workspace.
///
/// # Example
///
/// ```rust
/// use cdsbasis_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![0.04, 0.05]).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!((y - 0.045).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than two points, lengths differ, or the
    /// abscissae are not strictly ascending.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_points(&xs, &ys)?;
        Ok(Self {
            xs,
            ys,
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

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let (min, max) = (self.xs[0], self.xs[self.xs.len() - 1]);

        if x < min || x > max {
            if !self.allow_extrapolation {
                return Err(MathError::ExtrapolationNotAllowed { x, min, max });
            }
            // Flat extrapolation from the nearest endpoint.
            return Ok(if x < min {
                self.ys[0]
            } else {
                self.ys[self.ys.len() - 1]
            });
        }

        let i = find_segment(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn interp() -> LinearInterpolator {
        LinearInterpolator::new(vec![0.25, 1.0, 5.0], vec![0.0495, 0.0480, 0.0440]).unwrap()
    }

    #[test]
    fn interpolates_between_nodes() {
        let y = interp().interpolate(0.625).unwrap();
        assert_relative_eq!(y, 0.048_75, epsilon = 1e-12);
    }

    #[test]
    fn hits_nodes_exactly() {
        let i = interp();
        assert_relative_eq!(i.interpolate(1.0).unwrap(), 0.0480, epsilon = 1e-15);
        assert_relative_eq!(i.interpolate(5.0).unwrap(), 0.0440, epsilon = 1e-15);
    }

    #[test]
    fn refuses_extrapolation_by_default() {
        let result = interp().interpolate(10.0);
        assert!(matches!(
            result,
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
    }

    #[test]
    fn flat_extrapolation_when_enabled() {
        let i = interp().with_extrapolation();
        assert_relative_eq!(i.interpolate(0.1).unwrap(), 0.0495, epsilon = 1e-15);
        assert_relative_eq!(i.interpolate(30.0).unwrap(), 0.0440, epsilon = 1e-15);
    }

    #[test]
    fn rejects_unsorted_points() {
        let result = LinearInterpolator::new(vec![1.0, 1.0], vec![0.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_single_point() {
        let result = LinearInterpolator::new(vec![1.0], vec![0.0]);
        assert!(matches!(
            result,
            Err(MathError::InsufficientData {
                required: 2,
                actual: 1
            })
        ));
    }
}
