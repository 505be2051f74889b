//! Interpolation of discrete term-structure data.
//!
//! Two schemes are provided, matching the two ways a risk-free curve is
//! quoted:
//!
//! - [`LinearInterpolator`]: straight lines between points; used on zero
//!   rates.
//! - [`LogLinearInterpolator`]: linear in the logarithm of the ordinates;
//!   used on discount factors, where it corresponds to piecewise-constant
//!   forward rates.
//!
//! Both refuse to extrapolate unless [`with_extrapolation`] is called, in
//! which case queries outside the abscissa range extrapolate flat from the
//! nearest endpoint. Silent extrapolation is never performed.
//!
//! [`with_extrapolation`]: LinearInterpolator::with_extrapolation

mod linear;
mod log_linear;

pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;

use serde::{Deserialize, Serialize};

use crate::error::MathResult;

/// Trait implemented by all interpolators.
pub trait Interpolator {
    /// Returns the interpolated value at `x`.
    ///
    /// # Errors
    ///
    /// [`crate::MathError::ExtrapolationNotAllowed`] when `x` lies outside
    /// the data range and extrapolation was not enabled.
    fn interpolate(&self, x: f64) -> MathResult<f64>;
}

/// Interpolation scheme for the risk-free discount curve.
///
/// Selected by configuration and fixed for the lifetime of a curve; the
/// scheme is part of the documented pricing convention, never inferred from
/// the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpolationMethod {
    /// Linear interpolation on continuously-compounded zero rates.
    #[default]
    LinearZero,
    /// Log-linear interpolation on discount factors.
    LogLinearDiscount,
}

/// Validates a shared precondition of the interpolators: at least two
/// points, equal lengths, strictly ascending abscissae.
pub(crate) fn validate_points(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    use crate::error::MathError;

    if xs.len() < 2 {
        return Err(MathError::insufficient_data(2, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have the same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }
    }
    Ok(())
}

/// Binary search for the segment index `i` with `xs[i] <= x < xs[i+1]`,
/// clamped to the last segment.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => i.saturating_sub(1).min(xs.len() - 2),
    }
}
