//! Risk-free discount curve.

use cdsbasis_core::RatePoint;
use cdsbasis_math::interpolation::{
    InterpolationMethod, Interpolator, LinearInterpolator, LogLinearInterpolator,
};

use crate::error::{CurveError, CurveResult};

/// The interpolating backend, fixed at construction.
#[derive(Debug, Clone)]
enum Scheme {
    /// Flat curve from a single quoted point.
    Flat(f64),
    /// Linear interpolation on zero rates.
    LinearZero(LinearInterpolator),
    /// Log-linear interpolation on discount factors, anchored at DF(0) = 1.
    LogLinearDiscount {
        interp: LogLinearInterpolator,
        last_tenor: f64,
        last_rate: f64,
    },
}

/// Risk-free zero curve with continuously-compounded rates.
///
/// The interpolation scheme is part of the documented convention and fixed
/// when the curve is built ([`InterpolationMethod::LinearZero`] by default;
/// log-linear on discount factors as the alternative). Queries before the
/// first pillar or beyond the last use flat extrapolation of the endpoint
/// zero rate, an explicit policy rather than a silent default.
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    tenors: Vec<f64>,
    zero_rates: Vec<f64>,
    method: InterpolationMethod,
    scheme: Scheme,
}

impl DiscountCurve {
    /// Builds a discount curve from quoted zero-rate points.
    ///
    /// # Errors
    ///
    /// [`CurveError::EmptyCurve`] without points,
    /// [`CurveError::NonAscendingTenors`] when tenors are not strictly
    /// ascending.
    pub fn from_points(points: &[RatePoint], method: InterpolationMethod) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        for (i, point) in points.iter().enumerate().skip(1) {
            if point.tenor <= points[i - 1].tenor {
                return Err(CurveError::NonAscendingTenors {
                    index: i,
                    prev: points[i - 1].tenor,
                    current: point.tenor,
                });
            }
        }

        let tenors: Vec<f64> = points.iter().map(|p| p.tenor).collect();
        let zero_rates: Vec<f64> = points.iter().map(|p| p.zero_rate).collect();

        let scheme = Self::build_scheme(&tenors, &zero_rates, method)?;

        Ok(Self {
            tenors,
            zero_rates,
            method,
            scheme,
        })
    }

    fn build_scheme(
        tenors: &[f64],
        zero_rates: &[f64],
        method: InterpolationMethod,
    ) -> CurveResult<Scheme> {
        if tenors.len() == 1 {
            return Ok(Scheme::Flat(zero_rates[0]));
        }

        match method {
            InterpolationMethod::LinearZero => {
                let interp = LinearInterpolator::new(tenors.to_vec(), zero_rates.to_vec())?
                    .with_extrapolation();
                Ok(Scheme::LinearZero(interp))
            }
            InterpolationMethod::LogLinearDiscount => {
                // Anchor at DF(0) = 1 so the short end interpolates from the
                // origin instead of extrapolating.
                let mut xs = Vec::with_capacity(tenors.len() + 1);
                let mut dfs = Vec::with_capacity(tenors.len() + 1);
                xs.push(0.0);
                dfs.push(1.0);
                for (t, r) in tenors.iter().zip(zero_rates) {
                    xs.push(*t);
                    dfs.push((-r * t).exp());
                }
                let interp = LogLinearInterpolator::new(xs, dfs)?;
                Ok(Scheme::LogLinearDiscount {
                    interp,
                    last_tenor: tenors[tenors.len() - 1],
                    last_rate: zero_rates[zero_rates.len() - 1],
                })
            }
        }
    }

    /// The quoted pillar tenors.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// The interpolation scheme in force.
    #[must_use]
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// Last quoted pillar tenor.
    #[must_use]
    pub fn max_tenor(&self) -> f64 {
        self.tenors[self.tenors.len() - 1]
    }

    /// Continuously-compounded zero rate at time `t` (years).
    ///
    /// # Errors
    ///
    /// Propagates interpolation failures; the flat-endpoint extrapolation
    /// policy means out-of-range queries succeed by design.
    pub fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        match &self.scheme {
            Scheme::Flat(rate) => Ok(*rate),
            Scheme::LinearZero(interp) => Ok(interp.interpolate(t)?),
            Scheme::LogLinearDiscount {
                interp,
                last_tenor,
                last_rate,
            } => {
                if t <= 0.0 {
                    return Ok(self.zero_rates[0]);
                }
                if t >= *last_tenor {
                    return Ok(*last_rate);
                }
                let df = interp.interpolate(t)?;
                Ok(-df.ln() / t)
            }
        }
    }

    /// Discount factor at time `t` (years); `DF(t) = exp(-z(t) * t)`.
    ///
    /// # Errors
    ///
    /// Propagates interpolation failures.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        let rate = self.zero_rate(t)?;
        Ok((-rate * t).exp())
    }

    /// Returns a copy of the curve with every zero rate shifted in parallel
    /// by `shift_bps` basis points.
    ///
    /// # Errors
    ///
    /// Only if rebuilding the interpolator fails, which cannot happen for a
    /// curve that was valid at construction.
    pub fn parallel_shift(&self, shift_bps: f64) -> CurveResult<Self> {
        let shift = shift_bps / 10_000.0;
        let shifted: Vec<f64> = self.zero_rates.iter().map(|r| r + shift).collect();
        let scheme = Self::build_scheme(&self.tenors, &shifted, self.method)?;

        Ok(Self {
            tenors: self.tenors.clone(),
            zero_rates: shifted,
            method: self.method,
            scheme,
        })
    }
}
