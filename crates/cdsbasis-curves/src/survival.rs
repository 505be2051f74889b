//! Bootstrapped survival curve.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// One node of the survival term structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurvivalNode {
    /// Node tenor in years.
    pub tenor: f64,
    /// Hazard rate on the segment ending at this node.
    pub hazard: f64,
    /// Survival probability at this node.
    pub survival: f64,
}

/// Credit survival curve with piecewise-constant hazard rates.
///
/// Built once per snapshot by the bootstrap and immutable afterwards.
/// Invariants, checked at construction:
///
/// - node tenors strictly ascending and positive
/// - every hazard rate non-negative
/// - `S(0) = 1` and survival strictly non-increasing, always in `(0, 1]`
///
/// Queries between nodes integrate the piecewise-constant hazard; queries
/// beyond the last node extrapolate flat-forward with the last segment's
/// hazard. Both policies are deliberate, so [`survival_probability`] is
/// total over `t >= 0`.
///
/// [`survival_probability`]: SurvivalCurve::survival_probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalCurve {
    nodes: Vec<SurvivalNode>,
}

impl SurvivalCurve {
    /// Builds a curve from `(tenor, hazard)` segments, deriving survival
    /// probabilities as `S(t_i) = S(t_{i-1}) * exp(-lambda_i * dt_i)`.
    ///
    /// # Errors
    ///
    /// [`CurveError`] when the segments violate any curve invariant.
    pub fn from_hazards(segments: &[(f64, f64)]) -> CurveResult<Self> {
        if segments.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        let mut nodes = Vec::with_capacity(segments.len());
        let mut prev_tenor = 0.0;
        let mut survival = 1.0;

        for (i, &(tenor, hazard)) in segments.iter().enumerate() {
            if tenor <= prev_tenor {
                return Err(CurveError::NonAscendingTenors {
                    index: i,
                    prev: prev_tenor,
                    current: tenor,
                });
            }
            if hazard < 0.0 || !hazard.is_finite() {
                return Err(CurveError::InvalidNode {
                    tenor,
                    reason: format!("hazard rate must be finite and non-negative, got {hazard}"),
                });
            }

            let prev_survival = survival;
            survival *= (-hazard * (tenor - prev_tenor)).exp();

            if survival <= 0.0 || survival > prev_survival {
                return Err(CurveError::NonMonotonicSurvival {
                    tenor,
                    survival,
                    prev: prev_survival,
                });
            }

            nodes.push(SurvivalNode {
                tenor,
                hazard,
                survival,
            });
            prev_tenor = tenor;
        }

        Ok(Self { nodes })
    }

    /// The curve nodes, ascending by tenor.
    #[must_use]
    pub fn nodes(&self) -> &[SurvivalNode] {
        &self.nodes
    }

    /// Last node tenor.
    #[must_use]
    pub fn max_tenor(&self) -> f64 {
        self.nodes[self.nodes.len() - 1].tenor
    }

    /// Cumulative hazard `H(t) = integral of lambda` over `[0, t]`.
    fn cumulative_hazard(&self, t: f64) -> f64 {
        let mut cumulative = 0.0;
        let mut prev_tenor = 0.0;

        for node in &self.nodes {
            if t <= node.tenor {
                return cumulative + node.hazard * (t - prev_tenor);
            }
            cumulative += node.hazard * (node.tenor - prev_tenor);
            prev_tenor = node.tenor;
        }

        // Flat-forward extrapolation with the last segment's hazard.
        let last = &self.nodes[self.nodes.len() - 1];
        cumulative + last.hazard * (t - prev_tenor)
    }

    /// Survival probability `S(t) = exp(-H(t))`; `S(t) = 1` for `t <= 0`.
    #[must_use]
    pub fn survival_probability(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        (-self.cumulative_hazard(t)).exp()
    }

    /// Cumulative default probability `1 - S(t)`.
    #[must_use]
    pub fn default_probability(&self, t: f64) -> f64 {
        1.0 - self.survival_probability(t)
    }

    /// Average forward hazard rate over `[t1, t2]`:
    /// `-ln(S(t2) / S(t1)) / (t2 - t1)`.
    ///
    /// # Errors
    ///
    /// [`CurveError::TenorOutOfRange`] when `t2 <= t1`.
    pub fn forward_hazard(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 <= t1 {
            return Err(CurveError::TenorOutOfRange {
                requested: t2,
                min: t1,
                max: f64::INFINITY,
            });
        }
        let s1 = self.survival_probability(t1);
        let s2 = self.survival_probability(t2);
        Ok(-(s2 / s1).ln() / (t2 - t1))
    }
}
