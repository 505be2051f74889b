//! Hazard-rate bootstrap from a CDS term structure.
//!
//! Tenors are processed in ascending order; at each step the hazard on the
//! newest segment is the only unknown and is solved so that the CDS premium
//! and protection legs have equal present value. Both legs are evaluated on
//! a shared quarterly accrual grid with pure year-fraction accruals:
//!
//! - premium leg: `spread * dt * S(t_k) * D(t_k)` per period
//! - protection leg: `(1 - R) * (S(t_{k-1}) - S(t_k)) * D(t_k)` per period
//!
//! The discretized protection leg (rather than the closed exponential
//! integral) keeps the two legs on one grid, so the discretization error
//! cancels to first order in the leg-parity equation. The solver converges
//! on the *relative* leg mismatch, which is what the configured tolerance
//! bounds.

use log::{debug, info};

use cdsbasis_core::{AnalyticsConfig, MarketSnapshot, SnapshotError};
use cdsbasis_math::solvers::{brent, SolverConfig};

use crate::discount::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::survival::SurvivalCurve;

/// Lower bound of the hazard search bracket.
const MIN_HAZARD: f64 = 1e-6;

/// Upper bound of the hazard search bracket.
const MAX_HAZARD: f64 = 2.0;

/// Accrual period of the CDS legs in years (quarterly).
const ACCRUAL_STEP: f64 = 0.25;

/// Period boundaries `0 = t_0 < t_1 < ... < t_m = tenor` in quarterly
/// steps; a tenor off the quarterly grid gets a short final period.
fn accrual_grid(tenor: f64) -> Vec<f64> {
    let mut grid = vec![0.0];
    let mut t = ACCRUAL_STEP;
    while t < tenor - 1e-9 {
        grid.push(t);
        t += ACCRUAL_STEP;
    }
    grid.push(tenor);
    grid
}

/// Premium and protection leg PVs for given survival probabilities at the
/// grid points.
fn leg_pvs(
    grid: &[f64],
    survival: impl Fn(usize) -> f64,
    dfs: &[f64],
    spread: f64,
    recovery: f64,
) -> (f64, f64) {
    let mut premium = 0.0;
    let mut protection = 0.0;

    for k in 1..grid.len() {
        let dt = grid[k] - grid[k - 1];
        let s_t = survival(k);
        let s_prev = survival(k - 1);

        premium += spread * dt * s_t * dfs[k];
        protection += (1.0 - recovery) * (s_prev - s_t) * dfs[k];
    }

    (premium, protection)
}

/// Bootstraps a survival curve from the snapshot's CDS term structure.
///
/// Validates the snapshot, then solves each segment hazard in ascending
/// tenor order by Brent search over `[1e-6, 2.0]`; survival is propagated
/// as `S(t_i) = S(t_{i-1}) * exp(-lambda_i * dt_i)`. A single-tenor curve
/// is valid. The finished curve is re-validated before being returned.
///
/// # Errors
///
/// - [`CurveError::Snapshot`] when the snapshot fails validation
/// - [`CurveError::CalibrationFailed`] when a segment solve cannot bracket
///   a root (for example an inverted CDS curve that would need a negative
///   hazard) or exhausts its iteration budget
/// - [`CurveError::NonMonotonicSurvival`] when the resulting curve violates
///   its invariants
pub fn bootstrap(snapshot: &MarketSnapshot, config: &AnalyticsConfig) -> CurveResult<SurvivalCurve> {
    snapshot.validate()?;

    let recovery = snapshot.recovery_or(config.recovery_rate_default);
    if !(0.0..=1.0).contains(&recovery) {
        return Err(SnapshotError::RecoveryOutOfRange { value: recovery }.into());
    }

    let discount = DiscountCurve::from_points(&snapshot.risk_free, config.discount_interpolation)?;
    let solver = SolverConfig::new(
        config.root_solver_tolerance,
        config.root_solver_max_iterations,
    );

    info!(
        "bootstrapping {} CDS tenors for {} (recovery {:.1}%)",
        snapshot.cds_curve.len(),
        snapshot.ticker,
        recovery * 100.0
    );

    let mut solved: Vec<(f64, f64)> = Vec::with_capacity(snapshot.cds_curve.len());

    for quote in &snapshot.cds_curve {
        let tenor = quote.tenor;
        let spread = quote.spread();

        let grid = accrual_grid(tenor);
        let dfs = grid
            .iter()
            .map(|t| discount.discount_factor(*t))
            .collect::<CurveResult<Vec<f64>>>()?;

        // Survival is pinned up to the previous tenor; beyond it the trial
        // hazard governs.
        let partial = match solved.is_empty() {
            true => None,
            false => Some(SurvivalCurve::from_hazards(&solved)?),
        };
        let prev_tenor = solved.last().map_or(0.0, |(t, _)| *t);
        let s_prev_end = partial
            .as_ref()
            .map_or(1.0, |c| c.survival_probability(prev_tenor));
        let pinned: Vec<Option<f64>> = grid
            .iter()
            .map(|t| {
                (*t <= prev_tenor)
                    .then(|| partial.as_ref().map_or(1.0, |c| c.survival_probability(*t)))
            })
            .collect();

        let objective = |lambda: f64| {
            let survival = |k: usize| {
                pinned[k]
                    .unwrap_or_else(|| s_prev_end * (-lambda * (grid[k] - prev_tenor)).exp())
            };
            let (premium, protection) = leg_pvs(&grid, survival, &dfs, spread, recovery);
            (premium - protection) / premium.abs().max(protection.abs()).max(f64::MIN_POSITIVE)
        };

        let result = brent(objective, MIN_HAZARD, MAX_HAZARD, &solver)
            .map_err(|source| CurveError::CalibrationFailed { tenor, source })?;

        debug!(
            "tenor {tenor}y: lambda = {:.6} ({} iterations, residual {:.2e})",
            result.root, result.iterations, result.residual
        );

        solved.push((tenor, result.root));
    }

    let curve = SurvivalCurve::from_hazards(&solved)?;
    info!(
        "bootstrap complete: S({:.0}y) = {:.4}",
        curve.max_tenor(),
        curve.survival_probability(curve.max_tenor())
    );
    Ok(curve)
}

/// Premium and protection leg PVs of a CDS priced on a finished survival
/// curve.
///
/// Used to verify leg parity of a bootstrapped curve against the quotes it
/// was calibrated to; `spread` is a decimal (0.0080 for 80 bps).
///
/// # Errors
///
/// Propagates discount-curve query failures.
pub fn cds_leg_pvs(
    curve: &SurvivalCurve,
    discount: &DiscountCurve,
    tenor: f64,
    spread: f64,
    recovery: f64,
) -> CurveResult<(f64, f64)> {
    let grid = accrual_grid(tenor);
    let dfs = grid
        .iter()
        .map(|t| discount.discount_factor(*t))
        .collect::<CurveResult<Vec<f64>>>()?;

    let survival = |k: usize| curve.survival_probability(grid[k]);
    Ok(leg_pvs(&grid, survival, &dfs, spread, recovery))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cdsbasis_core::source::{FixtureSource, SnapshotSource};
    use cdsbasis_core::CdsQuote;

    fn snapshot() -> MarketSnapshot {
        FixtureSource::new().snapshot("INTC").unwrap()
    }

    #[test]
    fn fixture_curve_bootstraps() {
        let snapshot = snapshot();
        let curve = bootstrap(&snapshot, &AnalyticsConfig::default()).unwrap();

        let hazards: Vec<f64> = curve.nodes().iter().map(|n| n.hazard).collect();
        let expected = [0.013311, 0.021028, 0.032122, 0.037311, 0.041320];
        for (got, want) in hazards.iter().zip(expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-3);
        }

        let survivals: Vec<f64> = curve.nodes().iter().map(|n| n.survival).collect();
        let expected_s = [0.986777, 0.946137, 0.887265, 0.823465, 0.727461];
        for (got, want) in survivals.iter().zip(expected_s) {
            assert_relative_eq!(*got, want, max_relative = 1e-4);
        }
    }

    #[test]
    fn bootstrapped_curve_reprices_its_quotes() {
        let snapshot = snapshot();
        let config = AnalyticsConfig::default();
        let curve = bootstrap(&snapshot, &config).unwrap();
        let discount =
            DiscountCurve::from_points(&snapshot.risk_free, config.discount_interpolation).unwrap();

        for quote in &snapshot.cds_curve {
            let (premium, protection) = cds_leg_pvs(
                &curve,
                &discount,
                quote.tenor,
                quote.spread(),
                snapshot.recovery_or(config.recovery_rate_default),
            )
            .unwrap();

            let mismatch = (premium - protection).abs() / premium.abs().max(protection.abs());
            assert!(
                mismatch <= 1e-6,
                "leg parity violated at {}y: {mismatch:.2e}",
                quote.tenor
            );
        }
    }

    #[test]
    fn single_tenor_curve_bootstraps() {
        let mut snapshot = snapshot();
        snapshot.cds_curve = vec![CdsQuote::new(5.0, 140.0)];

        let curve = bootstrap(&snapshot, &AnalyticsConfig::default()).unwrap();

        assert_eq!(curve.nodes().len(), 1);
        // Close to the credit-triangle approximation s / (1 - R).
        assert_relative_eq!(curve.nodes()[0].hazard, 0.023266, max_relative = 1e-3);
    }

    #[test]
    fn survival_monotone_on_fixture() {
        let curve = bootstrap(&snapshot(), &AnalyticsConfig::default()).unwrap();

        let mut prev = 1.0;
        for node in curve.nodes() {
            assert!(node.survival <= prev && node.survival > 0.0);
            prev = node.survival;
        }
    }

    #[test]
    fn empty_cds_curve_fails_validation() {
        let mut snapshot = snapshot();
        snapshot.cds_curve.clear();

        let result = bootstrap(&snapshot, &AnalyticsConfig::default());
        assert!(matches!(
            result,
            Err(CurveError::Snapshot(SnapshotError::EmptyCdsCurve))
        ));
    }

    #[test]
    fn non_ascending_tenors_fail_validation() {
        let mut snapshot = snapshot();
        snapshot.cds_curve[1].tenor = 0.5;

        let result = bootstrap(&snapshot, &AnalyticsConfig::default());
        assert!(matches!(
            result,
            Err(CurveError::Snapshot(
                SnapshotError::NonAscendingCdsTenors { .. }
            ))
        ));
    }

    #[test]
    fn steeply_inverted_curve_fails_calibration() {
        let mut snapshot = snapshot();
        // The 5y segment would need a negative hazard to reprice 20bps
        // after a 400bps first year; the bracket excludes that.
        snapshot.cds_curve = vec![CdsQuote::new(1.0, 400.0), CdsQuote::new(5.0, 20.0)];

        let result = bootstrap(&snapshot, &AnalyticsConfig::default());
        assert!(matches!(
            result,
            Err(CurveError::CalibrationFailed { tenor, .. }) if (tenor - 5.0).abs() < 1e-12
        ));
    }

    #[test]
    fn off_grid_tenor_gets_short_final_period() {
        let grid = accrual_grid(1.1);
        assert_eq!(grid.len(), 6);
        assert_relative_eq!(grid[4], 1.0, epsilon = 1e-12);
        assert_relative_eq!(grid[5], 1.1, epsilon = 1e-12);
    }
}
