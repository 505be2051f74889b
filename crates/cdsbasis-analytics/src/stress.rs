//! Basis stress testing under spread and rate shocks.
//!
//! Each scenario is applied to a copy of the snapshot and the full
//! bootstrap-price-solve pipeline is re-run from scratch; no state leaks
//! between scenarios and the base snapshot is never mutated.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use cdsbasis_core::{AnalyticsConfig, MarketSnapshot};

use crate::basis::BasisResult;
use crate::error::AnalyticsError;
use crate::pipeline::analyze;

/// A parallel shock to the CDS curve and/or the risk-free curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    /// Scenario label for reporting.
    pub label: String,
    /// Parallel shift of every CDS quote, in basis points.
    pub cds_shift_bps: f64,
    /// Parallel shift of every risk-free zero rate, in basis points.
    pub rate_shift_bps: f64,
}

impl StressScenario {
    /// A pure CDS-curve shock.
    #[must_use]
    pub fn cds_parallel(shift_bps: f64) -> Self {
        Self {
            label: format!("CDS {shift_bps:+.0}bp"),
            cds_shift_bps: shift_bps,
            rate_shift_bps: 0.0,
        }
    }

    /// A pure risk-free-curve shock.
    #[must_use]
    pub fn rates_parallel(shift_bps: f64) -> Self {
        Self {
            label: format!("Rates {shift_bps:+.0}bp"),
            cds_shift_bps: 0.0,
            rate_shift_bps: shift_bps,
        }
    }

    /// A combined shock with a caller-chosen label.
    #[must_use]
    pub fn combined(label: impl Into<String>, cds_shift_bps: f64, rate_shift_bps: f64) -> Self {
        Self {
            label: label.into(),
            cds_shift_bps,
            rate_shift_bps,
        }
    }

    /// Applies the shock to a copy of the snapshot.
    #[must_use]
    pub fn apply(&self, snapshot: &MarketSnapshot) -> MarketSnapshot {
        let mut shocked = snapshot.clone();
        for quote in &mut shocked.cds_curve {
            quote.spread_bps += self.cds_shift_bps;
        }
        for point in &mut shocked.risk_free {
            point.zero_rate += self.rate_shift_bps / 10_000.0;
        }
        shocked
    }
}

/// The standard CDS shock ladder.
#[must_use]
pub fn default_scenarios() -> Vec<StressScenario> {
    [-50.0, -25.0, 0.0, 25.0, 50.0, 100.0]
        .into_iter()
        .map(StressScenario::cds_parallel)
        .collect()
}

/// One scenario's outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    /// Scenario label.
    pub label: String,
    /// Basis analysis under the shocked snapshot.
    pub basis: BasisResult,
}

/// Outcome of a stress run: completed scenarios plus per-scenario failures.
#[derive(Debug, Default)]
pub struct StressOutcome {
    /// Successful scenarios, in input order.
    pub results: Vec<StressResult>,
    /// Scenarios that failed, with their errors, in input order.
    pub failures: Vec<(String, AnalyticsError)>,
}

/// Re-runs the basis analysis under each scenario.
///
/// A failing scenario (for example a downward CDS shock that pushes a
/// quote non-positive) never aborts the run; its error is recorded in
/// [`StressOutcome::failures`] and the rest proceed.
#[must_use]
pub fn run_stress(
    snapshot: &MarketSnapshot,
    config: &AnalyticsConfig,
    scenarios: &[StressScenario],
) -> StressOutcome {
    let mut outcome = StressOutcome::default();

    for scenario in scenarios {
        let shocked = scenario.apply(snapshot);
        match analyze(&shocked, config) {
            Ok(analysis) => {
                info!(
                    "stress {}: basis {:.2} bps ({})",
                    scenario.label, analysis.basis.basis_bps, analysis.basis.signal
                );
                outcome.results.push(StressResult {
                    label: scenario.label.clone(),
                    basis: analysis.basis,
                });
            }
            Err(error) => {
                warn!("stress {} failed: {error}", scenario.label);
                outcome.failures.push((scenario.label.clone(), error));
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cdsbasis_core::source::{FixtureSource, SnapshotSource};

    use crate::basis::TradeSignal;

    fn snapshot() -> MarketSnapshot {
        FixtureSource::new().snapshot("INTC").unwrap()
    }

    #[test]
    fn apply_shifts_both_curves_and_leaves_base_untouched() {
        let base = snapshot();
        let scenario = StressScenario::combined("test", 25.0, 10.0);
        let shocked = scenario.apply(&base);

        assert_relative_eq!(shocked.cds_curve[0].spread_bps, 105.0, epsilon = 1e-12);
        assert_relative_eq!(
            shocked.risk_free[0].zero_rate,
            base.risk_free[0].zero_rate + 0.0010,
            epsilon = 1e-15
        );
        // The base snapshot is untouched.
        assert_relative_eq!(base.cds_curve[0].spread_bps, 80.0, epsilon = 1e-12);
    }

    #[test]
    fn wider_cds_moves_the_basis_up() {
        let config = AnalyticsConfig::default();
        let outcome = run_stress(
            &snapshot(),
            &config,
            &[
                StressScenario::cds_parallel(0.0),
                StressScenario::cds_parallel(50.0),
            ],
        );
        assert!(outcome.failures.is_empty());
        let results = outcome.results;

        // A pure CDS shock leaves the Z-spread alone and moves the basis
        // one for one.
        assert_relative_eq!(
            results[1].basis.basis_bps - results[0].basis.basis_bps,
            50.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            results[0].basis.z_spread_bps,
            results[1].basis.z_spread_bps,
            epsilon = 1e-6
        );
        assert_eq!(results[1].basis.signal, TradeSignal::BondRich);
    }

    #[test]
    fn rate_shock_moves_the_z_spread() {
        let config = AnalyticsConfig::default();
        let outcome = run_stress(
            &snapshot(),
            &config,
            &[
                StressScenario::rates_parallel(0.0),
                StressScenario::rates_parallel(-100.0),
            ],
        );
        assert!(outcome.failures.is_empty());
        let results = outcome.results;

        // Lower risk-free rates push more of the discounting onto the
        // spread, widening the solved Z-spread by about the same 100bps.
        let widening = results[1].basis.z_spread_bps - results[0].basis.z_spread_bps;
        assert!((widening - 100.0).abs() < 1.0);
    }

    #[test]
    fn failing_scenario_is_recorded_without_aborting_the_run() {
        let config = AnalyticsConfig::default();
        // The 1y quote at 80bps goes negative under the -100bp shock; the
        // surrounding scenarios must still complete.
        let outcome = run_stress(
            &snapshot(),
            &config,
            &[
                StressScenario::cds_parallel(0.0),
                StressScenario::cds_parallel(-100.0),
                StressScenario::cds_parallel(25.0),
            ],
        );

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, "CDS -100bp");
        let labels: Vec<&str> = outcome.results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["CDS +0bp", "CDS +25bp"]);
    }

    #[test]
    fn default_ladder_covers_both_directions() {
        let scenarios = default_scenarios();
        assert_eq!(scenarios.len(), 6);
        assert!(scenarios.iter().any(|s| s.cds_shift_bps < 0.0));
        assert!(scenarios.iter().any(|s| s.cds_shift_bps > 0.0));
    }
}
