//! End-to-end analysis pipeline and parallel batch driver.
//!
//! `analyze` runs the whole chain for one snapshot: validate, bootstrap the
//! survival curve, generate the cash-flow schedule, price synthetically,
//! compute risk metrics, solve the Z-spread against the market dirty price
//! and classify the basis. Every step is a pure function of the snapshot
//! and the configuration, so batch runs parallelize trivially.

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use cdsbasis_core::{accrued_interest, cash_flow_schedule, AnalyticsConfig, MarketSnapshot};
use cdsbasis_curves::{bootstrap, DiscountCurve, SurvivalCurve};

use crate::basis::{compute_basis, BasisResult};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::{PriceResult, SyntheticPricer};
use crate::report::ReportRow;
use crate::risk::{risk_metrics, RiskMetrics};
use crate::zspread::ZSpreadCalculator;

/// Complete analysis output for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerAnalysis {
    /// Issuer ticker.
    pub ticker: String,
    /// Bootstrapped survival curve.
    pub survival: SurvivalCurve,
    /// Synthetic pricing result with per-flow detail.
    pub price: PriceResult,
    /// Bump-and-reprice rate risk metrics.
    pub risk: RiskMetrics,
    /// Z-spread, basis and signal.
    pub basis: BasisResult,
    /// Summary row for tabular output.
    pub report: ReportRow,
}

/// Runs the full pipeline for one snapshot.
///
/// # Errors
///
/// The first failing step's error: snapshot validation, curve calibration,
/// pricing, or the Z-spread solve.
pub fn analyze(
    snapshot: &MarketSnapshot,
    config: &AnalyticsConfig,
) -> AnalyticsResult<TickerAnalysis> {
    snapshot.validate()?;
    info!("analyzing {}", snapshot.ticker);

    let survival = bootstrap(snapshot, config)?;
    let discount = DiscountCurve::from_points(&snapshot.risk_free, config.discount_interpolation)
        .map_err(AnalyticsError::from)?;

    let flows = cash_flow_schedule(&snapshot.bond)?;
    let accrued = accrued_interest(&snapshot.bond)?;

    let price = SyntheticPricer::new(&discount, &survival).price(&flows, accrued)?;
    let risk = risk_metrics(&discount, &survival, &flows, accrued, config)?;

    let market_dirty = snapshot.bond.clean_price + accrued;
    let z = ZSpreadCalculator::new(&discount)
        .with_tolerance(config.root_solver_tolerance)
        .with_max_iterations(config.root_solver_max_iterations)
        .solve(&flows, market_dirty)?;

    let basis = compute_basis(
        &snapshot.cds_curve,
        snapshot.bond.years_to_maturity(),
        z * 10_000.0,
        config.basis_threshold_bps,
    )?;

    let report = ReportRow::new(&snapshot.ticker, snapshot.bond.clean_price, &price, &basis);

    Ok(TickerAnalysis {
        ticker: snapshot.ticker.clone(),
        survival,
        price,
        risk,
        basis,
        report,
    })
}

/// Outcome of a batch run: completed analyses plus per-ticker failures.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successful analyses, in input order.
    pub analyses: Vec<TickerAnalysis>,
    /// Tickers that failed, with their errors, in input order.
    pub failures: Vec<(String, AnalyticsError)>,
}

/// Analyzes every snapshot in parallel.
///
/// A failing ticker never aborts the batch; its error is recorded in
/// [`BatchOutcome::failures`] and the rest proceed.
#[must_use]
pub fn run_batch(snapshots: &[MarketSnapshot], config: &AnalyticsConfig) -> BatchOutcome {
    let results: Vec<(String, AnalyticsResult<TickerAnalysis>)> = snapshots
        .par_iter()
        .map(|snapshot| (snapshot.ticker.clone(), analyze(snapshot, config)))
        .collect();

    let mut outcome = BatchOutcome::default();
    for (ticker, result) in results {
        match result {
            Ok(analysis) => outcome.analyses.push(analysis),
            Err(error) => {
                warn!("{ticker} failed: {error}");
                outcome.failures.push((ticker, error));
            }
        }
    }

    info!(
        "batch complete: {} analyzed, {} failed",
        outcome.analyses.len(),
        outcome.failures.len()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdsbasis_core::source::{FixtureSource, SnapshotSource};

    fn snapshot() -> MarketSnapshot {
        FixtureSource::new().snapshot("INTC").unwrap()
    }

    #[test]
    fn pipeline_runs_end_to_end_on_the_fixture() {
        let analysis = analyze(&snapshot(), &AnalyticsConfig::default()).unwrap();

        assert_eq!(analysis.ticker, "INTC");
        assert_eq!(analysis.survival.nodes().len(), 5);
        assert_eq!(analysis.price.flows.len(), 14);
        assert!(analysis.risk.duration > 0.0);
        assert_eq!(analysis.report.trade_signal, analysis.basis.signal);
    }

    #[test]
    fn batch_collects_failures_without_aborting() {
        let good = snapshot();
        let mut bad = snapshot();
        bad.ticker = "BAD".into();
        bad.cds_curve.clear();

        let outcome = run_batch(&[good, bad], &AnalyticsConfig::default());

        assert_eq!(outcome.analyses.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, "BAD");
    }

    #[test]
    fn batch_preserves_input_order() {
        let mut a = snapshot();
        a.ticker = "AAA".into();
        let mut b = snapshot();
        b.ticker = "BBB".into();

        let outcome = run_batch(&[a, b], &AnalyticsConfig::default());
        let tickers: Vec<&str> = outcome.analyses.iter().map(|x| x.ticker.as_str()).collect();
        assert_eq!(tickers, ["AAA", "BBB"]);
    }
}
