//! # cdsbasis
//!
//! CDS-bond basis analytics: hazard-rate bootstrapping from CDS quotes,
//! survival-weighted synthetic bond pricing with rate risk metrics, and
//! Z-spread / basis solving with trade-signal classification and stress
//! scenarios.
//!
//! This crate is a facade over the workspace members; depend on it for the
//! whole API, or on the individual `cdsbasis-*` crates for a subset.
//!
//! # Example
//!
//! ```
//! use cdsbasis::prelude::*;
//!
//! let snapshot = FixtureSource::new().snapshot("INTC")?;
//! let analysis = analyze(&snapshot, &AnalyticsConfig::default())?;
//!
//! println!("{}", analysis.report);
//! assert_eq!(analysis.basis.signal, TradeSignal::BondCheap);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use cdsbasis_analytics as analytics;
pub use cdsbasis_core as data;
pub use cdsbasis_curves as curves;
pub use cdsbasis_math as math;

/// The common imports for working with the full pipeline.
pub mod prelude {
    pub use cdsbasis_analytics::{
        analyze, compute_basis, default_scenarios, render_table, run_batch, run_stress,
        AnalyticsError, AnalyticsResult, BasisResult, BatchOutcome, PriceResult, ReportRow,
        RiskMetrics, StressOutcome, StressScenario, SyntheticPricer, TickerAnalysis, TradeSignal,
        ZSpreadCalculator,
    };
    pub use cdsbasis_core::source::{FixtureSource, JsonFileSource, SnapshotSource};
    pub use cdsbasis_core::{
        AnalyticsConfig, BondTerms, CashFlow, CdsQuote, MarketSnapshot, RatePoint,
    };
    pub use cdsbasis_curves::{bootstrap, DiscountCurve, SurvivalCurve};
    pub use cdsbasis_math::interpolation::InterpolationMethod;
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn facade_exposes_the_full_pipeline() {
        let snapshot = FixtureSource::new().snapshot("DEMO").unwrap();
        let analysis = analyze(&snapshot, &AnalyticsConfig::default()).unwrap();

        assert_eq!(analysis.survival.nodes().len(), 5);
        assert!(analysis.report.to_string().contains("DEMO"));
    }
}
