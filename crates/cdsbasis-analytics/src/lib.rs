//! # cdsbasis-analytics
//!
//! Bond-side analytics of the cdsbasis workspace: the survival-weighted
//! synthetic pricer with bump-and-reprice risk metrics, the Z-spread
//! solver, the basis analyzer with trade-signal classification, stress
//! scenarios, and the parallel batch pipeline.
//!
//! The intended entry point is [`pipeline::analyze`] (one snapshot) or
//! [`pipeline::run_batch`] (many, in parallel via rayon); the individual
//! calculators are public for callers that already hold curves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod basis;
pub mod error;
pub mod pipeline;
pub mod pricing;
pub mod report;
pub mod risk;
pub mod stress;
pub mod zspread;

pub use basis::{compute_basis, BasisResult, TradeSignal};
pub use error::{AnalyticsError, AnalyticsResult};
pub use pipeline::{analyze, run_batch, BatchOutcome, TickerAnalysis};
pub use pricing::{FlowDetail, PriceResult, SyntheticPricer};
pub use report::{render_table, ReportRow, REPORT_COLUMNS};
pub use risk::{risk_metrics, RiskMetrics};
pub use stress::{default_scenarios, run_stress, StressOutcome, StressResult, StressScenario};
pub use zspread::ZSpreadCalculator;
