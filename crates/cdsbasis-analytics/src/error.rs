//! Error types for pricing and basis analytics.

use thiserror::Error;

use cdsbasis_core::SnapshotError;
use cdsbasis_curves::CurveError;
use cdsbasis_math::MathError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur while pricing or analyzing a bond.
#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    /// The input snapshot failed validation.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Curve construction or calibration failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A bond was priced without any future cash flows.
    #[error("cash flow schedule is empty")]
    EmptyCashFlows,

    /// The Z-spread solve failed to bracket or to converge.
    #[error("z-spread solve failed: {source}")]
    Solver {
        /// The underlying solver failure.
        #[from]
        source: MathError,
    },

    /// The CDS curve has no quote usable as a basis reference.
    #[error("no CDS quote available as reference for maturity {maturity:.2}y")]
    NoReferenceQuote {
        /// Bond maturity in years.
        maturity: f64,
    },
}
