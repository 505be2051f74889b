//! Error types for curve construction and calibration.

use thiserror::Error;

use cdsbasis_core::SnapshotError;
use cdsbasis_math::MathError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while building or querying curves.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// The input snapshot failed validation.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// A curve was constructed without any nodes.
    #[error("curve has no nodes")]
    EmptyCurve,

    /// Node tenors are not strictly ascending.
    #[error("non-ascending node tenors at index {index}: {prev:.4} >= {current:.4}")]
    NonAscendingTenors {
        /// Index of the violating node.
        index: usize,
        /// Previous tenor.
        prev: f64,
        /// Offending tenor.
        current: f64,
    },

    /// A survival-curve node violates its invariants.
    #[error("invalid survival node at tenor {tenor:.4}: {reason}")]
    InvalidNode {
        /// Node tenor.
        tenor: f64,
        /// Description of the violation.
        reason: String,
    },

    /// The bootstrap produced a survival probability that increases with
    /// tenor.
    #[error(
        "non-monotonic survival curve at tenor {tenor:.4}: S = {survival:.6} after {prev:.6}"
    )]
    NonMonotonicSurvival {
        /// Tenor of the offending node.
        tenor: f64,
        /// Survival probability at the offending node.
        survival: f64,
        /// Survival probability at the previous node.
        prev: f64,
    },

    /// The per-tenor hazard solve failed to converge or to bracket.
    #[error("calibration failed at tenor {tenor:.2}y: {source}")]
    CalibrationFailed {
        /// Tenor being calibrated.
        tenor: f64,
        /// The underlying solver failure.
        #[source]
        source: MathError,
    },

    /// Interpolation inside a curve query failed.
    #[error("interpolation failed: {0}")]
    Interpolation(#[from] MathError),

    /// Query outside the supported domain where no extrapolation policy
    /// applies.
    #[error("tenor {requested:.4} outside supported range [{min:.4}, {max:.4}]")]
    TenorOutOfRange {
        /// The requested tenor.
        requested: f64,
        /// Minimum supported tenor.
        min: f64,
        /// Maximum supported tenor.
        max: f64,
    },
}
