//! Error types for snapshot validation and acquisition.

use thiserror::Error;

/// Validation errors raised at pipeline entry.
///
/// A snapshot that fails validation produces no partial results; the error
/// names the offending field and value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// The CDS term structure is empty.
    #[error("CDS curve is empty")]
    EmptyCdsCurve,

    /// CDS tenors are not strictly ascending.
    #[error("non-ascending CDS tenors at index {index}: {prev:.4} >= {current:.4}")]
    NonAscendingCdsTenors {
        /// Index of the violating quote.
        index: usize,
        /// Previous tenor in years.
        prev: f64,
        /// Offending tenor in years.
        current: f64,
    },

    /// A CDS quote has a non-positive spread.
    #[error("non-positive CDS spread at tenor {tenor:.2}y: {spread_bps} bps")]
    NonPositiveSpread {
        /// Tenor of the offending quote in years.
        tenor: f64,
        /// Quoted spread in basis points.
        spread_bps: f64,
    },

    /// Recovery rate outside [0, 1].
    #[error("recovery rate must be in [0, 1], got {value}")]
    RecoveryOutOfRange {
        /// The offending recovery rate.
        value: f64,
    },

    /// The risk-free curve is empty.
    #[error("risk-free curve is empty")]
    EmptyRiskFreeCurve,

    /// Risk-free tenors are not strictly ascending.
    #[error("non-ascending risk-free tenors at index {index}: {prev:.4} >= {current:.4}")]
    NonAscendingRiskFreeTenors {
        /// Index of the violating point.
        index: usize,
        /// Previous tenor in years.
        prev: f64,
        /// Offending tenor in years.
        current: f64,
    },

    /// Bond terms that cannot produce a cash-flow schedule.
    #[error("invalid bond terms: {reason}")]
    InvalidBondTerms {
        /// Description of the violation.
        reason: String,
    },
}

impl SnapshotError {
    /// Creates an invalid-bond-terms error.
    #[must_use]
    pub fn invalid_bond_terms(reason: impl Into<String>) -> Self {
        Self::InvalidBondTerms {
            reason: reason.into(),
        }
    }
}

/// Errors raised by snapshot sources.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source has no data for the requested ticker.
    #[error("no snapshot available for ticker {ticker}")]
    UnknownTicker {
        /// The requested ticker.
        ticker: String,
    },

    /// Reading the backing file failed.
    #[error("failed to read snapshot file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Deserializing the snapshot failed.
    #[error("failed to parse snapshot file {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The loaded snapshot failed validation.
    #[error(transparent)]
    Invalid(#[from] SnapshotError),
}
