//! Snapshot acquisition.
//!
//! [`SnapshotSource`] is the single capability the analytics pipeline needs
//! from the outside world: produce a validated [`MarketSnapshot`] for a
//! ticker. Implementations are interchangeable and selected by constructing
//! the one you want; there is no runtime mode flag. The trait is
//! synchronous because the whole pipeline is (see the crate docs); sources
//! backed by remote services belong in an adapter layer that resolves the
//! I/O before handing the snapshot over.

use std::path::PathBuf;

use chrono::NaiveDate;
use log::debug;

use crate::error::SourceError;
use crate::types::{BondTerms, CdsQuote, MarketSnapshot, RatePoint};

/// Capability interface: fetch one issuer's market snapshot.
pub trait SnapshotSource {
    /// Returns a validated snapshot for `ticker`.
    ///
    /// # Errors
    ///
    /// [`SourceError`] when the ticker is unknown, the backing data cannot
    /// be read, or the snapshot fails validation.
    fn snapshot(&self, ticker: &str) -> Result<MarketSnapshot, SourceError>;
}

/// Deterministic fixture data for demos and tests.
///
/// Serves the same snapshot shape for every ticker: a 5.200% semiannual
/// bond at 94.50 maturing in seven years, an upward-sloping CDS curve from
/// 80 to 180 bps, 40% recovery and a Feb-2026 treasury curve.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    as_of: NaiveDate,
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureSource {
    /// Creates the fixture source at its reference observation date.
    #[must_use]
    pub fn new() -> Self {
        Self {
            // Unwrap is fine: the literal is a valid date.
            as_of: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
        }
    }
}

impl SnapshotSource for FixtureSource {
    fn snapshot(&self, ticker: &str) -> Result<MarketSnapshot, SourceError> {
        debug!("serving fixture snapshot for {ticker}");

        let settlement = self.as_of;
        let maturity = NaiveDate::from_ymd_opt(2033, 2, 10).unwrap();

        let snapshot = MarketSnapshot {
            ticker: ticker.to_owned(),
            bond: BondTerms {
                description: Some(format!("{ticker} 5.200% 02/10/2033")),
                coupon_rate: 0.052,
                frequency: 2,
                settlement,
                maturity,
                clean_price: 94.50,
                face_value: 100.0,
            },
            cds_curve: vec![
                CdsQuote::new(1.0, 80.0),
                CdsQuote::new(3.0, 110.0),
                CdsQuote::new(5.0, 140.0),
                CdsQuote::new(7.0, 160.0),
                CdsQuote::new(10.0, 180.0),
            ],
            recovery_rate: Some(0.40),
            risk_free: vec![
                RatePoint::new(0.25, 0.0495),
                RatePoint::new(0.5, 0.0490),
                RatePoint::new(1.0, 0.0480),
                RatePoint::new(2.0, 0.0460),
                RatePoint::new(5.0, 0.0440),
                RatePoint::new(10.0, 0.0425),
                RatePoint::new(30.0, 0.0450),
            ],
            as_of: self.as_of,
        };

        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Snapshot source backed by per-ticker JSON files.
///
/// Looks up `<root>/<TICKER>.json` and deserializes it into a
/// [`MarketSnapshot`]; the result is validated before being returned, so a
/// malformed file can never leak into the pipeline.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    root: PathBuf,
}

impl JsonFileSource {
    /// Creates a file source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SnapshotSource for JsonFileSource {
    fn snapshot(&self, ticker: &str) -> Result<MarketSnapshot, SourceError> {
        let path = self.root.join(format!("{ticker}.json"));
        debug!("loading snapshot for {ticker} from {}", path.display());

        if !path.exists() {
            return Err(SourceError::UnknownTicker {
                ticker: ticker.to_owned(),
            });
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let snapshot: MarketSnapshot =
            serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        snapshot.validate()?;
        Ok(snapshot)
    }
}
