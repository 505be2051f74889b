//! Market snapshot data model.
//!
//! A [`MarketSnapshot`] is the complete, immutable input to one analysis
//! run: bond terms, the CDS term structure, a recovery assumption and the
//! risk-free curve. Downstream components never mutate it; stress scenarios
//! work on shocked copies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// ACT/365F year fraction between two dates.
#[must_use]
pub fn year_fraction(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / 365.0
}

/// Terms of a fixed-coupon bullet bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Human-readable description, e.g. `"INTC 5.200% 02/10/2033"`.
    #[serde(default)]
    pub description: Option<String>,
    /// Annual coupon rate as a decimal (0.052 for 5.2%).
    pub coupon_rate: f64,
    /// Coupon payments per year (must divide 12).
    pub frequency: u32,
    /// Settlement date; the valuation anchor for all year fractions.
    pub settlement: NaiveDate,
    /// Maturity date.
    pub maturity: NaiveDate,
    /// Observed clean market price per 100 face.
    pub clean_price: f64,
    /// Face value.
    pub face_value: f64,
}

impl BondTerms {
    /// Time from settlement to maturity in years (ACT/365F).
    #[must_use]
    pub fn years_to_maturity(&self) -> f64 {
        year_fraction(self.settlement, self.maturity)
    }

    /// Coupon amount per payment.
    #[must_use]
    pub fn coupon_payment(&self) -> f64 {
        self.coupon_rate / f64::from(self.frequency) * self.face_value
    }
}

/// A single CDS quote: par spread at a tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdsQuote {
    /// Tenor in years.
    pub tenor: f64,
    /// Par spread in basis points per year.
    pub spread_bps: f64,
}

impl CdsQuote {
    /// Creates a quote.
    #[must_use]
    pub fn new(tenor: f64, spread_bps: f64) -> Self {
        Self { tenor, spread_bps }
    }

    /// Spread as a decimal (80 bps -> 0.008).
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread_bps / 10_000.0
    }
}

/// A risk-free curve point: continuously-compounded zero rate at a tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Tenor in years.
    pub tenor: f64,
    /// Zero rate as a decimal.
    pub zero_rate: f64,
}

impl RatePoint {
    /// Creates a curve point.
    #[must_use]
    pub fn new(tenor: f64, zero_rate: f64) -> Self {
        Self { tenor, zero_rate }
    }
}

/// A complete market snapshot for one issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Issuer ticker.
    pub ticker: String,
    /// Bond terms and observed price.
    pub bond: BondTerms,
    /// CDS term structure, ascending by tenor.
    pub cds_curve: Vec<CdsQuote>,
    /// Recovery rate assumption in [0, 1]; falls back to the configured
    /// default when absent.
    #[serde(default)]
    pub recovery_rate: Option<f64>,
    /// Risk-free zero curve, ascending by tenor.
    pub risk_free: Vec<RatePoint>,
    /// Observation date of the snapshot.
    pub as_of: NaiveDate,
}

impl MarketSnapshot {
    /// Recovery rate to use, falling back to `default` when the snapshot
    /// carries none.
    #[must_use]
    pub fn recovery_or(&self, default: f64) -> f64 {
        self.recovery_rate.unwrap_or(default)
    }

    /// Validates the snapshot.
    ///
    /// Called once at pipeline entry; any violation aborts the run before
    /// partial results exist.
    ///
    /// # Errors
    ///
    /// A [`SnapshotError`] naming the first violated precondition.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.cds_curve.is_empty() {
            return Err(SnapshotError::EmptyCdsCurve);
        }
        for (i, quote) in self.cds_curve.iter().enumerate() {
            if quote.spread_bps <= 0.0 {
                return Err(SnapshotError::NonPositiveSpread {
                    tenor: quote.tenor,
                    spread_bps: quote.spread_bps,
                });
            }
            if i > 0 && quote.tenor <= self.cds_curve[i - 1].tenor {
                return Err(SnapshotError::NonAscendingCdsTenors {
                    index: i,
                    prev: self.cds_curve[i - 1].tenor,
                    current: quote.tenor,
                });
            }
        }
        if self.cds_curve[0].tenor <= 0.0 {
            return Err(SnapshotError::NonAscendingCdsTenors {
                index: 0,
                prev: 0.0,
                current: self.cds_curve[0].tenor,
            });
        }

        if let Some(recovery) = self.recovery_rate {
            if !(0.0..=1.0).contains(&recovery) {
                return Err(SnapshotError::RecoveryOutOfRange { value: recovery });
            }
        }

        if self.risk_free.is_empty() {
            return Err(SnapshotError::EmptyRiskFreeCurve);
        }
        for (i, point) in self.risk_free.iter().enumerate().skip(1) {
            if point.tenor <= self.risk_free[i - 1].tenor {
                return Err(SnapshotError::NonAscendingRiskFreeTenors {
                    index: i,
                    prev: self.risk_free[i - 1].tenor,
                    current: point.tenor,
                });
            }
        }

        let bond = &self.bond;
        if bond.maturity <= bond.settlement {
            return Err(SnapshotError::invalid_bond_terms(format!(
                "maturity {} is not after settlement {}",
                bond.maturity, bond.settlement
            )));
        }
        if bond.frequency == 0 || 12 % bond.frequency != 0 {
            return Err(SnapshotError::invalid_bond_terms(format!(
                "coupon frequency must divide 12, got {}",
                bond.frequency
            )));
        }
        if bond.coupon_rate < 0.0 {
            return Err(SnapshotError::invalid_bond_terms(format!(
                "negative coupon rate {}",
                bond.coupon_rate
            )));
        }
        if bond.clean_price <= 0.0 || bond.face_value <= 0.0 {
            return Err(SnapshotError::invalid_bond_terms(format!(
                "price and face value must be positive, got {} / {}",
                bond.clean_price, bond.face_value
            )));
        }

        Ok(())
    }
}
