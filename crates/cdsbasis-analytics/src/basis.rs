//! CDS-bond basis and trade-signal classification.
//!
//! The basis is `CDS spread - Z-spread`, both in basis points, with the CDS
//! spread read at the reference tenor: the quoted tenor nearest to the
//! bond's maturity. A negative basis means bond protection is cheap
//! relative to the bond's credit spread, so the bond itself is cheap; a
//! positive basis means the bond is rich.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use cdsbasis_core::CdsQuote;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Relative-value signal from the basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSignal {
    /// Basis below the neutral band: long the bond, buy CDS protection.
    BondCheap,
    /// Basis above the neutral band: short the bond, sell CDS protection.
    BondRich,
    /// Basis within the band (boundary inclusive): no trade.
    Neutral,
}

impl TradeSignal {
    /// Classifies a basis against the neutral half-width.
    ///
    /// The band is inclusive: a basis of exactly `±threshold_bps` is
    /// [`TradeSignal::Neutral`].
    #[must_use]
    pub fn classify(basis_bps: f64, threshold_bps: f64) -> Self {
        if basis_bps < -threshold_bps {
            Self::BondCheap
        } else if basis_bps > threshold_bps {
            Self::BondRich
        } else {
            Self::Neutral
        }
    }

    /// The trade this signal recommends.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::BondCheap => "long bond / buy CDS protection",
            Self::BondRich => "short bond / sell CDS protection",
            Self::Neutral => "no trade",
        }
    }
}

impl fmt::Display for TradeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BondCheap => "Bond Cheap",
            Self::BondRich => "Bond Rich",
            Self::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Result of a basis calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasisResult {
    /// Solved Z-spread in basis points.
    pub z_spread_bps: f64,
    /// CDS spread at the reference tenor in basis points.
    pub cds_spread_bps: f64,
    /// Quoted CDS tenor used as reference, in years.
    pub reference_tenor: f64,
    /// `cds_spread_bps - z_spread_bps`.
    pub basis_bps: f64,
    /// Classified signal.
    pub signal: TradeSignal,
}

/// The quoted CDS tenor nearest to `maturity`; ties go to the earlier
/// quote.
#[must_use]
pub fn nearest_quote(cds_curve: &[CdsQuote], maturity: f64) -> Option<&CdsQuote> {
    cds_curve.iter().fold(None, |best: Option<&CdsQuote>, q| {
        match best {
            Some(b) if (b.tenor - maturity).abs() <= (q.tenor - maturity).abs() => Some(b),
            _ => Some(q),
        }
    })
}

/// CDS spread linearly interpolated in tenor, flat beyond the quoted ends.
///
/// The quoted-tenor [`nearest_quote`] convention drives the basis itself;
/// the interpolated quote is for inspection of off-pillar maturities.
///
/// # Errors
///
/// [`AnalyticsError::NoReferenceQuote`] for an empty curve.
pub fn interpolated_spread_bps(cds_curve: &[CdsQuote], tenor: f64) -> AnalyticsResult<f64> {
    let first = cds_curve
        .first()
        .ok_or(AnalyticsError::NoReferenceQuote { maturity: tenor })?;
    let last = &cds_curve[cds_curve.len() - 1];

    if tenor <= first.tenor {
        return Ok(first.spread_bps);
    }
    if tenor >= last.tenor {
        return Ok(last.spread_bps);
    }

    for pair in cds_curve.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if tenor <= hi.tenor {
            let w = (tenor - lo.tenor) / (hi.tenor - lo.tenor);
            return Ok(lo.spread_bps + w * (hi.spread_bps - lo.spread_bps));
        }
    }
    Ok(last.spread_bps)
}

/// Computes the basis and signal for a solved Z-spread.
///
/// # Errors
///
/// [`AnalyticsError::NoReferenceQuote`] when the CDS curve is empty.
pub fn compute_basis(
    cds_curve: &[CdsQuote],
    maturity: f64,
    z_spread_bps: f64,
    threshold_bps: f64,
) -> AnalyticsResult<BasisResult> {
    let reference =
        nearest_quote(cds_curve, maturity).ok_or(AnalyticsError::NoReferenceQuote { maturity })?;

    let basis_bps = reference.spread_bps - z_spread_bps;
    let signal = TradeSignal::classify(basis_bps, threshold_bps);

    info!(
        "basis: {basis_bps:.2} bps vs {}y CDS ({signal})",
        reference.tenor
    );

    Ok(BasisResult {
        z_spread_bps,
        cds_spread_bps: reference.spread_bps,
        reference_tenor: reference.tenor,
        basis_bps,
        signal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> Vec<CdsQuote> {
        vec![
            CdsQuote::new(1.0, 80.0),
            CdsQuote::new(3.0, 110.0),
            CdsQuote::new(5.0, 140.0),
            CdsQuote::new(7.0, 160.0),
            CdsQuote::new(10.0, 180.0),
        ]
    }

    #[test]
    fn classification_band_is_inclusive() {
        assert_eq!(TradeSignal::classify(-5.0, 5.0), TradeSignal::Neutral);
        assert_eq!(TradeSignal::classify(5.0, 5.0), TradeSignal::Neutral);
        assert_eq!(TradeSignal::classify(0.0, 5.0), TradeSignal::Neutral);
        assert_eq!(TradeSignal::classify(-5.01, 5.0), TradeSignal::BondCheap);
        assert_eq!(TradeSignal::classify(5.01, 5.0), TradeSignal::BondRich);
    }

    #[test]
    fn nearest_tenor_picks_the_closest_pillar() {
        let curve = curve();
        assert_relative_eq!(nearest_quote(&curve, 7.005).unwrap().tenor, 7.0);
        assert_relative_eq!(nearest_quote(&curve, 1.4).unwrap().tenor, 1.0);
        assert_relative_eq!(nearest_quote(&curve, 25.0).unwrap().tenor, 10.0);
        // Tie between 1y and 3y resolves to the earlier quote.
        assert_relative_eq!(nearest_quote(&curve, 2.0).unwrap().tenor, 1.0);
    }

    #[test]
    fn interpolated_spread_between_and_beyond_pillars() {
        let curve = curve();
        assert_relative_eq!(
            interpolated_spread_bps(&curve, 4.0).unwrap(),
            125.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            interpolated_spread_bps(&curve, 0.5).unwrap(),
            80.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            interpolated_spread_bps(&curve, 15.0).unwrap(),
            180.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn basis_subtracts_z_spread_from_reference() {
        let result = compute_basis(&curve(), 7.0, 172.2, 5.0).unwrap();

        assert_relative_eq!(result.reference_tenor, 7.0);
        assert_relative_eq!(result.cds_spread_bps, 160.0);
        assert_relative_eq!(result.basis_bps, -12.2, epsilon = 1e-12);
        assert_eq!(result.signal, TradeSignal::BondCheap);
    }

    #[test]
    fn empty_curve_has_no_reference() {
        assert!(matches!(
            compute_basis(&[], 7.0, 150.0, 5.0),
            Err(AnalyticsError::NoReferenceQuote { .. })
        ));
    }
}
