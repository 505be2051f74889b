//! Bond cash-flow schedule generation and accrued interest.
//!
//! The schedule is generated backward from maturity in steps of
//! `12 / frequency` months, so the maturity date is always a coupon date and
//! the stub, if any, sits at the front. Times are ACT/365F year fractions
//! from settlement; only flows strictly after settlement are included.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::types::{year_fraction, BondTerms};

/// A single bond cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Time from settlement in years (ACT/365F), strictly positive.
    pub time: f64,
    /// Amount paid at `time`.
    pub amount: f64,
}

impl CashFlow {
    /// Creates a cash flow.
    #[must_use]
    pub fn new(time: f64, amount: f64) -> Self {
        Self { time, amount }
    }
}

/// Coupon dates strictly after settlement, ascending, ending at maturity,
/// plus the last coupon date on or before settlement (the accrual start).
fn coupon_dates(bond: &BondTerms) -> Result<(NaiveDate, Vec<NaiveDate>), SnapshotError> {
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

    let step = Months::new(12 / bond.frequency);
    let mut dates = Vec::new();
    let mut date = bond.maturity;

    while date > bond.settlement {
        dates.push(date);
        date = date
            .checked_sub_months(step)
            .ok_or_else(|| SnapshotError::invalid_bond_terms("coupon date underflow"))?;
    }

    dates.reverse();
    Ok((date, dates))
}

/// Generates the bond's cash-flow schedule.
///
/// Each coupon date carries `coupon_rate / frequency * face_value`; the
/// final flow adds the principal. Times are strictly ascending by
/// construction.
///
/// # Errors
///
/// [`SnapshotError::InvalidBondTerms`] when maturity is not after
/// settlement or the frequency does not divide 12.
pub fn cash_flow_schedule(bond: &BondTerms) -> Result<Vec<CashFlow>, SnapshotError> {
    let (_, dates) = coupon_dates(bond)?;
    let coupon = bond.coupon_payment();
    let last = dates.len() - 1;

    Ok(dates
        .iter()
        .enumerate()
        .map(|(i, date)| CashFlow {
            time: year_fraction(bond.settlement, *date),
            amount: coupon + if i == last { bond.face_value } else { 0.0 },
        })
        .collect())
}

/// Accrued interest from the last coupon date to settlement.
///
/// Linear in the elapsed fraction of the current coupon period; zero when
/// settlement falls on a coupon date.
///
/// # Errors
///
/// Same preconditions as [`cash_flow_schedule`].
pub fn accrued_interest(bond: &BondTerms) -> Result<f64, SnapshotError> {
    let (accrual_start, dates) = coupon_dates(bond)?;
    let next_coupon = dates[0];

    let period_days = (next_coupon - accrual_start).num_days() as f64;
    let elapsed_days = (bond.settlement - accrual_start).num_days() as f64;
    if period_days <= 0.0 {
        return Err(SnapshotError::invalid_bond_terms(
            "degenerate coupon period",
        ));
    }

    Ok(bond.coupon_payment() * elapsed_days / period_days)
}
