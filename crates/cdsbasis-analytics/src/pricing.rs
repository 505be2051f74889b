//! Survival-weighted synthetic bond pricing.
//!
//! The synthetic price answers "what is this bond worth if the CDS market
//! is right about default risk": every cash flow is weighted by its
//! CDS-implied survival probability and discounted on the risk-free curve,
//!
//! ```text
//! PV = sum over flows of  amount * S(t) * D(t)
//! ```
//!
//! Comparing the result with the observed market price is the price-space
//! view of the basis; the spread-space view lives in [`crate::zspread`].

use log::info;
use serde::{Deserialize, Serialize};

use cdsbasis_core::CashFlow;
use cdsbasis_curves::{DiscountCurve, SurvivalCurve};

use crate::error::{AnalyticsError, AnalyticsResult};

/// One row of the per-flow pricing detail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowDetail {
    /// Time of the flow in years from settlement.
    pub time: f64,
    /// Flow amount per 100 face.
    pub amount: f64,
    /// Risk-free zero rate applied.
    pub zero_rate: f64,
    /// Risk-free discount factor applied.
    pub discount_factor: f64,
    /// Survival probability applied.
    pub survival: f64,
    /// Present value of the flow.
    pub pv: f64,
}

/// Result of a synthetic pricing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    /// Dirty price: the summed survival-weighted PV of all flows.
    pub dirty_price: f64,
    /// Clean price: dirty less accrued interest.
    pub clean_price: f64,
    /// Accrued interest at settlement.
    pub accrued_interest: f64,
    /// Per-flow breakdown, ascending by time.
    pub flows: Vec<FlowDetail>,
}

/// Prices a fixed cash-flow schedule off a discount and a survival curve.
///
/// Borrows both curves; pricing is a pure read and the pricer itself holds
/// no state beyond the references.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticPricer<'a> {
    discount: &'a DiscountCurve,
    survival: &'a SurvivalCurve,
}

impl<'a> SyntheticPricer<'a> {
    /// Creates a pricer over the given curves.
    #[must_use]
    pub fn new(discount: &'a DiscountCurve, survival: &'a SurvivalCurve) -> Self {
        Self { discount, survival }
    }

    /// Prices the schedule, returning the dirty/clean prices and the
    /// per-flow detail.
    ///
    /// # Errors
    ///
    /// [`AnalyticsError::EmptyCashFlows`] for an empty schedule; discount
    /// curve query failures are propagated.
    pub fn price(&self, cash_flows: &[CashFlow], accrued: f64) -> AnalyticsResult<PriceResult> {
        if cash_flows.is_empty() {
            return Err(AnalyticsError::EmptyCashFlows);
        }

        let mut flows = Vec::with_capacity(cash_flows.len());
        let mut dirty = 0.0;

        for flow in cash_flows {
            let zero_rate = self.discount.zero_rate(flow.time)?;
            let discount_factor = (-zero_rate * flow.time).exp();
            let survival = self.survival.survival_probability(flow.time);
            let pv = flow.amount * survival * discount_factor;

            dirty += pv;
            flows.push(FlowDetail {
                time: flow.time,
                amount: flow.amount,
                zero_rate,
                discount_factor,
                survival,
                pv,
            });
        }

        info!("synthetic price: {dirty:.4} dirty over {} flows", flows.len());

        Ok(PriceResult {
            dirty_price: dirty,
            clean_price: dirty - accrued,
            accrued_interest: accrued,
            flows,
        })
    }

    /// Dirty price alone, without the per-flow detail.
    ///
    /// # Errors
    ///
    /// Same conditions as [`price`](Self::price).
    pub fn dirty_price(&self, cash_flows: &[CashFlow]) -> AnalyticsResult<f64> {
        if cash_flows.is_empty() {
            return Err(AnalyticsError::EmptyCashFlows);
        }

        let mut dirty = 0.0;
        for flow in cash_flows {
            let df = self.discount.discount_factor(flow.time)?;
            dirty += flow.amount * self.survival.survival_probability(flow.time) * df;
        }
        Ok(dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cdsbasis_core::RatePoint;
    use cdsbasis_math::interpolation::InterpolationMethod;

    fn discount() -> DiscountCurve {
        DiscountCurve::from_points(
            &[RatePoint::new(1.0, 0.05), RatePoint::new(10.0, 0.05)],
            InterpolationMethod::LinearZero,
        )
        .unwrap()
    }

    fn survival() -> SurvivalCurve {
        SurvivalCurve::from_hazards(&[(10.0, 0.02)]).unwrap()
    }

    #[test]
    fn single_flow_prices_by_hand() {
        let discount = discount();
        let survival = survival();
        let pricer = SyntheticPricer::new(&discount, &survival);

        let result = pricer
            .price(&[CashFlow::new(2.0, 100.0)], 0.0)
            .unwrap();

        let expected = 100.0 * (-0.02_f64 * 2.0).exp() * (-0.05_f64 * 2.0).exp();
        assert_relative_eq!(result.dirty_price, expected, epsilon = 1e-10);
        assert_relative_eq!(result.clean_price, result.dirty_price, epsilon = 1e-15);
        assert_eq!(result.flows.len(), 1);
        assert_relative_eq!(result.flows[0].survival, (-0.04_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn accrued_separates_clean_from_dirty() {
        let discount = discount();
        let survival = survival();
        let pricer = SyntheticPricer::new(&discount, &survival);

        let result = pricer.price(&[CashFlow::new(1.0, 102.6)], 1.3).unwrap();
        assert_relative_eq!(
            result.clean_price,
            result.dirty_price - 1.3,
            epsilon = 1e-12
        );
    }

    #[test]
    fn default_free_curve_matches_risk_free_pv() {
        let discount = discount();
        let riskless = SurvivalCurve::from_hazards(&[(10.0, 0.0)]).unwrap();
        let pricer = SyntheticPricer::new(&discount, &riskless);

        let flows = [CashFlow::new(1.0, 2.6), CashFlow::new(2.0, 102.6)];
        let dirty = pricer.dirty_price(&flows).unwrap();

        let expected = 2.6 * (-0.05_f64).exp() + 102.6 * (-0.10_f64).exp();
        assert_relative_eq!(dirty, expected, epsilon = 1e-10);
    }

    #[test]
    fn empty_schedule_is_rejected() {
        let discount = discount();
        let survival = survival();
        let pricer = SyntheticPricer::new(&discount, &survival);

        assert!(matches!(
            pricer.price(&[], 0.0),
            Err(AnalyticsError::EmptyCashFlows)
        ));
    }
}
