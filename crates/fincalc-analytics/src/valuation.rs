//! Valuation functions.
//!
//! A valuation function maps a candidate periodic rate to the present value
//! of a set of cash flows at that rate minus a target price. The rate that
//! zeroes it is the solved yield or IRR, so both calculators hand the same
//! shape to the bisection solver.

use fincalc_core::types::{BondSpec, CashFlowSeries, Rate};

/// `rate -> PV(cash flows at rate) - target`.
///
/// Implementations are pure: the residual depends only on the rate and the
/// captured inputs. Rates at or below -100% make the discount factors
/// non-positive and produce non-finite or meaningless residuals.
pub trait ValuationFunction: Send + Sync {
    /// Residual at `rate`.
    fn residual(&self, rate: Rate) -> f64;

    /// The price subtracted from the present value.
    fn target(&self) -> f64;

    /// Present value at `rate`, without the target.
    fn present_value(&self, rate: Rate) -> f64 {
        self.residual(rate) + self.target()
    }
}

/// Explicit cash flows discounted from period 0.
///
/// `f(r) = Σ cf[t] / (1 + r)^t - target`. For IRR the target is zero since
/// `cf[0]` already carries the outlay.
#[derive(Debug, Clone, Copy)]
pub struct CashFlowValuation<'a> {
    flows: &'a CashFlowSeries,
    target: f64,
}

impl<'a> CashFlowValuation<'a> {
    /// Net present value of `flows`, target zero.
    #[must_use]
    pub fn new(flows: &'a CashFlowSeries) -> Self {
        Self { flows, target: 0.0 }
    }

    /// Sets the price subtracted from the present value.
    #[must_use]
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// The discounted cash flows.
    #[must_use]
    pub fn flows(&self) -> &CashFlowSeries {
        self.flows
    }
}

impl ValuationFunction for CashFlowValuation<'_> {
    fn residual(&self, rate: Rate) -> f64 {
        let base = 1.0 + rate;
        let pv: f64 = self
            .flows
            .iter()
            .map(|(t, cf)| cf / base.powi(exponent(t)))
            .sum();
        pv - self.target
    }

    fn target(&self) -> f64 {
        self.target
    }
}

/// Period index as a `powi` exponent, saturating past `i32::MAX`.
fn exponent(t: usize) -> i32 {
    i32::try_from(t).unwrap_or(i32::MAX)
}

/// Cash flows implied by a bond, less its observed price.
///
/// `f(y) = Σ_{t=1..n} C / (1 + y)^t + F / (1 + y)^n - P` with
/// `C = F * coupon_rate`.
#[derive(Debug, Clone, Copy)]
pub struct BondValuation {
    bond: BondSpec,
    price: f64,
}

impl BondValuation {
    /// Residual against the market `price`.
    #[must_use]
    pub fn new(bond: BondSpec, price: f64) -> Self {
        Self { bond, price }
    }

    /// Present value only (price target of zero).
    #[must_use]
    pub fn present_value_of(bond: BondSpec) -> Self {
        Self::new(bond, 0.0)
    }

    /// The bond being valued.
    #[must_use]
    pub fn bond(&self) -> &BondSpec {
        &self.bond
    }
}

impl ValuationFunction for BondValuation {
    fn residual(&self, rate: Rate) -> f64 {
        let base = 1.0 + rate;
        let n = self.bond.periods();
        let coupon = self.bond.coupon_payment();

        let coupons: f64 = (1..=n).map(|t| coupon / base.powi(t)).sum();
        let principal = self.bond.face_value() / base.powi(n);

        coupons + principal - self.price
    }

    fn target(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_npv_at_ten_percent() {
        let flows = CashFlowSeries::new(vec![-1000.0, 300.0, 400.0, 500.0]).unwrap();
        let npv = CashFlowValuation::new(&flows).residual(0.10);
        // -1000 + 300/1.1 + 400/1.21 + 500/1.331
        assert_relative_eq!(npv, -21.03681442524413, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_plain_sum() {
        let flows = CashFlowSeries::new(vec![-100.0, 50.0, 0.0, 50.0, 50.0]).unwrap();
        assert_relative_eq!(CashFlowValuation::new(&flows).residual(0.0), 50.0);
    }

    #[test]
    fn test_cash_flow_target() {
        let flows = CashFlowSeries::new(vec![0.0, 110.0]).unwrap();
        let valuation = CashFlowValuation::new(&flows).with_target(100.0);
        assert_relative_eq!(valuation.residual(0.10), 0.0, epsilon = 1e-12);
        assert_relative_eq!(valuation.present_value(0.10), 100.0, epsilon = 1e-12);
        assert_eq!(valuation.flows().len(), 2);
    }

    #[test]
    fn test_par_bond_residual_is_zero_at_coupon() {
        let bond = BondSpec::new(1000.0, 0.05, 10).unwrap();
        let valuation = BondValuation::new(bond, 1000.0);
        assert_relative_eq!(valuation.residual(0.05), 0.0, epsilon = 1e-9);
        assert_eq!(valuation.target(), 1000.0);
    }

    #[test]
    fn test_bond_residual_decreases_with_rate() {
        let bond = BondSpec::new(1000.0, 0.05, 10).unwrap();
        let valuation = BondValuation::new(bond, 950.0);
        assert!(valuation.residual(0.0001) > 0.0);
        assert!(valuation.residual(1.0) < 0.0);
        assert!(valuation.residual(0.04) > valuation.residual(0.06));
    }

    #[test]
    fn test_zero_coupon_bond() {
        let bond = BondSpec::new(100.0, 0.0, 2).unwrap();
        let pv = BondValuation::present_value_of(bond).present_value(0.10);
        assert_relative_eq!(pv, 100.0 / 1.21, epsilon = 1e-12);
    }
}
