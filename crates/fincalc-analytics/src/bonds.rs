//! Closed-form bond calculators.
//!
//! All rates are fractions per annual period. Each function validates the
//! inputs its formula cannot handle and reports them as
//! [`AnalyticsError::DegenerateInput`] instead of returning `inf` or `NaN`.

use serde::Serialize;

use fincalc_core::types::{BondSpec, Rate};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::{BondValuation, ValuationFunction};

/// Macaulay and modified duration of a bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Duration {
    /// Price the durations were computed at.
    pub price: f64,
    /// Present-value weighted average time to cash flows, in years.
    pub macaulay: f64,
    /// Macaulay duration divided by `1 + y`.
    pub modified: f64,
}

fn ensure_discountable(rate: Rate, what: &str) -> AnalyticsResult<()> {
    if !rate.is_finite() || rate <= -1.0 {
        return Err(AnalyticsError::degenerate(format!(
            "{what} must be greater than -100%, got {rate}"
        )));
    }
    Ok(())
}

/// Present value of the bond's coupons and face value at `market_rate`.
///
/// `Σ_{t=1..n} C / (1 + r)^t + F / (1 + r)^n`
pub fn bond_price(bond: &BondSpec, market_rate: Rate) -> AnalyticsResult<f64> {
    ensure_discountable(market_rate, "market rate")?;
    Ok(BondValuation::present_value_of(*bond).present_value(market_rate))
}

/// Value at maturity with coupons reinvested at `reinvestment_rate`.
///
/// Coupons compound to `C * ((1 + r)^n - 1) / r`, or `C * n` when `r` is
/// zero, and the face value is added on top.
pub fn maturity_value(bond: &BondSpec, reinvestment_rate: Rate) -> AnalyticsResult<f64> {
    ensure_discountable(reinvestment_rate, "reinvestment rate")?;
    let coupon = bond.coupon_payment();
    let n = bond.periods();

    let coupons = if reinvestment_rate == 0.0 {
        coupon * f64::from(n)
    } else {
        coupon * ((1.0 + reinvestment_rate).powi(n) - 1.0) / reinvestment_rate
    };

    Ok(coupons + bond.face_value())
}

/// Price of a level perpetuity: `payment / discount_rate`.
///
/// The discount rate must be strictly positive.
pub fn perpetuity_price(payment: f64, discount_rate: Rate) -> AnalyticsResult<f64> {
    if !discount_rate.is_finite() || discount_rate <= 0.0 {
        return Err(AnalyticsError::degenerate(
            "discount rate must be greater than zero",
        ));
    }
    Ok(payment / discount_rate)
}

/// Annual coupon divided by the current market price.
pub fn current_yield(bond: &BondSpec, price: f64) -> AnalyticsResult<Rate> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AnalyticsError::degenerate(format!(
            "current price must be positive, got {price}"
        )));
    }
    Ok(bond.coupon_payment() / price)
}

/// Macaulay and modified duration at `yield_rate`.
pub fn duration(bond: &BondSpec, yield_rate: Rate) -> AnalyticsResult<Duration> {
    ensure_discountable(yield_rate, "yield")?;
    let base = 1.0 + yield_rate;

    let (price, weighted) = (1..=bond.periods()).fold((0.0, 0.0), |(pv, wpv), t| {
        let discounted = bond.cash_flow_at(t.unsigned_abs()) / base.powi(t);
        (pv + discounted, wpv + f64::from(t) * discounted)
    });

    if price == 0.0 {
        return Err(AnalyticsError::degenerate(
            "bond has no value to weight cash flows by",
        ));
    }

    let macaulay = weighted / price;
    Ok(Duration {
        price,
        macaulay,
        modified: macaulay / base,
    })
}
