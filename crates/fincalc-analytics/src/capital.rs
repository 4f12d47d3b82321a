//! Capital budgeting: NPV, payback period and recovery value.

use log::trace;

use fincalc_core::types::{CashFlowSeries, Rate};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::{CashFlowValuation, ValuationFunction};

/// Net present value of `flows` at `rate`, with `flows[0]` undiscounted.
pub fn npv(rate: Rate, flows: &CashFlowSeries) -> AnalyticsResult<f64> {
    if !rate.is_finite() || rate <= -1.0 {
        return Err(AnalyticsError::degenerate(format!(
            "discount rate must be greater than -100%, got {rate}"
        )));
    }
    Ok(CashFlowValuation::new(flows).residual(rate))
}

/// Periods until the cumulative cash flow turns non-negative.
///
/// Recovery during period `i` counts the `i - 1` full periods before it
/// plus the fraction of `flows[i]` needed to cover the shortfall, so
/// `-1000, 300, 400, 500` pays back after 2.6 periods. Counting `i` full
/// periods instead, as some console calculators do, would report 3.6 and
/// charge the recovering period twice; that count is corrected here on
/// purpose. Returns `None` when the cumulative total never reaches zero.
pub fn payback_period(flows: &CashFlowSeries) -> Option<f64> {
    let mut cumulative = 0.0;

    for (i, cf) in flows.iter() {
        let previous = cumulative;
        cumulative += cf;
        trace!("period {i}: cumulative {cumulative}");

        if cumulative >= 0.0 {
            if i == 0 {
                return Some(0.0);
            }
            let fraction = if cf == 0.0 { 0.0 } else { previous.abs() / cf };
            return Some((i - 1) as f64 + fraction);
        }
    }

    None
}

/// Net proceeds from disposing of an asset.
///
/// `salvage * (1 - selling_cost_rate) * (1 - tax_rate)`. Both rates are
/// fractions in `[0, 1]`.
pub fn recovery_value(salvage: f64, selling_cost_rate: Rate, tax_rate: Rate) -> AnalyticsResult<f64> {
    if !salvage.is_finite() {
        return Err(AnalyticsError::degenerate("salvage value must be finite"));
    }
    for (name, rate) in [("selling cost", selling_cost_rate), ("tax rate", tax_rate)] {
        if !(0.0..=1.0).contains(&rate) {
            return Err(AnalyticsError::degenerate(format!(
                "{name} must be between 0% and 100%, got {rate}"
            )));
        }
    }

    Ok(salvage * (1.0 - selling_cost_rate) * (1.0 - tax_rate))
}
