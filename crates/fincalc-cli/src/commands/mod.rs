//! CLI command implementations.

pub mod bond;
pub mod capital;
pub mod config;
pub mod irr;
pub mod menu;
pub mod ytm;

// Re-export submodules for convenience
pub use bond::BondArgs;
pub use capital::CapitalArgs;
pub use config::ConfigArgs;
pub use irr::IrrArgs;
pub use ytm::YtmArgs;

use clap::Args;

use fincalc_analytics::AnalyticsError;
use fincalc_core::types::{to_percent, BondSpec};
use fincalc_math::solvers::SearchBracket;

use crate::error::{CliError, CliResult};

/// Per-command solver overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct SolverArgs {
    /// Bisection tolerance [default: from settings]
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Maximum bisection steps [default: from settings]
    #[arg(long)]
    pub max_iterations: Option<u32>,
}

/// Bond terms shared by the bond calculators.
#[derive(Args, Debug, Clone)]
pub struct BondTerms {
    /// Face value ($)
    #[arg(long)]
    pub face: f64,

    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Years until maturity
    #[arg(short, long)]
    pub years: u32,
}

impl BondTerms {
    pub fn to_spec(&self) -> anyhow::Result<BondSpec> {
        let coupon = validate_coupon(self.coupon)?;
        Ok(BondSpec::from_percent(self.face, coupon, self.years)?)
    }
}

/// Parses free text as a number.
pub fn parse_number(s: &str) -> CliResult<f64> {
    let s = s.trim();
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CliError::InvalidNumber(s.to_string()))
}

/// Parses free text as a whole number of periods.
pub fn parse_count(s: &str) -> CliResult<u32> {
    let s = s.trim();
    s.parse::<u32>()
        .map_err(|_| CliError::InvalidNumber(s.to_string()))
}

/// Validates a coupon rate.
pub fn validate_coupon(coupon: f64) -> CliResult<f64> {
    if !(0.0..=100.0).contains(&coupon) {
        return Err(CliError::InvalidCoupon(coupon));
    }
    Ok(coupon)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if price <= 0.0 || !price.is_finite() {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}

/// Turns a bracket failure into the message shown to the user.
pub fn rate_not_found(
    err: AnalyticsError,
    measure: &str,
    bracket: SearchBracket,
    check: &str,
) -> anyhow::Error {
    if err.is_bracket_error() {
        CliError::RateNotFound(format!(
            "{measure} not found in the range {}% to {}%. Please check your {check}.",
            percent_bound(bracket.low()),
            percent_bound(bracket.high()),
        ))
        .into()
    } else {
        err.into()
    }
}

fn percent_bound(rate: f64) -> f64 {
    (to_percent(rate) * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_math::MathError;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 950 ").unwrap(), 950.0);
        assert!(matches!(parse_number("abc"), Err(CliError::InvalidNumber(s)) if s == "abc"));
        assert!(parse_number("inf").is_err());
        assert!(parse_count("-3").is_err());
    }

    #[test]
    fn test_validators() {
        assert!(validate_coupon(5.0).is_ok());
        assert!(validate_coupon(101.0).is_err());
        assert!(validate_price(0.0).is_err());
    }

    #[test]
    fn test_rate_not_found_message() {
        let bracket = SearchBracket::new(-0.99, 1.0).unwrap();
        let err = MathError::invalid_bracket(-0.99, 1.0, -1.0, -2.0).into();
        let msg = rate_not_found(err, "IRR", bracket, "cash flows").to_string();
        assert_eq!(
            msg,
            "IRR not found in the range -99% to 100%. Please check your cash flows."
        );

        let bracket = SearchBracket::new(0.0001, 1.0).unwrap();
        let err = MathError::invalid_bracket(0.0001, 1.0, -1.0, -2.0).into();
        let msg = rate_not_found(err, "Yield", bracket, "inputs").to_string();
        assert_eq!(
            msg,
            "Yield not found in the range 0.01% to 100%. Please check your inputs."
        );
    }
}
