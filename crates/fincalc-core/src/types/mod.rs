//! Domain types for the calculators.
//!
//! - [`CashFlowSeries`]: signed periodic amounts indexed from period 0
//! - [`BondSpec`]: face value, coupon rate and whole years to maturity
//! - [`Rate`]: a periodic rate expressed as a fraction (0.05 = 5%)

mod bond;
mod cashflow;
mod rate;

pub use bond::{BondSpec, MAX_YEARS_TO_MATURITY};
pub use cashflow::CashFlowSeries;
pub use rate::{from_percent, to_percent, Rate};
