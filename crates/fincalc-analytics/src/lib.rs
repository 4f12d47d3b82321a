//! # fincalc Analytics
//!
//! Calculators built on the fincalc core types and the bisection solver.
//!
//! - [`valuation`]: residual functions whose root is the solved rate
//! - [`yields`]: yield to maturity and internal rate of return
//! - [`bonds`]: closed-form bond price, maturity value, perpetuity price,
//!   current yield and duration
//! - [`capital`]: NPV, payback period and recovery value
//!
//! ## Example
//!
//! ```rust
//! use fincalc_analytics::prelude::*;
//! use fincalc_core::prelude::*;
//!
//! let flows = CashFlowSeries::parse("-1000, 300, 400, 500").unwrap();
//! let irr = internal_rate_of_return(&flows).unwrap();
//! assert!(irr.rate > 0.08 && irr.rate < 0.09);
//!
//! let bond = BondSpec::from_percent(1000.0, 5.0, 10).unwrap();
//! let ytm = yield_to_maturity(&bond, 950.0).unwrap();
//! assert!(ytm.rate > 0.05);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod bonds;
pub mod capital;
pub mod error;
pub mod valuation;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bonds::{
        bond_price, current_yield, duration, maturity_value, perpetuity_price, Duration,
    };
    pub use crate::capital::{npv, payback_period, recovery_value};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::valuation::{BondValuation, CashFlowValuation, ValuationFunction};
    pub use crate::yields::{
        internal_rate_of_return, yield_to_maturity, RateResult, RateSolver, IRR_BRACKET,
        YTM_BRACKET,
    };
}

pub use error::{AnalyticsError, AnalyticsResult};
