//! # fincalc Core
//!
//! Core types and error definitions shared by the fincalc crates.
//!
//! - **Types**: [`CashFlowSeries`](types::CashFlowSeries) for explicit
//!   periodic cash flows, [`BondSpec`](types::BondSpec) for the flows implied
//!   by a plain annual-coupon bond, and rate conversion helpers.
//! - **Errors**: [`CoreError`] for malformed or out-of-range inputs.
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//!
//! let flows = CashFlowSeries::parse("-1000, 300, 400, 500").unwrap();
//! assert_eq!(flows.len(), 4);
//!
//! let bond = BondSpec::from_percent(1000.0, 5.0, 10).unwrap();
//! assert_eq!(bond.coupon_payment(), 50.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        from_percent, to_percent, BondSpec, CashFlowSeries, Rate,
        MAX_YEARS_TO_MATURITY,
    };
}

pub use error::{CoreError, CoreResult};
