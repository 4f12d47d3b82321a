//! # fincalc Config
//!
//! Solver profiles for the yield and IRR calculators: tolerance, iteration
//! cap and search range, validated and loadable from JSON.
//!
//! ```rust
//! use fincalc_config::{SolverProfile, Validate};
//!
//! let profile = SolverProfile::irr().with_tolerance(1e-10);
//! assert!(profile.is_valid());
//!
//! let solver = profile.rate_solver().unwrap();
//! assert_eq!(solver.bracket().low(), -0.99);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod profile;

pub use error::{ConfigError, ConfigResult, Validate, Violation};
pub use profile::{CalculatorConfig, SolverProfile};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::profile::{CalculatorConfig, SolverProfile};
}
