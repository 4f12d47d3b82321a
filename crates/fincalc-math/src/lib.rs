//! # fincalc Math
//!
//! Numerical building blocks for the fincalc calculators.
//!
//! This crate provides:
//!
//! - **Solvers**: a bounded bisection search over a bracket with a
//!   sign change, shared by the yield-to-maturity and IRR calculators
//!
//! ## Design Philosophy
//!
//! - **One loop**: every rate solved in the workspace goes through
//!   [`solvers::bisection`]
//! - **Pure**: solvers own their bracket and counter, perform no I/O and
//!   are deterministic for a given input

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, bisection_with_observer, solve, BisectionStep, SearchBracket, SolverConfig,
        SolverResult, StopReason,
    };
}

pub use error::{MathError, MathResult};
