//! Bracketed root finding for rate problems.
//!
//! - [`bisection`]: bounded bisection over a [`SearchBracket`]
//! - [`solve`]: the same search taking plain `low`/`high`/tolerance/cap
//!   arguments, returning only the rate
//!
//! # Example: Yield to Maturity
//!
//! ```rust
//! use fincalc_math::solvers::{bisection, SearchBracket, SolverConfig};
//!
//! // 10-year annual bond, 5% coupon on 100 face, priced at 95
//! let residual = |y: f64| {
//!     let coupons: f64 = (1..=10).map(|t| 5.0 / (1.0 + y).powi(t)).sum();
//!     coupons + 100.0 / (1.0 + y).powi(10) - 95.0
//! };
//!
//! let bracket = SearchBracket::new(0.0001, 1.0).unwrap();
//! let result = bisection(residual, bracket, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05); // discount bond yields more than its coupon
//! ```

mod bisection;

pub use bisection::{bisection, bisection_with_observer, solve, BisectionStep};

use crate::error::{MathError, MathResult};

/// Default width at which the bracket counts as converged.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default cap on bisection iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10_000;

/// Stopping rules shared by every search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Bracket width at which the search stops.
    pub tolerance: f64,
    /// Iterations allowed before the search gives up on the tolerance.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Stopping rules from a tolerance and an iteration cap.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Replaces the convergence width.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replaces the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is a positive finite number and the
    /// iteration cap is non-zero.
    pub fn validate(&self) -> MathResult<()> {
        ensure_finite("tolerance", self.tolerance)?;
        if self.tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// An interval `[low, high]` of candidate rates.
///
/// A bracket is only *valid* for bisection when the function takes values
/// of opposite sign (or zero) at its ends; that check needs the function
/// and happens inside [`bisection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBracket {
    low: f64,
    high: f64,
}

impl SearchBracket {
    /// Creates a bracket with finite endpoints and `low < high`.
    pub fn new(low: f64, high: f64) -> MathResult<Self> {
        ensure_finite("low", low)?;
        ensure_finite("high", high)?;
        if low >= high {
            return Err(MathError::invalid_input(format!(
                "bracket low ({low}) must be below high ({high})"
            )));
        }
        Ok(Self { low, high })
    }

    /// Lower end.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper end.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// `high - low`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// `(low + high) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// True if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    // Narrowing may collapse the interval to a point, which `new` rejects.
    pub(crate) fn narrowed(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Bracket narrowed to within the tolerance.
    Tolerance,
    /// A midpoint or bracket end evaluated to exactly zero.
    ExactZero,
    /// The iteration cap was reached first.
    IterationCap,
}

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of bisection steps taken.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
    /// What ended the search.
    pub stop: StopReason,
}

fn ensure_finite(name: &str, value: f64) -> MathResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MathError::invalid_input(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
