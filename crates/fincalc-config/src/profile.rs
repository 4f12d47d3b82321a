//! Solver profiles for the rate calculators.

use std::path::Path;

use serde::{Deserialize, Serialize};

use fincalc_analytics::yields::{RateSolver, IRR_BRACKET, YTM_BRACKET};
use fincalc_math::solvers::{SearchBracket, SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use crate::error::{ConfigError, ConfigResult, Validate, Violation};

// =============================================================================
// SOLVER PROFILE
// =============================================================================

/// Stopping rules and search range for one rate calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverProfile {
    /// Bracket width at which the search stops.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum bisection steps.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Lower end of the search range, as a fraction.
    pub low: f64,

    /// Upper end of the search range, as a fraction.
    pub high: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl SolverProfile {
    /// IRR profile: -99% to 100%.
    #[must_use]
    pub fn irr() -> Self {
        Self::over(IRR_BRACKET)
    }

    /// YTM profile: 0.01% to 100%.
    #[must_use]
    pub fn ytm() -> Self {
        Self::over(YTM_BRACKET)
    }

    fn over((low, high): (f64, f64)) -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            low,
            high,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the search range.
    #[must_use]
    pub fn with_range(mut self, low: f64, high: f64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// The stopping rules as a solver configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }

    /// Validates the profile and builds the rate solver it describes.
    pub fn rate_solver(&self) -> ConfigResult<RateSolver> {
        self.check()?;
        let bracket = SearchBracket::new(self.low, self.high).map_err(|e| {
            ConfigError::Validation(Violation::new("low", "valid_bracket", e.to_string()))
        })?;
        Ok(RateSolver::new(bracket, self.solver_config()))
    }
}

impl Validate for SolverProfile {
    fn violations(&self) -> Vec<Violation> {
        let mut errors = Vec::new();

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 || self.tolerance > 1e-2 {
            errors.push(Violation::new(
                "tolerance",
                "valid_tolerance",
                "Tolerance must be between 0 and 1e-2",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 1_000_000 {
            errors.push(Violation::new(
                "max_iterations",
                "valid_iterations",
                "Max iterations must be between 1 and 1000000",
            ));
        }

        if !self.low.is_finite() || !self.high.is_finite() {
            errors.push(Violation::new(
                "low",
                "finite_range",
                "Search range must be finite",
            ));
        } else if self.low >= self.high {
            errors.push(Violation::new(
                "high",
                "ordered_range",
                format!("Upper bound {} must exceed lower bound {}", self.high, self.low),
            ));
        } else if self.low <= -1.0 {
            errors.push(Violation::new(
                "low",
                "discountable_range",
                "Lower bound must be greater than -100%",
            ));
        }

        errors
    }
}

// =============================================================================
// CALCULATOR CONFIGURATION
// =============================================================================

/// Profiles for both rate calculators.
///
/// # Example
///
/// ```rust
/// use fincalc_config::{CalculatorConfig, Validate};
///
/// let config = CalculatorConfig::from_json(r#"{ "irr": { "tolerance": 1e-9, "low": -0.5, "high": 0.5 } }"#).unwrap();
/// assert_eq!(config.irr.max_iterations, 10_000);
/// assert_eq!(config.ytm.low, 0.0001);
/// assert!(config.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Internal rate of return solver.
    #[serde(default = "SolverProfile::irr")]
    pub irr: SolverProfile,

    /// Yield to maturity solver.
    #[serde(default = "SolverProfile::ytm")]
    pub ytm: SolverProfile,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            irr: SolverProfile::irr(),
            ytm: SolverProfile::ytm(),
        }
    }
}

impl CalculatorConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Writes the configuration as JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Applies the same stopping rules to both profiles.
    #[must_use]
    pub fn with_stopping_rules(mut self, tolerance: f64, max_iterations: u32) -> Self {
        self.irr = self.irr.with_tolerance(tolerance).with_max_iterations(max_iterations);
        self.ytm = self.ytm.with_tolerance(tolerance).with_max_iterations(max_iterations);
        self
    }
}

impl Validate for CalculatorConfig {
    fn violations(&self) -> Vec<Violation> {
        let irr = self.irr.violations().into_iter().map(|e| e.in_section("irr"));
        let ytm = self.ytm.violations().into_iter().map(|e| e.in_section("ytm"));
        irr.chain(ytm).collect()
    }
}
