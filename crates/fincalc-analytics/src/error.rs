//! Analytics error types.

use fincalc_core::CoreError;
use fincalc_math::MathError;
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors raised by the calculators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Malformed domain input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Root finding failed, usually a bracket without a sign change.
    #[error(transparent)]
    Math(#[from] MathError),

    /// An input for which the formula is undefined.
    #[error("Degenerate input: {reason}")]
    DegenerateInput {
        /// Why the formula cannot be evaluated.
        reason: String,
    },
}

impl AnalyticsError {
    /// Creates a degenerate input error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    /// True when the solver found no sign change in its bracket.
    #[must_use]
    pub fn is_bracket_error(&self) -> bool {
        matches!(self, Self::Math(e) if e.is_bracket_error())
    }
}
