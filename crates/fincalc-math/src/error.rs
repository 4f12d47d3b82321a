//! Error types for numerical routines.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The function does not change sign over the bracket.
    ///
    /// Either no root exists in `[a, b]` or it lies outside the bracket.
    #[error(
        "No sign change in range [{a}, {b}]: f({a}) = {fa:.2e} and f({b}) = {fb:.2e}; \
         root may not exist or lies outside the initial bracket"
    )]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// Invalid solver parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid bracket error.
    #[must_use]
    pub fn invalid_bracket(a: f64, b: f64, fa: f64, fb: f64) -> Self {
        Self::InvalidBracket { a, b, fa, fb }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True when the error is a failed bracket check.
    #[must_use]
    pub fn is_bracket_error(&self) -> bool {
        matches!(self, Self::InvalidBracket { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::invalid_bracket(0.0, 1.0, 10.0, 11.0);
        let msg = err.to_string();
        assert!(msg.contains("No sign change in range [0, 1]"));
        assert!(msg.contains("outside the initial bracket"));
        assert!(err.is_bracket_error());
    }

    #[test]
    fn test_invalid_input_display() {
        let err = MathError::invalid_input("tolerance must be positive");
        assert_eq!(err.to_string(), "Invalid input: tolerance must be positive");
        assert!(!err.is_bracket_error());
    }
}
