//! Error types for the fincalc core types.
//!
//! Inputs are validated when a domain type is built, so downstream
//! calculators never see a malformed cash-flow series or bond.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building domain types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Invalid cash flow series.
    #[error("Invalid cash flow: {reason}")]
    InvalidCashFlow {
        /// Description of the invalid cash flow.
        reason: String,
    },

    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidBondSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// A value could not be parsed as a number.
    #[error("Invalid number '{input}': {reason}")]
    InvalidNumber {
        /// The offending text.
        input: String,
        /// Parser message.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid cash flow error.
    #[must_use]
    pub fn invalid_cash_flow(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlow {
            reason: reason.into(),
        }
    }

    /// Creates an invalid bond specification error.
    #[must_use]
    pub fn invalid_bond_spec(reason: impl Into<String>) -> Self {
        Self::InvalidBondSpec {
            reason: reason.into(),
        }
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_bond_spec("face value must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid bond specification: face value must be positive"
        );
    }

    #[test]
    fn test_invalid_number_display() {
        let err = CoreError::invalid_number("abc", "invalid float literal");
        assert!(err.to_string().contains("'abc'"));
    }
}
