//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Text that does not parse as a number.
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    /// Invalid coupon rate.
    #[error("Invalid coupon rate: {0}. Must be between 0 and 100.")]
    InvalidCoupon(f64),

    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// The solver found no sign change in its search range.
    #[error("{0}")]
    RateNotFound(String),

    /// Unknown settings key.
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// A settings value that fails validation.
    #[error("Invalid value for {key}: {message}")]
    InvalidSetting {
        /// Settings key.
        key: &'static str,
        /// What is wrong with the value.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

impl From<fincalc_config::ConfigError> for CliError {
    fn from(err: fincalc_config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
