//! Errors raised while loading or checking solver profiles.

use std::fmt;

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure to load, store or accept a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One setting broke a rule.
    #[error("Validation error: {0}")]
    Validation(Violation),

    /// Several settings broke rules; all of them are reported.
    #[error("Validation errors: {}", Violation::list(.0))]
    Violations(Vec<Violation>),

    /// The configuration could not be written as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The document is not valid JSON for a configuration.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Reading or writing a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => Self::Serialization(err.to_string()),
            _ => Self::Deserialization(err.to_string()),
        }
    }
}

/// A setting that broke a named rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending setting, e.g. `ytm.tolerance`.
    pub field: String,
    /// Short identifier of the rule, e.g. `ordered_range`.
    pub rule: &'static str,
    /// Human-readable explanation.
    pub message: String,
}

impl Violation {
    /// Records that `field` broke `rule`.
    pub fn new(field: impl Into<String>, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            message: message.into(),
        }
    }

    /// Nests the field under `section`.
    #[must_use]
    pub fn in_section(mut self, section: &str) -> Self {
        self.field.insert(0, '.');
        self.field.insert_str(0, section);
        self
    }

    fn list(violations: &[Violation]) -> String {
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.field, self.message, self.rule)
    }
}

/// Configurations that can check their own settings.
pub trait Validate {
    /// Every rule the configuration currently breaks.
    fn violations(&self) -> Vec<Violation>;

    /// True when no rule is broken.
    fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Fails with the broken rules, if any.
    fn check(&self) -> ConfigResult<()> {
        let mut violations = self.violations();
        match violations.pop() {
            None => Ok(()),
            Some(only) if violations.is_empty() => Err(ConfigError::Validation(only)),
            Some(last) => {
                violations.push(last);
                Err(ConfigError::Violations(violations))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<Violation>);

    impl Validate for Fixed {
        fn violations(&self) -> Vec<Violation> {
            self.0.clone()
        }
    }

    #[test]
    fn test_one_violation() {
        let err = Fixed(vec![Violation::new("tolerance", "valid_tolerance", "must be positive")])
            .check()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: tolerance: must be positive [valid_tolerance]"
        );
    }

    #[test]
    fn test_violations_keep_their_order() {
        let err = Fixed(vec![
            Violation::new("low", "finite_range", "bad"),
            Violation::new("high", "ordered_range", "worse"),
        ])
        .check()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation errors: low: bad [finite_range]; high: worse [ordered_range]"
        );
    }

    #[test]
    fn test_section_prefix() {
        let v = Violation::new("tolerance", "valid_tolerance", "x").in_section("irr");
        assert_eq!(v.field, "irr.tolerance");
    }

    #[test]
    fn test_nothing_broken() {
        assert!(Fixed(Vec::new()).is_valid());
        assert!(Fixed(Vec::new()).check().is_ok());
    }

    #[test]
    fn test_json_syntax_error_is_deserialization() {
        let err: ConfigError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }
}
