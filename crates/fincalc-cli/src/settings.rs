//! Persisted CLI settings.
//!
//! Stored as a flat JSON object of strings under
//! `<config dir>/fincalc/config.json`. Missing keys fall back to their
//! defaults, so an absent file is the same as an empty one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fincalc_config::{SolverProfile, Validate};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Precision for decimal output
    DecimalPrecision,
    /// Bisection tolerance for IRR and YTM
    SolverTolerance,
    /// Bisection iteration cap for IRR and YTM
    SolverMaxIterations,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "decimal_precision" | "precision" => Some(Self::DecimalPrecision),
            "solver_tolerance" | "tolerance" => Some(Self::SolverTolerance),
            "solver_max_iterations" | "max_iterations" => Some(Self::SolverMaxIterations),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DecimalPrecision => "decimal_precision",
            Self::SolverTolerance => "solver_tolerance",
            Self::SolverMaxIterations => "solver_max_iterations",
            Self::UseColors => "use_colors",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DecimalPrecision => "Number of decimal places for output (0-10)",
            Self::SolverTolerance => "Bracket width at which IRR and YTM searches stop",
            Self::SolverMaxIterations => "Maximum bisection steps for IRR and YTM",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::DecimalPrecision => "2",
            Self::SolverTolerance => "1e-6",
            Self::SolverMaxIterations => "10000",
            Self::UseColors => "true",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::DecimalPrecision,
            Self::SolverTolerance,
            Self::SolverMaxIterations,
            Self::UseColors,
        ]
    }

    fn invalid(self, message: impl Into<String>) -> CliError {
        CliError::InvalidSetting {
            key: self.as_str(),
            message: message.into(),
        }
    }
}

/// Raw settings as stored on disk.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SettingsStore {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl SettingsStore {
    /// Reads the store at `path`, or an empty one if it does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The stored value, or the key's default.
    pub fn value(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or(key.default_value(), String::as_str)
    }

    pub fn set(&mut self, key: ConfigKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    pub fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Typed settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub default_format: OutputFormat,
    pub decimal_precision: usize,
    pub solver_tolerance: f64,
    pub solver_max_iterations: u32,
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Table,
            decimal_precision: 2,
            solver_tolerance: 1e-6,
            solver_max_iterations: 10_000,
            use_colors: true,
        }
    }
}

impl Settings {
    /// Parses every key, failing on the first invalid stored value.
    pub fn from_store(store: &SettingsStore) -> CliResult<Self> {
        Ok(Self {
            default_format: parse_format(store.value(ConfigKey::DefaultFormat))?,
            decimal_precision: parse_precision(store.value(ConfigKey::DecimalPrecision))?,
            solver_tolerance: parse_tolerance(store.value(ConfigKey::SolverTolerance))?,
            solver_max_iterations: parse_max_iterations(
                store.value(ConfigKey::SolverMaxIterations),
            )?,
            use_colors: parse_bool(store.value(ConfigKey::UseColors))?,
        })
    }
}

/// Validates a configuration value.
pub fn validate_config_value(key: ConfigKey, value: &str) -> CliResult<()> {
    match key {
        ConfigKey::DefaultFormat => parse_format(value).map(drop),
        ConfigKey::DecimalPrecision => parse_precision(value).map(drop),
        ConfigKey::SolverTolerance => parse_tolerance(value).map(drop),
        ConfigKey::SolverMaxIterations => parse_max_iterations(value).map(drop),
        ConfigKey::UseColors => parse_bool(value).map(drop),
    }
}

fn parse_format(value: &str) -> CliResult<OutputFormat> {
    OutputFormat::parse(value).ok_or_else(|| {
        ConfigKey::DefaultFormat.invalid(format!(
            "{value}. Use table, json, csv, or minimal."
        ))
    })
}

fn parse_precision(value: &str) -> CliResult<usize> {
    let key = ConfigKey::DecimalPrecision;
    let precision: usize = value
        .parse()
        .map_err(|_| key.invalid(format!("{value}. Must be a number.")))?;
    if precision > 10 {
        return Err(key.invalid(format!("{precision}. Must be between 0 and 10.")));
    }
    Ok(precision)
}

fn parse_tolerance(value: &str) -> CliResult<f64> {
    let key = ConfigKey::SolverTolerance;
    let tolerance: f64 = value
        .parse()
        .map_err(|_| key.invalid(format!("{value}. Must be a number.")))?;
    profile_check(SolverProfile::irr().with_tolerance(tolerance), key)?;
    Ok(tolerance)
}

fn parse_max_iterations(value: &str) -> CliResult<u32> {
    let key = ConfigKey::SolverMaxIterations;
    let max_iterations: u32 = value
        .parse()
        .map_err(|_| key.invalid(format!("{value}. Must be a whole number.")))?;
    profile_check(SolverProfile::irr().with_max_iterations(max_iterations), key)?;
    Ok(max_iterations)
}

fn profile_check(profile: SolverProfile, key: ConfigKey) -> CliResult<()> {
    match profile.violations().into_iter().next() {
        Some(err) => Err(key.invalid(err.message)),
        None => Ok(()),
    }
}

fn parse_bool(value: &str) -> CliResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigKey::UseColors.invalid(format!("{value}. Use true or false."))),
    }
}

/// Per-user settings file.
pub fn default_settings_path() -> CliResult<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(home.join("fincalc").join("config.json"))
}
