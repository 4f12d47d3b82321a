//! Resolved options shared by every command.

use std::path::PathBuf;

use fincalc_analytics::yields::RateSolver;
use fincalc_config::{CalculatorConfig, SolverProfile};

use crate::cli::OutputFormat;
use crate::commands::SolverArgs;
use crate::error::CliResult;
use crate::settings::Settings;

/// Command-line flags merged over the persisted settings.
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub precision: usize,
    pub solvers: CalculatorConfig,
    pub settings_path: PathBuf,
}

impl Context {
    /// Settings fill in whatever the command line leaves open. A solver
    /// profile file replaces the settings' stopping rules entirely.
    pub fn new(
        settings: &Settings,
        format: Option<OutputFormat>,
        quiet: bool,
        solvers: Option<CalculatorConfig>,
        settings_path: PathBuf,
    ) -> Self {
        let solvers = solvers.unwrap_or_else(|| {
            CalculatorConfig::default()
                .with_stopping_rules(settings.solver_tolerance, settings.solver_max_iterations)
        });
        Self {
            format: format.unwrap_or(settings.default_format),
            quiet,
            precision: settings.decimal_precision,
            solvers,
            settings_path,
        }
    }

    pub fn irr_solver(&self, overrides: &SolverArgs) -> CliResult<RateSolver> {
        Ok(overrides.apply(self.solvers.irr).rate_solver()?)
    }

    pub fn ytm_solver(&self, overrides: &SolverArgs) -> CliResult<RateSolver> {
        Ok(overrides.apply(self.solvers.ytm).rate_solver()?)
    }
}

impl SolverArgs {
    fn apply(&self, mut profile: SolverProfile) -> SolverProfile {
        if let Some(tolerance) = self.tolerance {
            profile = profile.with_tolerance(tolerance);
        }
        if let Some(max_iterations) = self.max_iterations {
            profile = profile.with_max_iterations(max_iterations);
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(settings: &Settings) -> Context {
        Context::new(settings, None, false, None, PathBuf::from("config.json"))
    }

    #[test]
    fn test_settings_supply_defaults() {
        let settings = Settings {
            default_format: OutputFormat::Json,
            solver_tolerance: 1e-9,
            ..Settings::default()
        };
        let ctx = context(&settings);
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.solvers.irr.tolerance, 1e-9);
        assert_eq!(ctx.solvers.ytm.tolerance, 1e-9);
    }

    #[test]
    fn test_flag_overrides_settings() {
        let ctx = Context::new(
            &Settings::default(),
            Some(OutputFormat::Csv),
            true,
            None,
            PathBuf::from("config.json"),
        );
        assert_eq!(ctx.format, OutputFormat::Csv);
        assert!(ctx.quiet);
    }

    #[test]
    fn test_command_overrides_reach_solver() {
        let ctx = context(&Settings::default());
        let overrides = SolverArgs {
            tolerance: Some(1e-10),
            max_iterations: Some(50),
        };
        let solver = ctx.irr_solver(&overrides).unwrap();
        assert_eq!(solver.config().tolerance, 1e-10);
        assert_eq!(solver.config().max_iterations, 50);
        assert_eq!(solver.bracket().low(), -0.99);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let ctx = context(&Settings::default());
        let overrides = SolverArgs {
            tolerance: Some(-1.0),
            max_iterations: None,
        };
        assert!(ctx.ytm_solver(&overrides).is_err());
    }
}
