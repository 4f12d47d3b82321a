//! fincalc CLI - Yield, IRR and bond calculators.
//!
//! # Usage
//!
//! ```bash
//! # Yield to maturity from price
//! fincalc ytm --price 950 --face 1000 --coupon 5 --years 10
//!
//! # Internal rate of return
//! fincalc irr --cash-flows "-1000, 300, 400, 500"
//!
//! # Closed-form bond and capital budgeting calculations
//! fincalc bond duration --face 1000 --coupon 10 --years 3 --rate 10
//! fincalc capital payback --cash-flows "-1000, 300, 400, 500"
//!
//! # Interactive menu
//! fincalc menu
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fincalc_config::CalculatorConfig;

mod cli;
mod commands;
mod context;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use context::Context;
use settings::{Settings, SettingsStore};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("fincalc=debug,fincalc_math=debug,fincalc_analytics=debug")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stdout carries results; logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = match cli.config {
        Some(path) => path,
        None => settings::default_settings_path()?,
    };
    let settings = SettingsStore::load(&settings_path)
        .and_then(|store| Settings::from_store(&store))
        .unwrap_or_else(|e| {
            warn!("ignoring settings in {}: {e}", settings_path.display());
            Settings::default()
        });

    if !settings.use_colors {
        colored::control::set_override(false);
    }

    let solvers = cli.solvers.map(CalculatorConfig::load).transpose()?;
    let ctx = Context::new(&settings, cli.format, cli.quiet, solvers, settings_path);

    // Execute command
    match cli.command {
        Commands::Ytm(args) => commands::ytm::execute(&args, &ctx)?,
        Commands::Irr(args) => commands::irr::execute(&args, &ctx)?,
        Commands::Bond(args) => commands::bond::execute(&args, &ctx)?,
        Commands::Capital(args) => commands::capital::execute(&args, &ctx)?,
        Commands::Menu => commands::menu::execute(&ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
