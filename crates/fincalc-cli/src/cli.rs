//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{BondArgs, CapitalArgs, ConfigArgs, IrrArgs, YtmArgs};

/// fincalc - Yield, IRR and bond calculators
#[derive(Parser)]
#[command(name = "fincalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from settings, else table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log solver progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of the per-user one
    #[arg(long, global = true, env = "FINCALC_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file with IRR and YTM solver profiles
    #[arg(long, global = true, value_name = "FILE")]
    pub solvers: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Yield to maturity of a bond from its price
    Ytm(YtmArgs),

    /// Internal rate of return of a cash flow series
    Irr(IrrArgs),

    /// Closed-form bond calculations
    Bond(BondArgs),

    /// Payback period and recovery value
    Capital(CapitalArgs),

    /// Interactive numbered menu
    Menu,

    /// Manage CLI settings
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

impl OutputFormat {
    /// Parses a settings value, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}
