//! Capital budgeting commands: payback period, recovery value and NPV.

use anyhow::Result;
use clap::{Args, Subcommand};

use fincalc_analytics::capital::{npv, payback_period, recovery_value};
use fincalc_core::types::{from_percent, CashFlowSeries};

use crate::context::Context;
use crate::output::{format_money, format_number, print_report, Report};

/// Arguments for the capital command.
#[derive(Args, Debug, Clone)]
pub struct CapitalArgs {
    #[command(subcommand)]
    pub command: CapitalCommand,
}

/// Capital budgeting subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum CapitalCommand {
    /// Periods until cumulative cash flow turns non-negative
    Payback(PaybackArgs),

    /// Net proceeds from selling an asset
    Recovery(RecoveryArgs),

    /// Net present value at a discount rate
    Npv(NpvArgs),
}

/// Arguments for payback period.
#[derive(Args, Debug, Clone)]
pub struct PaybackArgs {
    /// Cash flows separated by commas, initial investment first as a negative number
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub cash_flows: String,
}

/// Arguments for recovery value.
#[derive(Args, Debug, Clone)]
pub struct RecoveryArgs {
    /// Estimated salvage value ($)
    #[arg(short, long)]
    pub salvage: f64,

    /// Selling cost (as percentage)
    #[arg(long, default_value = "0")]
    pub selling_cost: f64,

    /// Tax rate on capital gains (as percentage)
    #[arg(short, long, default_value = "0")]
    pub tax_rate: f64,
}

/// Arguments for NPV.
#[derive(Args, Debug, Clone)]
pub struct NpvArgs {
    /// Cash flows separated by commas, period 0 first
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub cash_flows: String,

    /// Discount rate (as percentage)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,
}

/// Builds the report for a capital subcommand.
pub fn report(command: &CapitalCommand, ctx: &Context) -> Result<Report> {
    let p = ctx.precision;

    let report = match command {
        CapitalCommand::Payback(args) => {
            let flows = CashFlowSeries::parse(&args.cash_flows)?;
            let report = Report::new("Payback Period").input("Cash Flows", flows.to_string());
            match payback_period(&flows) {
                Some(periods) => {
                    report.result("Payback Period", format!("{} periods", format_number(periods, p)))
                }
                None => report
                    .result("Payback Period", "not recovered within the given periods")
                    .sentence("The investment is not recovered within the given periods."),
            }
        }
        CapitalCommand::Recovery(args) => {
            let value = recovery_value(
                args.salvage,
                from_percent(args.selling_cost),
                from_percent(args.tax_rate),
            )?;
            Report::new("Recovery Value")
                .input("Salvage Value", format_money(args.salvage, p))
                .input("Selling Cost", format!("{}%", args.selling_cost))
                .input("Tax Rate", format!("{}%", args.tax_rate))
                .result("Net Recovery Value", format_money(value, p))
        }
        CapitalCommand::Npv(args) => {
            let flows = CashFlowSeries::parse(&args.cash_flows)?;
            let value = npv(from_percent(args.rate), &flows)?;
            Report::new("Net Present Value")
                .input("Cash Flows", flows.to_string())
                .input("Discount Rate", format!("{}%", args.rate))
                .result("NPV", format_money(value, p))
        }
    };
    Ok(report)
}

/// Execute the capital command.
pub fn execute(args: &CapitalArgs, ctx: &Context) -> Result<()> {
    print_report(&report(&args.command, ctx)?, ctx)
}
