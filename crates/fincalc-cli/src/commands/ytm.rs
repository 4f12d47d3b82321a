//! Yield to maturity command.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::commands::{rate_not_found, validate_price, BondTerms, SolverArgs};
use crate::context::Context;
use crate::output::{format_money, format_percent, print_report, Report};

/// Arguments for the ytm command.
#[derive(Args, Debug, Clone)]
pub struct YtmArgs {
    /// Current bond price ($)
    #[arg(short, long)]
    pub price: f64,

    #[command(flatten)]
    pub bond: BondTerms,

    #[command(flatten)]
    pub solver: SolverArgs,
}

/// Solves for the yield and builds the report.
pub fn report(args: &YtmArgs, ctx: &Context) -> Result<Report> {
    let price = validate_price(args.price)?;
    let bond = args.bond.to_spec()?;
    let solver = ctx.ytm_solver(&args.solver)?;

    let result = solver
        .yield_to_maturity(&bond, price)
        .map_err(|e| rate_not_found(e, "Yield", solver.bracket(), "inputs"))?;
    debug!(iterations = result.iterations, residual = result.residual, "yield solved");

    let p = ctx.precision;
    let mut report = Report::new("Yield to Maturity")
        .input("Price", format_money(price, p))
        .input("Face Value", format_money(bond.face_value(), p))
        .input("Coupon", format_percent(bond.coupon_rate(), p))
        .input("Years to Maturity", bond.years_to_maturity().to_string())
        .result("Yield to Maturity", format_percent(result.rate, p));
    if !ctx.quiet {
        report = report
            .result("Iterations", result.iterations.to_string())
            .result("Residual", format!("{:.3e}", result.residual));
    }
    if result.hit_iteration_cap {
        report = report.result("Note", "iteration cap reached before tolerance");
    }
    Ok(report)
}

/// Execute the ytm command.
pub fn execute(args: &YtmArgs, ctx: &Context) -> Result<()> {
    print_report(&report(args, ctx)?, ctx)
}
