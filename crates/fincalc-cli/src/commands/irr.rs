//! Internal rate of return command.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use fincalc_core::types::CashFlowSeries;

use crate::commands::{rate_not_found, SolverArgs};
use crate::context::Context;
use crate::output::{format_percent, print_report, Report};

/// Arguments for the irr command.
#[derive(Args, Debug, Clone)]
pub struct IrrArgs {
    /// Cash flows separated by commas, period 0 first (e.g., "-1000, 300, 400, 500")
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub cash_flows: String,

    #[command(flatten)]
    pub solver: SolverArgs,
}

/// Solves for the IRR and builds the report.
pub fn report(args: &IrrArgs, ctx: &Context) -> Result<Report> {
    let flows = CashFlowSeries::parse(&args.cash_flows)?;
    let solver = ctx.irr_solver(&args.solver)?;

    let result = solver
        .internal_rate_of_return(&flows)
        .map_err(|e| rate_not_found(e, "IRR", solver.bracket(), "cash flows"))?;
    debug!(iterations = result.iterations, residual = result.residual, "IRR solved");

    let mut report = Report::new("Internal Rate of Return")
        .input("Cash Flows", flows.to_string())
        .input("Periods", flows.len().to_string())
        .result("IRR", format_percent(result.rate, ctx.precision));
    if !ctx.quiet {
        report = report
            .result("Iterations", result.iterations.to_string())
            .result("NPV at IRR", format!("{:.3e}", result.residual));
    }
    if result.hit_iteration_cap {
        report = report.result("Note", "iteration cap reached before tolerance");
    }
    Ok(report)
}

/// Execute the irr command.
pub fn execute(args: &IrrArgs, ctx: &Context) -> Result<()> {
    print_report(&report(args, ctx)?, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::path::PathBuf;

    fn args(cash_flows: &str) -> IrrArgs {
        IrrArgs {
            cash_flows: cash_flows.to_string(),
            solver: SolverArgs::default(),
        }
    }

    fn ctx() -> Context {
        Context::new(&Settings::default(), None, false, None, PathBuf::new())
    }

    #[test]
    fn test_irr_report() {
        let report = report(&args("-1000, 300, 400, 500"), &ctx()).unwrap();
        assert_eq!(report.primary().unwrap().value, "8.90%");
    }

    #[test]
    fn test_no_sign_change_message() {
        let err = report(&args("-100, -50, -10"), &ctx()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "IRR not found in the range -99% to 100%. Please check your cash flows."
        );
    }

    #[test]
    fn test_unparsable_cash_flows() {
        let err = report(&args("-1000, abc"), &ctx()).unwrap_err();
        assert!(err.to_string().contains("abc"));
    }
}
