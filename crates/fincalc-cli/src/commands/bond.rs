//! Bond command implementation.
//!
//! Closed-form calculations: price, maturity value, perpetuity price,
//! current yield and duration.

use anyhow::Result;
use clap::{Args, Subcommand};

use fincalc_analytics::bonds::{
    bond_price, current_yield, duration, maturity_value, perpetuity_price,
};
use fincalc_core::types::from_percent;

use crate::commands::{validate_price, BondTerms};
use crate::context::Context;
use crate::output::{format_money, format_number, format_percent, print_report, Report};

/// Arguments for the bond command.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    #[command(subcommand)]
    pub command: BondCommand,
}

/// Bond subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum BondCommand {
    /// Present value of a bond at a market rate
    Price(PriceArgs),

    /// Value at maturity with coupons reinvested
    Maturity(MaturityArgs),

    /// Price of a level perpetuity
    Perpetuity(PerpetuityArgs),

    /// Annual coupon over current price
    CurrentYield(CurrentYieldArgs),

    /// Macaulay and modified duration
    Duration(DurationArgs),
}

/// Arguments for bond price.
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondTerms,

    /// Market interest rate (as percentage)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,
}

/// Arguments for bond maturity value.
#[derive(Args, Debug, Clone)]
pub struct MaturityArgs {
    #[command(flatten)]
    pub bond: BondTerms,

    /// Reinvestment rate (as percentage)
    #[arg(short, long, allow_hyphen_values = true)]
    pub reinvestment: f64,
}

/// Arguments for perpetuity price.
#[derive(Args, Debug, Clone)]
pub struct PerpetuityArgs {
    /// Periodic payment ($)
    #[arg(short, long)]
    pub payment: f64,

    /// Discount rate (as percentage)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,
}

/// Arguments for current yield.
#[derive(Args, Debug, Clone)]
pub struct CurrentYieldArgs {
    #[command(flatten)]
    pub bond: BondTerms,

    /// Current market price ($)
    #[arg(short, long)]
    pub price: f64,
}

/// Arguments for duration.
#[derive(Args, Debug, Clone)]
pub struct DurationArgs {
    #[command(flatten)]
    pub bond: BondTerms,

    /// Yield or market interest rate (as percentage)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,
}

/// Builds the report for a bond subcommand.
pub fn report(command: &BondCommand, ctx: &Context) -> Result<Report> {
    let p = ctx.precision;

    let report = match command {
        BondCommand::Price(args) => {
            let bond = args.bond.to_spec()?;
            let price = bond_price(&bond, from_percent(args.rate))?;
            bond_inputs(Report::new("Bond Price"), &args.bond, p)
                .input("Market Rate", format!("{}%", args.rate))
                .result("Bond Price", format_money(price, p))
        }
        BondCommand::Maturity(args) => {
            let bond = args.bond.to_spec()?;
            let value = maturity_value(&bond, from_percent(args.reinvestment))?;
            bond_inputs(Report::new("Bond Maturity Value"), &args.bond, p)
                .input("Reinvestment Rate", format!("{}%", args.reinvestment))
                .result("Maturity Value", format_money(value, p))
        }
        BondCommand::Perpetuity(args) => {
            let price = perpetuity_price(args.payment, from_percent(args.rate))?;
            Report::new("Perpetuity Price")
                .input("Payment", format_money(args.payment, p))
                .input("Discount Rate", format!("{}%", args.rate))
                .result("Perpetuity Price", format_money(price, p))
        }
        BondCommand::CurrentYield(args) => {
            let bond = args.bond.to_spec()?;
            let price = validate_price(args.price)?;
            let cy = current_yield(&bond, price)?;
            bond_inputs(Report::new("Current Yield"), &args.bond, p)
                .input("Price", format_money(price, p))
                .result("Current Yield", format_percent(cy, p))
        }
        BondCommand::Duration(args) => {
            let bond = args.bond.to_spec()?;
            let d = duration(&bond, from_percent(args.rate))?;
            bond_inputs(Report::new("Duration"), &args.bond, p)
                .input("Yield", format!("{}%", args.rate))
                .result("Macaulay Duration", format!("{} years", format_number(d.macaulay, p)))
                .result("Modified Duration", format!("{} years", format_number(d.modified, p)))
                .result("Price", format_money(d.price, p))
        }
    };
    Ok(report)
}

fn bond_inputs(report: Report, terms: &BondTerms, p: usize) -> Report {
    report
        .input("Face Value", format_money(terms.face, p))
        .input("Coupon", format!("{}%", terms.coupon))
        .input("Years to Maturity", terms.years.to_string())
}

/// Execute the bond command.
pub fn execute(args: &BondArgs, ctx: &Context) -> Result<()> {
    print_report(&report(&args.command, ctx)?, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::path::PathBuf;

    fn ctx() -> Context {
        Context::new(&Settings::default(), None, false, None, PathBuf::new())
    }

    fn terms(coupon: f64, years: u32) -> BondTerms {
        BondTerms {
            face: 1000.0,
            coupon,
            years,
        }
    }

    fn primary(command: BondCommand) -> String {
        report(&command, &ctx()).unwrap().primary().unwrap().value.clone()
    }

    #[test]
    fn test_price() {
        let cmd = BondCommand::Price(PriceArgs {
            bond: terms(6.0, 3),
            rate: 8.0,
        });
        assert_eq!(primary(cmd), "$948.46");
    }

    #[test]
    fn test_maturity() {
        let cmd = BondCommand::Maturity(MaturityArgs {
            bond: terms(5.0, 3),
            reinvestment: 4.0,
        });
        assert_eq!(primary(cmd), "$1156.08");
    }

    #[test]
    fn test_perpetuity_zero_rate_is_error() {
        let cmd = BondCommand::Perpetuity(PerpetuityArgs {
            payment: 100.0,
            rate: 0.0,
        });
        let err = report(&cmd, &ctx()).unwrap_err();
        assert!(err.to_string().contains("discount rate must be greater than zero"));
    }

    #[test]
    fn test_current_yield() {
        let cmd = BondCommand::CurrentYield(CurrentYieldArgs {
            bond: terms(5.0, 10),
            price: 950.0,
        });
        assert_eq!(primary(cmd), "5.26%");
    }

    #[test]
    fn test_duration() {
        let cmd = BondCommand::Duration(DurationArgs {
            bond: terms(10.0, 3),
            rate: 10.0,
        });
        let report = report(&cmd, &ctx()).unwrap();
        assert_eq!(report.results()[0].value, "2.74 years");
        assert_eq!(report.results()[1].value, "2.49 years");
    }
}
