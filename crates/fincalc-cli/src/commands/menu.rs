//! Interactive numbered menu.
//!
//! Prompts for one calculation, prints its result and exits. The menu
//! collects inputs and hands them to the same report builders the
//! subcommands use.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::commands::bond::{
    self, BondCommand, CurrentYieldArgs, DurationArgs, MaturityArgs, PerpetuityArgs, PriceArgs,
};
use crate::commands::capital::{self, CapitalCommand, PaybackArgs, RecoveryArgs};
use crate::commands::irr::{self, IrrArgs};
use crate::commands::ytm::{self, YtmArgs};
use crate::commands::{parse_count, parse_number, BondTerms, SolverArgs};
use crate::context::Context;
use crate::error::{CliError, CliResult};
use crate::output::Report;

/// Line-oriented prompt over any reader and writer.
struct Prompter<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    fn say(&mut self, line: &str) -> CliResult<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended").into());
        }
        Ok(line.trim().to_string())
    }

    fn number(&mut self, prompt: &str) -> CliResult<f64> {
        parse_number(&self.ask(prompt)?)
    }

    fn count(&mut self, prompt: &str) -> CliResult<u32> {
        parse_count(&self.ask(prompt)?)
    }

    fn bond_terms(&mut self) -> CliResult<BondTerms> {
        Ok(BondTerms {
            face: self.number("Enter the face value of the bond ($): ")?,
            coupon: self.number("Enter the coupon rate (as %): ")?,
            years: self.count("Enter the number of years until maturity: ")?,
        })
    }

    /// Prints the report, or the reason there is none. Only I/O failures
    /// end the menu with an error.
    fn finish(&mut self, outcome: Result<Report>) -> Result<()> {
        match outcome {
            Ok(report) => report.write_prose(&mut *self.out)?,
            Err(err) => match err.downcast_ref::<CliError>() {
                Some(CliError::Io(_)) => return Err(err),
                Some(CliError::InvalidNumber(_)) => {
                    self.say("Invalid input! Please enter numeric values.")?;
                }
                Some(CliError::RateNotFound(message)) => self.say(&format!("\n{message}"))?,
                _ => self.say(&format!("Error: {err}"))?,
            },
        }
        Ok(())
    }
}

/// Execute the menu on stdin and stdout.
pub fn execute(ctx: &Context) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock(), ctx)
}

/// Runs one pass of the menu.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, ctx: &Context) -> Result<()> {
    let mut p = Prompter { input, out };

    p.say("Welcome to the fincalc assistant!")?;
    p.say("Choose a mode:")?;
    p.say("2: Bond Calculations")?;
    p.say("3: Corporate Finance & Accounting")?;

    match p.ask("Enter 2 or 3: ")?.as_str() {
        "2" => bond_menu(&mut p, ctx),
        "3" => finance_menu(&mut p, ctx),
        _ => Ok(p.say("Invalid mode selected. Please restart and choose 2 or 3.")?),
    }
}

fn bond_menu<R: BufRead, W: Write>(p: &mut Prompter<'_, R, W>, ctx: &Context) -> Result<()> {
    p.say("\nSelect a bond calculation:")?;
    p.say("1: Calculate Bond Maturity Value")?;
    p.say("2: Calculate Bond Price")?;
    p.say("3: Calculate Perpetuity Price")?;
    p.say("4: Calculate Current Yield")?;
    p.say("5: Calculate Yield to Maturity (YTM)")?;
    p.say("6: Calculate Duration")?;

    let command = match p.ask("Enter a number from 1 to 6: ")?.as_str() {
        "1" => read_maturity(p),
        "2" => read_price(p),
        "3" => read_perpetuity(p),
        "4" => read_current_yield(p),
        "5" => {
            let outcome = read_ytm(p).map_err(Into::into).and_then(|args| ytm::report(&args, ctx));
            return p.finish(outcome);
        }
        "6" => read_duration(p),
        _ => return Ok(p.say("Invalid bond calculation choice!")?),
    };

    let outcome = command
        .map_err(Into::into)
        .and_then(|command| bond::report(&command, ctx));
    p.finish(outcome)
}

fn finance_menu<R: BufRead, W: Write>(p: &mut Prompter<'_, R, W>, ctx: &Context) -> Result<()> {
    p.say("\nSelect a corporate finance calculation:")?;
    p.say("1: Calculate IRR")?;
    p.say("2: Calculate Payback Period")?;
    p.say("3: Calculate Recovery Value")?;

    let command = match p.ask("Enter 1, 2, or 3: ")?.as_str() {
        "1" => {
            let cash_flows =
                p.ask("Enter cash flows separated by commas (e.g., -1000, 300, 400, 500): ")?;
            let args = IrrArgs {
                cash_flows,
                solver: SolverArgs::default(),
            };
            return p.finish(irr::report(&args, ctx));
        }
        "2" => p
            .ask(
                "Enter cash flows separated by commas (start with the initial investment \
                 as a negative number, e.g., -1000, 300, 400, 500): ",
            )
            .map(|cash_flows| CapitalCommand::Payback(PaybackArgs { cash_flows })),
        "3" => read_recovery(p),
        _ => return Ok(p.say("Invalid corporate finance calculation choice!")?),
    };

    let outcome = command
        .map_err(Into::into)
        .and_then(|command| capital::report(&command, ctx));
    p.finish(outcome)
}

fn read_maturity<R: BufRead, W: Write>(p: &mut Prompter<'_, R, W>) -> CliResult<BondCommand> {
    let bond = p.bond_terms()?;
    let reinvestment = p.number("Enter the reinvestment rate (as %): ")?;
    Ok(BondCommand::Maturity(MaturityArgs { bond, reinvestment }))
}

fn read_price<R: BufRead, W: Write>(p: &mut Prompter<'_, R, W>) -> CliResult<BondCommand> {
    let face = p.number("Enter the face value of the bond ($): ")?;
    let coupon = p.number("Enter the coupon rate (as %): ")?;
    let rate = p.number("Enter the market interest rate (as %): ")?;
    let years = p.count("Enter the number of years until maturity: ")?;
    Ok(BondCommand::Price(PriceArgs {
        bond: BondTerms { face, coupon, years },
        rate,
    }))
}

fn read_perpetuity<R: BufRead, W: Write>(p: &mut Prompter<'_, R, W>) -> CliResult<BondCommand> {
    let payment = p.number("Enter the periodic payment: ")?;
    let rate = p.number("Enter the discount rate (as a percentage): ")?;
    Ok(BondCommand::Perpetuity(PerpetuityArgs { payment, rate }))
}

fn read_current_yield<R: BufRead, W: Write>(
    p: &mut Prompter<'_, R, W>,
) -> CliResult<BondCommand> {
    let face = p.number("Enter the face value of the bond ($): ")?;
    let coupon = p.number("Enter the coupon rate (as %): ")?;
    let price = p.number("Enter the current market price of the bond ($): ")?;
    // Years do not enter the current yield.
    Ok(BondCommand::CurrentYield(CurrentYieldArgs {
        bond: BondTerms {
            face,
            coupon,
            years: 1,
        },
        price,
    }))
}

fn read_ytm<R: BufRead, W: Write>(p: &mut Prompter<'_, R, W>) -> CliResult<YtmArgs> {
    let price = p.number("Enter the current bond price ($): ")?;
    let bond = p.bond_terms()?;
    Ok(YtmArgs {
        price,
        bond,
        solver: SolverArgs::default(),
    })
}

fn read_duration<R: BufRead, W: Write>(p: &mut Prompter<'_, R, W>) -> CliResult<BondCommand> {
    let bond = p.bond_terms()?;
    let rate = p.number("Enter the yield/market interest rate (as %): ")?;
    Ok(BondCommand::Duration(DurationArgs { bond, rate }))
}

fn read_recovery<R: BufRead, W: Write>(p: &mut Prompter<'_, R, W>) -> CliResult<CapitalCommand> {
    let salvage = p.number("Enter the estimated salvage value ($): ")?;
    let selling_cost = p.number("Enter the selling cost percentage (as %): ")?;
    let tax_rate = p.number("Enter the tax rate on capital gains (as %): ")?;
    Ok(CapitalCommand::Recovery(RecoveryArgs {
        salvage,
        selling_cost,
        tax_rate,
    }))
}
