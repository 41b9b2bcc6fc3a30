//! Compound Calculator CLI
//!
//! Command-line front-end for the compound interest formulas.
//!
//! ```bash
//! compound future-value --principal 1000 --rate 0.05 --years 10
//! compound --compounding 12 rate --present 1000 --future 2000 --years 10
//! compound --json retirement --current-age 30 --retirement-age 65 \
//!     --savings 50000 --monthly 500 --annual-return 0.07
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use compound_calculator::{CalcConfig, Calculator, RetirementInputs};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compound")]
#[command(version, about = "Compound interest, savings, retirement and loan calculator")]
struct Cli {
    /// JSON file with calculator defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Compounding periods per year for the basic formulas
    #[arg(long, global = true)]
    compounding: Option<u32>,

    /// Expected annual inflation rate for retirement projections
    #[arg(long, global = true)]
    inflation: Option<f64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Future value of a lump sum
    FutureValue {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Amount needed today to reach a future amount
    PresentValue {
        #[arg(long)]
        future: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Interest earned on a lump sum
    Interest {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Annual rate required to grow present into future
    Rate {
        #[arg(long)]
        present: f64,
        #[arg(long)]
        future: f64,
        #[arg(long)]
        years: f64,
    },
    /// Years required to grow principal into future
    Time {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        future: f64,
        #[arg(long)]
        rate: f64,
    },
    /// Future value with a contribution every period
    Contributions {
        #[arg(long)]
        initial: f64,
        #[arg(long)]
        contribution: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Retirement savings projection
    Retirement {
        #[arg(long)]
        current_age: i32,
        #[arg(long)]
        retirement_age: i32,
        #[arg(long)]
        savings: f64,
        #[arg(long)]
        monthly: f64,
        #[arg(long)]
        annual_return: f64,
    },
    /// Payment per period on an amortizing loan
    Loan {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Payment, total paid and total interest on an amortizing loan
    LoanSummary {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Contribution per period needed to reach a target
    Goal {
        #[arg(long)]
        target: f64,
        #[arg(long)]
        current: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
}

#[derive(Serialize)]
struct ValueOutput<'a> {
    operation: &'a str,
    value: f64,
}

fn load_config(cli: &Cli) -> Result<CalcConfig> {
    let mut config = match &cli.config {
        Some(path) => CalcConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CalcConfig::default(),
    };
    if let Some(compounding) = cli.compounding {
        config = config.with_compounding(compounding);
    }
    if let Some(inflation) = cli.inflation {
        config = config.with_inflation(inflation);
    }
    config.validate()?;
    Ok(config)
}

fn print_value(operation: &str, value: f64, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&ValueOutput { operation, value })?);
    } else {
        println!("{}: {:.2}", operation, value);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    log::debug!("using {:?}", config);
    let calc = Calculator::with_config(config);
    let json = cli.json;

    match cli.command {
        Command::FutureValue { principal, rate, years } => {
            print_value("future_value", calc.future_value(principal, rate, years)?, json)?
        }
        Command::PresentValue { future, rate, years } => {
            print_value("present_value", calc.present_value(future, rate, years)?, json)?
        }
        Command::Interest { principal, rate, years } => {
            print_value("compound_interest", calc.compound_interest(principal, rate, years)?, json)?
        }
        Command::Rate { present, future, years } => {
            let rate = calc.annual_rate(present, future, years)?;
            if json {
                print_value("annual_rate", rate, true)?;
            } else {
                println!("annual_rate: {:.4}%", rate * 100.0);
            }
        }
        Command::Time { principal, future, rate } => {
            let years = calc.time_to_goal(principal, future, rate)?;
            if json {
                print_value("time_to_goal", years, true)?;
            } else {
                println!("time_to_goal: {:.2} years", years);
            }
        }
        Command::Contributions { initial, contribution, rate, years } => print_value(
            "future_value_with_contributions",
            calc.future_value_with_contributions(initial, contribution, rate, years)?,
            json,
        )?,
        Command::Retirement { current_age, retirement_age, savings, monthly, annual_return } => {
            let inputs = RetirementInputs {
                current_age,
                retirement_age,
                current_savings: savings,
                monthly_contribution: monthly,
                annual_return,
            };
            let plan = calc.retirement(&inputs)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("Years to retirement:     {}", plan.years_to_retirement);
                println!("Future value (nominal):  {:.2}", plan.future_value_nominal);
                println!("Future value (real):     {:.2}", plan.future_value_real);
                println!("Monthly income (nominal): {:.2}", plan.monthly_income_nominal);
                println!("Monthly income (real):   {:.2}", plan.monthly_income_real);
                println!("Total contributions:     {:.2}", plan.total_contributions);
                println!("Total interest:          {:.2}", plan.total_interest);
            }
        }
        Command::Loan { principal, rate, years } => {
            print_value("loan_payment", calc.loan_payment(principal, rate, years), json)?
        }
        Command::LoanSummary { principal, rate, years } => {
            let summary = calc.loan_summary(principal, rate, years);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Payment:        {:.2}", summary.payment);
                println!("Payments:       {}", summary.periods);
                println!("Total paid:     {:.2}", summary.total_paid);
                println!("Total interest: {:.2}", summary.total_interest);
            }
        }
        Command::Goal { target, current, rate, years } => {
            print_value("investment_goal", calc.investment_goal(target, current, rate, years)?, json)?
        }
    }

    Ok(())
}
