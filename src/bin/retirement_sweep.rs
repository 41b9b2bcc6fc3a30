//! Sweep a retirement projection across a range of annual returns
//!
//! Writes one CSV row per return to stdout.
//! Accepts config via environment variables:
//!   CURRENT_AGE, RETIREMENT_AGE, CURRENT_SAVINGS, MONTHLY_CONTRIBUTION,
//!   RETURN_MIN, RETURN_MAX, RETURN_STEP, INFLATION_RATE
//! Set CALC_CONFIG to a JSON file to override the remaining calculator defaults.
//! A variable that is set but does not parse is an error.

use anyhow::{bail, Context, Result};
use compound_calculator::{CalcConfig, Calculator, RetirementInputs};
use serde::Serialize;
use std::env;
use std::str::FromStr;

#[derive(Serialize)]
struct SweepRow {
    annual_return: f64,
    years_to_retirement: i32,
    future_value_nominal: f64,
    future_value_real: f64,
    monthly_income_nominal: f64,
    monthly_income_real: f64,
    total_contributions: f64,
    total_interest: f64,
    error: Option<String>,
}

/// Parse a variable's raw value, falling back to `default` only when it is unset
fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(e) => bail!("invalid {}={:?}: {}", name, value, e),
        },
    }
}

fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_or(name, env::var(name).ok(), default)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut config = match env::var("CALC_CONFIG") {
        Ok(path) => CalcConfig::from_json_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        Err(_) => CalcConfig::default(),
    };
    let inflation = env_or("INFLATION_RATE", config.inflation_rate)?;
    config = config.with_inflation(inflation);

    let inputs = RetirementInputs {
        current_age: env_or("CURRENT_AGE", 30)?,
        retirement_age: env_or("RETIREMENT_AGE", 65)?,
        current_savings: env_or("CURRENT_SAVINGS", 50_000.0)?,
        monthly_contribution: env_or("MONTHLY_CONTRIBUTION", 500.0)?,
        annual_return: 0.0,
    };

    let return_min: f64 = env_or("RETURN_MIN", 0.02)?;
    let return_max: f64 = env_or("RETURN_MAX", 0.10)?;
    let return_step: f64 = env_or("RETURN_STEP", 0.005)?;
    if return_step <= 0.0 || return_max < return_min {
        bail!("invalid return range {}..={} step {}", return_min, return_max, return_step);
    }

    let steps = ((return_max - return_min) / return_step + 1e-9).floor() as usize;
    let returns: Vec<f64> = (0..=steps)
        .map(|i| return_min + i as f64 * return_step)
        .collect();
    log::info!("sweeping {} returns from {} to {}", returns.len(), return_min, return_max);

    let calc = Calculator::with_config(config);
    let results = calc.retirement_scenarios(&inputs, &returns);

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for (annual_return, result) in returns.iter().zip(results) {
        let row = match result {
            Ok(plan) => SweepRow {
                annual_return: *annual_return,
                years_to_retirement: plan.years_to_retirement,
                future_value_nominal: plan.future_value_nominal,
                future_value_real: plan.future_value_real,
                monthly_income_nominal: plan.monthly_income_nominal,
                monthly_income_real: plan.monthly_income_real,
                total_contributions: plan.total_contributions,
                total_interest: plan.total_interest,
                error: None,
            },
            Err(e) => {
                log::warn!("return {}: {}", annual_return, e);
                SweepRow {
                    annual_return: *annual_return,
                    years_to_retirement: inputs.retirement_age - inputs.current_age,
                    future_value_nominal: f64::NAN,
                    future_value_real: f64::NAN,
                    monthly_income_nominal: f64::NAN,
                    monthly_income_real: f64::NAN,
                    total_contributions: f64::NAN,
                    total_interest: f64::NAN,
                    error: Some(e.to_string()),
                }
            }
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
