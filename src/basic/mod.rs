//! Basic compound interest formulas
//!
//! Pure arithmetic over four canonical parameters: principal, annual rate,
//! time in years and compounding periods per year. Every formula checks all
//! of its preconditions before computing and never rounds its result.

mod growth;
mod solve;

pub use growth::{future_value, present_value, compound_interest};
pub use solve::{annual_rate, time_to_goal};

use crate::error::{CalcError, Result};

/// Growth factor `(1 + rate/n)^(n*time)` for already-validated inputs
pub(crate) fn growth_factor(rate: f64, time: f64, compounding: u32) -> f64 {
    let n = f64::from(compounding);
    (1.0 + rate / n).powf(n * time)
}

/// Shared checks for the growth formulas (future value, present value, interest).
/// `amount_msg` names the amount argument in the failure message.
fn check_growth_inputs(
    amount: f64,
    amount_msg: &'static str,
    rate: f64,
    time: f64,
    compounding: u32,
) -> Result<()> {
    if amount < 0.0 {
        return Err(CalcError::InvalidInput(amount_msg));
    }
    if rate < 0.0 {
        return Err(CalcError::InvalidInput("interest rate cannot be negative"));
    }
    if time < 0.0 {
        return Err(CalcError::InvalidInput("time cannot be negative"));
    }
    check_compounding(compounding)
}

fn check_compounding(compounding: u32) -> Result<()> {
    if compounding == 0 {
        return Err(CalcError::InvalidInput("compounding periods must be positive"));
    }
    Ok(())
}
