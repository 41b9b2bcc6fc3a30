//! Solving the growth formula for rate or time

use crate::error::{CalcError, Result};
use super::check_compounding;

/// Annual rate that grows `present` into `future` over `time` years.
///
/// Formula: `r = n * ((FV/PV)^(1/(n*t)) - 1)`
///
/// Requires strictly positive amounts with `future > present`, and `time > 0`.
///
/// # Examples
/// ```
/// use compound_calculator::basic::annual_rate;
///
/// let rate = annual_rate(1000.0, 2000.0, 10.0, 1).unwrap();
/// assert!((rate - 0.07177346253629311).abs() < 1e-12);
/// assert!(annual_rate(1000.0, 1000.0, 10.0, 1).is_err());
/// ```
pub fn annual_rate(present: f64, future: f64, time: f64, compounding: u32) -> Result<f64> {
    if present <= 0.0 {
        return Err(CalcError::InvalidInput("present value must be positive"));
    }
    if future <= 0.0 {
        return Err(CalcError::InvalidInput("future value must be positive"));
    }
    if future <= present {
        return Err(CalcError::InvalidInput("future value must be greater than present value"));
    }
    if time <= 0.0 {
        return Err(CalcError::InvalidInput("time must be positive"));
    }
    check_compounding(compounding)?;

    let n = f64::from(compounding);
    Ok(n * ((future / present).powf(1.0 / (n * time)) - 1.0))
}

/// Years needed for `principal` to reach `future` at `rate`.
///
/// Formula: `t = ln(FV/P) / (n * ln(1 + r/n))`
///
/// A zero rate is always rejected, even when `future > principal`.
pub fn time_to_goal(principal: f64, future: f64, rate: f64, compounding: u32) -> Result<f64> {
    if principal <= 0.0 {
        return Err(CalcError::InvalidInput("principal must be positive"));
    }
    if future <= 0.0 {
        return Err(CalcError::InvalidInput("future value must be positive"));
    }
    if rate < 0.0 {
        return Err(CalcError::InvalidInput("interest rate cannot be negative"));
    }
    check_compounding(compounding)?;

    if rate == 0.0 {
        if future <= principal {
            return Err(CalcError::InvalidInput(
                "with zero interest, future value must be greater than principal",
            ));
        }
        return Err(CalcError::InvalidInput("cannot calculate time with zero interest rate"));
    }

    if future <= principal {
        return Err(CalcError::InvalidInput("future value must be greater than principal"));
    }

    let n = f64::from(compounding);
    Ok((future / principal).ln() / (n * (1.0 + rate / n).ln()))
}
