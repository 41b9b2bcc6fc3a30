//! Forward and inverse growth: future value, present value, compound interest

use crate::error::Result;
use super::{check_growth_inputs, growth_factor};

/// Future value of `principal` after `time` years at `rate`, compounded
/// `compounding` times per year.
///
/// Formula: `FV = P * (1 + r/n)^(n*t)`
///
/// Zero rate or zero time return `principal` unchanged.
///
/// # Examples
/// ```
/// use compound_calculator::basic::future_value;
///
/// let fv = future_value(1000.0, 0.05, 10.0, 1).unwrap();
/// assert!((fv - 1628.894626777442).abs() < 1e-9);
/// assert!(future_value(-1000.0, 0.05, 10.0, 1).is_err());
/// ```
pub fn future_value(principal: f64, rate: f64, time: f64, compounding: u32) -> Result<f64> {
    check_growth_inputs(principal, "principal cannot be negative", rate, time, compounding)?;
    Ok(principal * growth_factor(rate, time, compounding))
}

/// Amount needed today to grow into `future_amount`.
///
/// Formula: `PV = FV / (1 + r/n)^(n*t)`
pub fn present_value(future_amount: f64, rate: f64, time: f64, compounding: u32) -> Result<f64> {
    check_growth_inputs(future_amount, "future value cannot be negative", rate, time, compounding)?;
    Ok(future_amount / growth_factor(rate, time, compounding))
}

/// Interest earned on `principal`, i.e. future value minus principal.
pub fn compound_interest(principal: f64, rate: f64, time: f64, compounding: u32) -> Result<f64> {
    Ok(future_value(principal, rate, time, compounding)? - principal)
}
