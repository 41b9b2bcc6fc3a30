//! Ordinary annuity math: growth with contributions and goal funding

use crate::basic::future_value;
use crate::error::Result;

/// Future value of 1 paid at the end of each of `periods` periods.
///
/// The zero-rate branch uses exact equality: any non-zero per-period rate,
/// however small, takes the exponential form.
pub fn annuity_factor(period_rate: f64, periods: f64) -> f64 {
    if period_rate == 0.0 {
        periods
    } else {
        ((1.0 + period_rate).powf(periods) - 1.0) / period_rate
    }
}

/// Future value of `initial` plus a `contribution` added every compounding period.
///
/// `contribution` is not checked; zero or negative values still evaluate.
///
/// # Examples
/// ```
/// use compound_calculator::composite::future_value_with_contributions;
///
/// let fv = future_value_with_contributions(1000.0, 100.0, 0.07, 10.0, 12).unwrap();
/// assert!((fv - 19318.142120049335).abs() < 1e-6);
/// ```
pub fn future_value_with_contributions(
    initial: f64,
    contribution: f64,
    rate: f64,
    years: f64,
    compounding: u32,
) -> Result<f64> {
    let fv_initial = future_value(initial, rate, years, compounding)?;

    let n = f64::from(compounding);
    let fv_annuity = contribution * annuity_factor(rate / n, n * years);

    Ok(fv_initial + fv_annuity)
}

/// Contribution per period needed for `current` holdings to reach `target`.
///
/// Returns 0 when `current` alone already grows to at least `target`.
pub fn investment_goal(
    target: f64,
    current: f64,
    rate: f64,
    years: f64,
    compounding: u32,
) -> Result<f64> {
    let fv_current = future_value(current, rate, years, compounding)?;

    if fv_current >= target {
        return Ok(0.0);
    }

    let n = f64::from(compounding);
    let period_rate = rate / n;
    let periods = n * years;
    let shortfall = target - fv_current;

    let required = if period_rate == 0.0 {
        shortfall / periods
    } else {
        shortfall * period_rate / ((1.0 + period_rate).powf(periods) - 1.0)
    };

    Ok(required)
}
