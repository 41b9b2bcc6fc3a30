//! Retirement savings projection
//!
//! Projects savings plus monthly contributions to retirement in both nominal
//! and inflation-adjusted terms, then applies a fixed safe-withdrawal rule to
//! estimate monthly retirement income.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use super::annuity::future_value_with_contributions;
use super::round_cents;

/// Share of the retirement balance assumed withdrawable each year (4% rule)
pub const SAFE_WITHDRAWAL_RATE: f64 = 0.04;

/// Inputs describing a saver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementInputs {
    pub current_age: i32,
    pub retirement_age: i32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Expected nominal annual return (decimal)
    pub annual_return: f64,
}

/// Result of a retirement projection. Monetary fields are rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    pub years_to_retirement: i32,
    /// Balance at retirement in future dollars
    pub future_value_nominal: f64,
    /// Balance at retirement grown at the inflation-adjusted return
    pub future_value_real: f64,
    pub monthly_income_nominal: f64,
    /// Nominal monthly income discounted to today's purchasing power
    pub monthly_income_real: f64,
    pub total_contributions: f64,
    /// Nominal balance minus starting savings and contributions
    pub total_interest: f64,
}

/// Project retirement savings with monthly compounding and the 4% withdrawal rule.
///
/// `years_to_retirement` is `retirement_age - current_age` and is not checked
/// here; a negative value is rejected by the underlying growth formula.
/// A return below inflation gives a negative real return, which is rejected
/// the same way.
pub fn retirement_calculator(
    current_age: i32,
    retirement_age: i32,
    current_savings: f64,
    monthly_contribution: f64,
    annual_return: f64,
    inflation_rate: f64,
) -> Result<RetirementProjection> {
    let inputs = RetirementInputs {
        current_age,
        retirement_age,
        current_savings,
        monthly_contribution,
        annual_return,
    };
    project(&inputs, inflation_rate, 12, SAFE_WITHDRAWAL_RATE)
}

/// Projection with explicit compounding and withdrawal rate
pub(crate) fn project(
    inputs: &RetirementInputs,
    inflation_rate: f64,
    compounding: u32,
    safe_withdrawal_rate: f64,
) -> Result<RetirementProjection> {
    let years = inputs.retirement_age - inputs.current_age;
    if years <= 0 {
        log::warn!(
            "retirement age {} is not after current age {}",
            inputs.retirement_age,
            inputs.current_age
        );
    }
    let years_f = f64::from(years);

    let fv_nominal = future_value_with_contributions(
        inputs.current_savings,
        inputs.monthly_contribution,
        inputs.annual_return,
        years_f,
        compounding,
    )?;

    // Fisher real return
    let real_return = (1.0 + inputs.annual_return) / (1.0 + inflation_rate) - 1.0;
    let fv_real = future_value_with_contributions(
        inputs.current_savings,
        inputs.monthly_contribution,
        real_return,
        years_f,
        compounding,
    )?;

    let monthly_income = fv_nominal * safe_withdrawal_rate / 12.0;
    let monthly_income_real = monthly_income / (1.0 + inflation_rate).powf(years_f);

    let total_contributions = inputs.monthly_contribution * 12.0 * years_f;
    let total_interest = fv_nominal - inputs.current_savings - total_contributions;

    Ok(RetirementProjection {
        years_to_retirement: years,
        future_value_nominal: round_cents(fv_nominal),
        future_value_real: round_cents(fv_real),
        monthly_income_nominal: round_cents(monthly_income),
        monthly_income_real: round_cents(monthly_income_real),
        total_contributions: round_cents(total_contributions),
        total_interest: round_cents(total_interest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_projection_fields_are_consistent() {
        let plan = retirement_calculator(30, 65, 50_000.0, 500.0, 0.07, 0.02).unwrap();

        assert_eq!(plan.years_to_retirement, 35);
        assert_eq!(plan.total_contributions, 210_000.0);

        let fv = future_value_with_contributions(50_000.0, 500.0, 0.07, 35.0, 12).unwrap();
        assert_eq!(plan.future_value_nominal, round_cents(fv));
        assert_eq!(plan.monthly_income_nominal, round_cents(fv * 0.04 / 12.0));
        assert_eq!(plan.total_interest, round_cents(fv - 50_000.0 - 210_000.0));

        // Inflation shrinks both the real balance and real income
        assert!(plan.future_value_real < plan.future_value_nominal);
        assert!(plan.monthly_income_real < plan.monthly_income_nominal);
        let expected_real_income = round_cents(fv * 0.04 / 12.0 / 1.02_f64.powf(35.0));
        assert_eq!(plan.monthly_income_real, expected_real_income);
    }

    #[test]
    fn test_real_value_uses_fisher_return() {
        let plan = retirement_calculator(30, 60, 50_000.0, 5_000.0, 0.06, 0.02).unwrap();
        let real_return = 1.06 / 1.02 - 1.0;
        let fv_real = future_value_with_contributions(50_000.0, 5_000.0, real_return, 30.0, 12).unwrap();
        assert_eq!(plan.future_value_real, round_cents(fv_real));
    }

    #[test]
    fn test_zero_inflation_real_equals_nominal() {
        let plan = retirement_calculator(40, 50, 10_000.0, 100.0, 0.05, 0.0).unwrap();
        assert_eq!(plan.future_value_real, plan.future_value_nominal);
        assert_eq!(plan.monthly_income_real, plan.monthly_income_nominal);
    }

    #[test]
    fn test_already_retired_returns_starting_savings() {
        let plan = retirement_calculator(65, 65, 100_000.0, 500.0, 0.05, 0.02).unwrap();
        assert_eq!(plan.years_to_retirement, 0);
        assert_eq!(plan.future_value_nominal, 100_000.0);
        assert_eq!(plan.total_contributions, 0.0);
        assert_eq!(plan.total_interest, 0.0);
        assert_eq!(plan.monthly_income_nominal, 333.33);
    }

    #[test]
    fn test_balance_rounds_like_half_even_on_exact_value() {
        let plan = retirement_calculator(65, 65, 50_000.005, 0.0, 0.05, 0.02).unwrap();
        assert_eq!(plan.future_value_nominal, 50_000.0);

        let plan = retirement_calculator(65, 65, 0.015, 0.0, 0.05, 0.02).unwrap();
        assert_eq!(plan.future_value_nominal, 0.01);
    }

    #[test]
    fn test_misordered_ages_rejected_by_growth_formula() {
        assert_eq!(
            retirement_calculator(65, 60, 100_000.0, 500.0, 0.05, 0.02),
            Err(CalcError::InvalidInput("time cannot be negative"))
        );
    }

    #[test]
    fn test_return_below_inflation_rejected() {
        assert_eq!(
            retirement_calculator(30, 65, 1_000.0, 100.0, 0.01, 0.03),
            Err(CalcError::InvalidInput("interest rate cannot be negative"))
        );
    }

    #[test]
    fn test_custom_withdrawal_rate() {
        let inputs = RetirementInputs {
            current_age: 65,
            retirement_age: 65,
            current_savings: 120_000.0,
            monthly_contribution: 0.0,
            annual_return: 0.05,
        };
        let plan = project(&inputs, 0.02, 12, 0.03).unwrap();
        assert_eq!(plan.monthly_income_nominal, 300.0);
    }
}
