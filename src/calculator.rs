//! Calculator with configured defaults
//!
//! Holds a [`CalcConfig`] once and applies its compounding, payment and
//! inflation defaults to every formula, so callers only pass the values that
//! vary between calls.

use rayon::prelude::*;

use crate::basic;
use crate::composite::{self, LoanSummary, RetirementInputs, RetirementProjection};
use crate::config::CalcConfig;
use crate::error::Result;

/// Formula front-end that supplies defaults from its config
///
/// # Example
/// ```
/// use compound_calculator::{Calculator, CalcConfig};
///
/// let calc = Calculator::with_config(CalcConfig::default().with_compounding(12));
/// let fv = calc.future_value(1000.0, 0.05, 10.0).unwrap();
/// assert!((fv - 1647.00949769028).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalcConfig,
}

impl Calculator {
    /// Create a calculator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with the given settings
    pub fn with_config(config: CalcConfig) -> Self {
        Self { config }
    }

    /// Settings in effect
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn future_value(&self, principal: f64, rate: f64, time: f64) -> Result<f64> {
        let fv = basic::future_value(principal, rate, time, self.config.compounding)?;
        log::debug!("future_value({}, {}, {}) = {}", principal, rate, time, fv);
        Ok(fv)
    }

    pub fn present_value(&self, future_amount: f64, rate: f64, time: f64) -> Result<f64> {
        basic::present_value(future_amount, rate, time, self.config.compounding)
    }

    pub fn compound_interest(&self, principal: f64, rate: f64, time: f64) -> Result<f64> {
        basic::compound_interest(principal, rate, time, self.config.compounding)
    }

    pub fn annual_rate(&self, present: f64, future: f64, time: f64) -> Result<f64> {
        basic::annual_rate(present, future, time, self.config.compounding)
    }

    pub fn time_to_goal(&self, principal: f64, future: f64, rate: f64) -> Result<f64> {
        basic::time_to_goal(principal, future, rate, self.config.compounding)
    }

    /// Growth with a contribution every period, at the contribution compounding frequency
    pub fn future_value_with_contributions(
        &self,
        initial: f64,
        contribution: f64,
        rate: f64,
        years: f64,
    ) -> Result<f64> {
        composite::future_value_with_contributions(
            initial,
            contribution,
            rate,
            years,
            self.config.contribution_compounding,
        )
    }

    /// Retirement projection using the configured inflation and withdrawal rates
    pub fn retirement(&self, inputs: &RetirementInputs) -> Result<RetirementProjection> {
        let projection = composite::project_retirement(
            inputs,
            self.config.inflation_rate,
            self.config.contribution_compounding,
            self.config.safe_withdrawal_rate,
        )?;
        log::debug!(
            "retirement in {} years: nominal {:.2}, real {:.2}",
            projection.years_to_retirement,
            projection.future_value_nominal,
            projection.future_value_real
        );
        Ok(projection)
    }

    /// Run one retirement projection per candidate annual return, in parallel.
    /// Results keep the order of `returns`.
    pub fn retirement_scenarios(
        &self,
        inputs: &RetirementInputs,
        returns: &[f64],
    ) -> Vec<Result<RetirementProjection>> {
        returns
            .par_iter()
            .map(|&annual_return| {
                let scenario = RetirementInputs { annual_return, ..*inputs };
                self.retirement(&scenario)
            })
            .collect()
    }

    pub fn loan_payment(&self, principal: f64, annual_rate: f64, years: f64) -> f64 {
        let payment = composite::loan_payment(principal, annual_rate, years, self.config.payments_per_year);
        if payment.is_nan() || payment <= 0.0 {
            log::warn!("degenerate loan payment {} for principal {} over {} years", payment, principal, years);
        }
        payment
    }

    pub fn loan_summary(&self, principal: f64, annual_rate: f64, years: f64) -> LoanSummary {
        composite::loan_summary(principal, annual_rate, years, self.config.payments_per_year)
    }

    /// Contribution per period needed to reach `target`
    pub fn investment_goal(&self, target: f64, current: f64, rate: f64, years: f64) -> Result<f64> {
        composite::investment_goal(target, current, rate, years, self.config.contribution_compounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn saver() -> RetirementInputs {
        RetirementInputs {
            current_age: 30,
            retirement_age: 65,
            current_savings: 50_000.0,
            monthly_contribution: 500.0,
            annual_return: 0.07,
        }
    }

    #[test]
    fn test_defaults_match_free_functions() {
        let calc = Calculator::new();

        assert_eq!(
            calc.future_value(1000.0, 0.05, 10.0).unwrap(),
            basic::future_value(1000.0, 0.05, 10.0, 1).unwrap()
        );
        assert_relative_eq!(
            calc.future_value_with_contributions(1000.0, 100.0, 0.07, 10.0).unwrap(),
            19318.142120049335,
            max_relative = 1e-10
        );
        assert_relative_eq!(calc.loan_payment(200_000.0, 0.05, 30.0), 1073.6432460242795, max_relative = 1e-10);
        assert_relative_eq!(
            calc.investment_goal(100_000.0, 10_000.0, 0.07, 10.0).unwrap(),
            461.64297963428027,
            max_relative = 1e-10
        );
        assert_eq!(
            calc.retirement(&saver()).unwrap(),
            composite::retirement_calculator(30, 65, 50_000.0, 500.0, 0.07, 0.02).unwrap()
        );
    }

    #[test]
    fn test_configured_compounding() {
        let calc = Calculator::with_config(CalcConfig::default().with_compounding(12));
        assert_relative_eq!(calc.future_value(1000.0, 0.05, 10.0).unwrap(), 1647.00949769028, max_relative = 1e-10);

        let rate = calc.annual_rate(1000.0, 2000.0, 10.0).unwrap();
        assert_relative_eq!(calc.future_value(1000.0, rate, 10.0).unwrap(), 2000.0, max_relative = 1e-10);

        let t = calc.time_to_goal(1000.0, 2000.0, 0.07).unwrap();
        assert_relative_eq!(calc.future_value(1000.0, 0.07, t).unwrap(), 2000.0, max_relative = 1e-10);

        let pv = calc.present_value(1647.00949769028, 0.05, 10.0).unwrap();
        assert_relative_eq!(pv, 1000.0, max_relative = 1e-10);
        assert!(calc.compound_interest(1000.0, 0.05, 10.0).unwrap() > 647.0);
    }

    #[test]
    fn test_configured_inflation() {
        let calc = Calculator::with_config(CalcConfig::default().with_inflation(0.0));
        let plan = calc.retirement(&saver()).unwrap();
        assert_eq!(plan.monthly_income_real, plan.monthly_income_nominal);
    }

    #[test]
    fn test_retirement_scenarios_keep_order() {
        let calc = Calculator::new();
        let returns = [0.03, 0.05, 0.07, 0.09];
        let results = calc.retirement_scenarios(&saver(), &returns);

        assert_eq!(results.len(), 4);
        let balances: Vec<f64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().future_value_nominal)
            .collect();
        assert!(balances.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_retirement_scenarios_isolate_failures() {
        let calc = Calculator::new();
        // 1% return is below 2% inflation, so the real projection fails
        let results = calc.retirement_scenarios(&saver(), &[0.01, 0.06]);
        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_loan_summary_uses_payments_per_year() {
        let calc = Calculator::new();
        let summary = calc.loan_summary(12_000.0, 0.0, 1.0);
        assert_eq!(summary.payment, 1000.0);
        assert_eq!(summary.periods, 12.0);
    }
}
