//! Amortizing loan payments

use serde::{Deserialize, Serialize};

/// Level payment per period that amortizes `principal` over `years`.
///
/// Formula: `PMT = P * r(1+r)^n / ((1+r)^n - 1)` with `r = annual_rate / payments_per_year`
/// and `n = years * payments_per_year`. A zero period rate splits the principal evenly.
///
/// Inputs are not validated; zero periods give an infinite or NaN payment.
///
/// # Examples
/// ```
/// use compound_calculator::composite::loan_payment;
///
/// let pmt = loan_payment(200_000.0, 0.05, 30.0, 12);
/// assert!((pmt - 1073.6432460242795).abs() < 1e-8);
/// ```
pub fn loan_payment(principal: f64, annual_rate: f64, years: f64, payments_per_year: u32) -> f64 {
    let periods = years * f64::from(payments_per_year);
    let period_rate = annual_rate / f64::from(payments_per_year);

    if period_rate == 0.0 {
        return principal / periods;
    }

    let growth = (1.0 + period_rate).powf(periods);
    principal * period_rate * growth / (growth - 1.0)
}

/// Cost of a loan over its full term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    /// Payment per period
    pub payment: f64,
    /// Number of payments over the term
    pub periods: f64,
    /// Sum of all payments
    pub total_paid: f64,
    /// Total paid minus principal
    pub total_interest: f64,
}

/// Payment plus total cost of the loan. Unvalidated, like [`loan_payment`].
pub fn loan_summary(principal: f64, annual_rate: f64, years: f64, payments_per_year: u32) -> LoanSummary {
    let payment = loan_payment(principal, annual_rate, years, payments_per_year);
    let periods = years * f64::from(payments_per_year);
    let total_paid = payment * periods;

    LoanSummary {
        payment,
        periods,
        total_paid,
        total_interest: total_paid - principal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mortgage_payment() {
        let pmt = loan_payment(200_000.0, 0.05, 30.0, 12);
        assert_relative_eq!(pmt, 1073.6432460242795, max_relative = 1e-10);
    }

    #[test]
    fn test_zero_rate_even_split() {
        assert_eq!(loan_payment(12_000.0, 0.0, 1.0, 12), 1000.0);
    }

    #[test]
    fn test_annual_payments() {
        // 10,000 over 2 years at 10%: 10000 * 0.1 * 1.21 / 0.21
        let pmt = loan_payment(10_000.0, 0.10, 2.0, 1);
        assert!((pmt - 5761.904761904762).abs() < 1e-8);
    }

    #[test]
    fn test_degenerate_inputs_not_guarded() {
        assert!(loan_payment(1000.0, 0.0, 0.0, 12).is_infinite());
        assert!(loan_payment(-1000.0, 0.05, 1.0, 12) < 0.0);
    }

    #[test]
    fn test_loan_summary() {
        let summary = loan_summary(200_000.0, 0.05, 30.0, 12);
        assert_eq!(summary.periods, 360.0);
        assert_relative_eq!(summary.total_paid, 1073.6432460242795 * 360.0, max_relative = 1e-10);
        assert_relative_eq!(summary.total_interest, summary.total_paid - 200_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_loan_summary_zero_rate_has_no_interest() {
        let summary = loan_summary(12_000.0, 0.0, 1.0, 12);
        assert_eq!(summary.total_paid, 12_000.0);
        assert_eq!(summary.total_interest, 0.0);
    }
}
