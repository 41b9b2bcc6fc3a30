//! Composite scenarios built on the basic formulas
//!
//! Each scenario combines one or more basic formula calls with annuity math.
//! Composites add no validation of their own: they inherit whatever the basic
//! formulas reject and otherwise return degenerate values for nonsensical inputs.

mod annuity;
mod retirement;
mod loan;

pub use annuity::{future_value_with_contributions, investment_goal, annuity_factor};
pub use retirement::{retirement_calculator, RetirementInputs, RetirementProjection, SAFE_WITHDRAWAL_RATE};
pub(crate) use retirement::project as project_retirement;
pub use loan::{loan_payment, loan_summary, LoanSummary};

/// Round a monetary amount to cents, half to even, using the exact binary value.
///
/// `value * 100.0` can itself round a value just below a half cent up onto
/// the half, so a product landing exactly on `.5` is settled by the sign of the
/// product's rounding error.
pub(crate) fn round_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scaled = value * 100.0;
    let nearest = scaled.round();
    if (scaled - nearest).abs() != 0.5 {
        return nearest / 100.0;
    }

    // Exact product is scaled + err
    let err = value.mul_add(100.0, -scaled);
    let lower = scaled.floor();
    let cents = if err > 0.0 {
        lower + 1.0
    } else if err < 0.0 {
        lower
    } else if lower % 2.0 == 0.0 {
        lower
    } else {
        lower + 1.0
    };
    cents / 100.0
}
