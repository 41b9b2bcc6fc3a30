//! Compound Calculator - closed-form compound interest and savings math
//!
//! This library provides:
//! - Basic formulas: future value, present value, compound interest,
//!   required annual rate, and time to reach a goal
//! - Composite scenarios: growth with periodic contributions, retirement
//!   projection, loan payments, and goal-funding contributions
//! - A configurable [`Calculator`] that applies default compounding,
//!   payment and inflation settings
//!
//! Every operation is a pure function of its numeric inputs.

pub mod error;
pub mod basic;
pub mod composite;
pub mod config;
pub mod calculator;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use basic::{future_value, present_value, compound_interest, annual_rate, time_to_goal};
pub use composite::{
    future_value_with_contributions, retirement_calculator, loan_payment, loan_summary,
    investment_goal, RetirementInputs, RetirementProjection, LoanSummary,
};
pub use config::{CalcConfig, ConfigError};
pub use calculator::Calculator;
