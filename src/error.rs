//! Error types for compound interest calculations

use thiserror::Error;

/// Failure raised when a formula's preconditions are not met.
///
/// Formulas validate every precondition before computing anything, so an
/// error always means no result was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A numeric argument violated a precondition; the message names which one
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

impl CalcError {
    /// The human-readable precondition message
    pub fn message(&self) -> &'static str {
        match self {
            CalcError::InvalidInput(msg) => msg,
        }
    }
}

/// Result type alias for calculations
pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_precondition() {
        let err = CalcError::InvalidInput("principal cannot be negative");
        assert_eq!(err.to_string(), "invalid input: principal cannot be negative");
        assert_eq!(err.message(), "principal cannot be negative");
    }
}
