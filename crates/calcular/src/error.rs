//! Error types for the calculator engine
//!
//! Faults never escape [`crate::state::CalculatorState::handle_event`]: the
//! engine folds them into the `"Error"` sentinel on the main display line.
//! The typed form exists so the arithmetic and parsing steps compose with `?`.

use thiserror::Error;

/// Result type for fallible engine steps
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic faults raised while committing a pending calculation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a right operand of exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// An operand string did not parse as a number
    #[error("Not a number: {text}")]
    BadOperand {
        /// The text that failed to parse
        text: String,
    },
}

impl CalcError {
    /// Create a bad operand fault
    #[must_use]
    pub fn bad_operand(text: impl Into<String>) -> Self {
        Self::BadOperand { text: text.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_display() {
        let err = CalcError::DivisionByZero;
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_bad_operand_display() {
        let err = CalcError::bad_operand("1.2.3");
        assert!(err.to_string().contains("Not a number"));
        assert!(err.to_string().contains("1.2.3"));
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_errors_compare_equal() {
        assert_eq!(CalcError::DivisionByZero, CalcError::DivisionByZero);
        assert_ne!(CalcError::DivisionByZero, CalcError::bad_operand("x"));
    }
}
