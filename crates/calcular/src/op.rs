//! Binary operators and their arithmetic
//!
//! Type-safe operator enum: the engine never dispatches on button labels or
//! key characters, only on these four variants.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// The four infix operators offered by the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
}

impl Op {
    /// Returns the glyph shown on the secondary display line
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operator to two operands
    ///
    /// Division faults when the right operand is exactly zero; every other
    /// combination is ordinary IEEE 754 arithmetic.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }

    /// All operators in keypad order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Add, Self::Subtract, Self::Multiply, Self::Divide]
    }
}
