//! Display model and result formatting
//!
//! The engine never exposes raw floats to the UI. Every committed result is
//! rendered back into the same string domain the user types in, so a result
//! can seamlessly become the left operand of the next calculation.

use serde::{Deserialize, Serialize};

/// Two-line display snapshot returned after every event
///
/// `main_text` is the lower line: the value being typed, the last result, or
/// the `"Error"` sentinel. `secondary_text` is the upper line: the captured
/// left operand and the pending operator glyph, or empty when nothing is
/// pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayModel {
    /// Lower display line
    pub main_text: String,
    /// Upper display line
    pub secondary_text: String,
}

/// Formats a committed result for the display
///
/// Whole numbers render without a fractional part. Everything else renders
/// with at most ten fractional digits, trailing zeros and a bare trailing
/// point stripped, which hides binary float noise from sums like `0.1 + 0.2`.
/// Zero always renders as `"0"`, folding the negative-zero sign away.
///
/// # Example
///
/// ```rust
/// use calcular::display::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(-2.5), "-2.5");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let expanded = format!("{value:.10}");
        expanded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
