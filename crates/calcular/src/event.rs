//! Input event vocabulary
//!
//! A closed set of variants is the whole surface between the UI and the
//! engine. Shells translate key codes and button hits into these values at
//! their own edge; the engine never sees labels, key codes, or characters.

use serde::{Deserialize, Serialize};

use crate::op::Op;

/// One user action, stripped of UI vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    DecimalPoint,
    /// One of the four infix operators
    Operator(Op),
    /// Commit the pending calculation
    Equals,
    /// Reset to the startup state
    Clear,
    /// Drop the last typed character
    Backspace,
    /// Divide the current value by one hundred
    Percent,
    /// Flip the sign of the current value
    ToggleSign,
}
