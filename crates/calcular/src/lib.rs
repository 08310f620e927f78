//! Calcular: accumulator state machine for a four-function calculator
//!
//! The engine is one flat struct driven by a closed event vocabulary. A shell
//! feeds it [`Event`] values and paints the returned [`DisplayModel`]; there
//! is no other channel between the two. Arithmetic faults stay in-band as the
//! `"Error"` sentinel on the main display line.
//!
//! Design rules:
//! - Unidirectional flow: event in, state mutated, display snapshot out
//! - No UI vocabulary: the engine never sees key codes or button labels
//! - Results re-enter the string domain: a committed result is immediately
//!   usable as the left operand of the next calculation
//!
//! # Example
//!
//! ```rust
//! use calcular::prelude::*;
//!
//! let mut state = CalculatorState::new();
//! state.handle_event(Event::Digit(2));
//! state.handle_event(Event::Operator(Op::Add));
//! state.handle_event(Event::Digit(3));
//! let display = state.handle_event(Event::Equals);
//!
//! assert_eq!(display.main_text, "5");
//! assert_eq!(display.secondary_text, "");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod display;
pub mod error;
pub mod event;
pub mod op;
pub mod state;

pub use display::{format_number, DisplayModel};
pub use error::{CalcError, CalcResult};
pub use event::Event;
pub use op::Op;
pub use state::{CalculatorState, ERROR_TEXT};

/// Convenience re-exports for shells and tests
pub mod prelude {
    pub use crate::display::{format_number, DisplayModel};
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::event::Event;
    pub use crate::op::Op;
    pub use crate::state::{CalculatorState, ERROR_TEXT};
}
