//! Calculador library
//!
//! Terminal shell for the `calcular` engine: an interactive keypad TUI and
//! a headless `replay` command for driving the engine from plain-text
//! scripts. The binary in `main.rs` is a thin dispatcher over this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

pub mod app;
mod cli;
mod error;
pub mod input;
pub mod keypad;
pub mod logging;
pub mod replay;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Commands, ReplayArgs};
pub use error::{CliError, CliResult};
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use replay::{parse_script, run_script, ReplayOutcome, StepRecord};
pub use ui::{render, screen_layout, CalculatorUI, ScreenLayout};
