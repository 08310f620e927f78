//! Headless replay of input scripts
//!
//! Drives a fresh engine with a plain-text script and records the display
//! model after every event. The script alphabet is the keyboard map, with
//! `<` standing in for the backspace key.

use calcular::prelude::{CalculatorState, DisplayModel, Event};
use serde::Serialize;

use crate::error::{CliError, CliResult};
use crate::input::{InputHandler, KeyAction};

/// One script event together with the display it produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// The event fed to the engine
    pub event: Event,
    /// The display model returned for it
    pub display: DisplayModel,
}

/// Result of replaying a full script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayOutcome {
    /// Every step in script order
    pub steps: Vec<StepRecord>,
    /// Display model after the last event
    pub final_display: DisplayModel,
}

/// Parses a script into engine events
///
/// Whitespace is ignored. Any other character outside the alphabet is
/// rejected, naming the offending character. The quit key is deliberately
/// not scriptable.
pub fn parse_script(text: &str) -> CliResult<Vec<Event>> {
    let mut events = Vec::new();
    for c in text.chars() {
        if c.is_whitespace() {
            continue;
        }
        match InputHandler::char_action(c) {
            KeyAction::Calculator(event) => events.push(event),
            KeyAction::Quit | KeyAction::None => {
                tracing::error!(character = ?c, "script character outside the key alphabet");
                return Err(CliError::script(c));
            }
        }
    }
    Ok(events)
}

/// Replays a script against a fresh engine
pub fn run_script(text: &str) -> CliResult<ReplayOutcome> {
    let events = parse_script(text)?;

    let mut state = CalculatorState::new();
    let mut steps = Vec::with_capacity(events.len());
    for event in events {
        // A local named `display` would collide with the helper the tracing
        // macro imports for the `%` sigil.
        let step_display = state.handle_event(event);
        tracing::debug!(event = ?event, main = %step_display.main_text, "replay step");
        steps.push(StepRecord {
            event,
            display: step_display,
        });
    }

    // An empty script still reports the startup display.
    let final_display = steps
        .last()
        .map_or_else(|| state.display_model(), |step| step.display.clone());
    tracing::info!(steps = steps.len(), result = %final_display.main_text, "replay finished");

    Ok(ReplayOutcome {
        steps,
        final_display,
    })
}
