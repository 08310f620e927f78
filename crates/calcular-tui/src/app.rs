//! TUI application state
//!
//! Holds the engine state, the latest display model, the keypad and the
//! session tape. All mutation flows through [`App::apply`], keeping the
//! screen a pure function of one state object.

use std::collections::VecDeque;

use calcular::prelude::{CalculatorState, DisplayModel, Event, ERROR_TEXT};

use crate::keypad::Keypad;

/// Completed calculations kept on the tape.
const MAX_TAPE: usize = 100;

/// Calculator application state
#[derive(Debug)]
pub struct App {
    /// Calculator engine state
    state: CalculatorState,
    /// Display model from the most recent event
    display: DisplayModel,
    /// Interactive keypad mirroring keyboard input
    keypad: Keypad,
    /// Completed calculations, oldest first
    tape: VecDeque<String>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new application in the startup state
    #[must_use]
    pub fn new() -> Self {
        let state = CalculatorState::new();
        let display = state.display_model();
        Self {
            state,
            display,
            keypad: Keypad::new(),
            tape: VecDeque::new(),
            should_quit: false,
        }
    }

    /// Feeds one event to the engine and refreshes the derived state
    ///
    /// On [`Event::Equals`] the full expression is captured before the
    /// engine consumes it, so the tape can record `2 + 3 = 5` even though
    /// the committed state no longer holds the operands.
    pub fn apply(&mut self, event: Event) {
        let expression = if event == Event::Equals {
            self.pending_expression()
        } else {
            None
        };

        self.display = self.state.handle_event(event);
        tracing::debug!(event = ?event, main = %self.display.main_text, "engine event");
        if self.display.main_text == ERROR_TEXT {
            tracing::warn!(event = ?event, "arithmetic fault shown on display");
        }

        if let Some(expr) = expression {
            self.record(format!("{expr} = {}", self.display.main_text));
        }

        self.keypad.highlight_event(event);
    }

    /// Returns the expression an Equals would evaluate, if any
    fn pending_expression(&self) -> Option<String> {
        match self.state.pending_operator() {
            Some(op) if !self.state.previous_input().is_empty() => Some(format!(
                "{} {} {}",
                self.state.previous_input(),
                op.glyph(),
                self.state.current_input()
            )),
            _ => None,
        }
    }

    /// Appends a tape entry, dropping the oldest past the cap
    fn record(&mut self, entry: String) {
        self.tape.push_back(entry);
        while self.tape.len() > MAX_TAPE {
            self.tape.pop_front();
        }
    }

    /// Returns the latest display model
    #[must_use]
    pub fn display(&self) -> &DisplayModel {
        &self.display
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the session tape, oldest entry first
    #[must_use]
    pub fn tape(&self) -> &VecDeque<String> {
        &self.tape
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
