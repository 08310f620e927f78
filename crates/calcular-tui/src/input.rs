//! Keyboard input handling
//!
//! Maps terminal key events onto the engine's event vocabulary. This is the
//! only place key codes are interpreted; past this boundary everything speaks
//! [`Event`].

use calcular::prelude::{Event, Op};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the calculator engine
    Calculator(Event),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        // Handle Ctrl+key combinations
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Calculator(Event::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Calculator(Event::Clear),
            KeyCode::Backspace => KeyAction::Calculator(Event::Backspace),
            _ => KeyAction::None,
        }
    }

    /// Maps a plain character to an action
    ///
    /// This is also the replay script alphabet, with `<` standing in for the
    /// backspace key that plain text cannot carry.
    #[must_use]
    pub fn char_action(c: char) -> KeyAction {
        match c {
            '0'..='9' => {
                // The range guarantees a digit value.
                let d = c.to_digit(10).unwrap_or(0) as u8;
                KeyAction::Calculator(Event::Digit(d))
            }
            '.' => KeyAction::Calculator(Event::DecimalPoint),
            '+' => KeyAction::Calculator(Event::Operator(Op::Add)),
            '-' => KeyAction::Calculator(Event::Operator(Op::Subtract)),
            '*' => KeyAction::Calculator(Event::Operator(Op::Multiply)),
            '/' => KeyAction::Calculator(Event::Operator(Op::Divide)),
            '=' => KeyAction::Calculator(Event::Equals),
            '%' => KeyAction::Calculator(Event::Percent),
            's' | 'S' => KeyAction::Calculator(Event::ToggleSign),
            'c' | 'C' => KeyAction::Calculator(Event::Clear),
            '<' => KeyAction::Calculator(Event::Backspace),
            'q' | 'Q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
