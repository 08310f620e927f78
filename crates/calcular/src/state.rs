//! The accumulator state machine
//!
//! One flat struct holds the whole running calculation. Events arrive through
//! a single entry point, mutate the state in place, and hand back a fresh
//! [`DisplayModel`] for the UI to paint verbatim. There is no hidden second
//! store: what the display shows is exactly what the next calculation uses.

use crate::display::{format_number, DisplayModel};
use crate::error::{CalcError, CalcResult};
use crate::event::Event;
use crate::op::Op;

/// Text shown on the main line after an arithmetic fault
pub const ERROR_TEXT: &str = "Error";

/// All state of a running calculation
///
/// `current_input` is never empty: it starts as `"0"`, and every path that
/// would drain it writes `"0"` back. After a fault it holds exactly
/// [`ERROR_TEXT`], and the next non-`Clear` event acts on a fresh state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    current_input: String,
    previous_input: String,
    pending_operator: Option<Op>,
    awaiting_new_entry: bool,
    decimal_entered: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the startup state: `"0"` on the display, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            previous_input: String::new(),
            pending_operator: None,
            awaiting_new_entry: false,
            decimal_entered: false,
        }
    }

    /// Applies one event and returns the refreshed display snapshot
    ///
    /// The only way state changes. Faults never escape: they are folded into
    /// [`ERROR_TEXT`] on the main line, and any event other than
    /// [`Event::Clear`] that follows a fault first resets the machine, then
    /// applies normally.
    pub fn handle_event(&mut self, event: Event) -> DisplayModel {
        if self.current_input == ERROR_TEXT && event != Event::Clear {
            self.reset();
        }

        match event {
            Event::Digit(d) => self.digit(d),
            Event::DecimalPoint => self.decimal_point(),
            Event::Operator(op) => self.operator(op),
            Event::Equals => self.equals(),
            Event::Clear => self.reset(),
            Event::Backspace => self.backspace(),
            Event::Percent => self.percent(),
            Event::ToggleSign => self.toggle_sign(),
        }

        self.display_model()
    }

    /// Current display snapshot without applying an event
    #[must_use]
    pub fn display_model(&self) -> DisplayModel {
        let secondary_text = match self.pending_operator {
            Some(op) if !self.previous_input.is_empty() => {
                format!("{} {}", self.previous_input, op.glyph())
            }
            _ => String::new(),
        };
        DisplayModel {
            main_text: self.current_input.clone(),
            secondary_text,
        }
    }

    /// The value being typed or shown on the main line
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// The captured left operand, empty when none is held
    #[must_use]
    pub fn previous_input(&self) -> &str {
        &self.previous_input
    }

    /// The operator awaiting its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Op> {
        self.pending_operator
    }

    /// True when the next digit starts a fresh number
    #[must_use]
    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    fn digit(&mut self, d: u8) {
        // Out-of-range payloads are ignored rather than corrupting the text.
        let Some(digit) = char::from_digit(u32::from(d), 10) else {
            return;
        };
        if self.awaiting_new_entry {
            self.current_input = digit.to_string();
            self.awaiting_new_entry = false;
            self.decimal_entered = false;
        } else if self.current_input == "0" {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit);
        }
    }

    fn decimal_point(&mut self) {
        if self.decimal_entered {
            return;
        }
        if self.awaiting_new_entry {
            self.current_input = "0.".to_string();
            self.awaiting_new_entry = false;
        } else if self.current_input == "0" {
            self.current_input = "0.".to_string();
        } else {
            self.current_input.push('.');
        }
        self.decimal_entered = true;
    }

    fn operator(&mut self, op: Op) {
        if self.pending_operator.is_some() && !self.awaiting_new_entry && !self.commit() {
            // The fault sentinel must never be captured as an operand.
            return;
        }
        self.previous_input = self.current_input.clone();
        self.pending_operator = Some(op);
        self.awaiting_new_entry = true;
        self.decimal_entered = false;
    }

    fn equals(&mut self) {
        self.commit();
        // Repeated Equals must not re-run the operation.
        self.pending_operator = None;
    }

    /// Applies the pending operator to the captured operands
    ///
    /// No-op without both a pending operator and a captured left operand.
    /// Returns false only on a fault, in which case the main line holds
    /// [`ERROR_TEXT`] and the captured operand and operator are left in
    /// place.
    fn commit(&mut self) -> bool {
        let Some(op) = self.pending_operator else {
            return true;
        };
        if self.previous_input.is_empty() {
            return true;
        }
        match self.compute(op) {
            Ok(result) => {
                self.current_input = format_number(result);
                self.previous_input.clear();
                self.awaiting_new_entry = true;
                true
            }
            Err(_) => {
                self.current_input = ERROR_TEXT.to_string();
                false
            }
        }
    }

    fn compute(&self, op: Op) -> CalcResult<f64> {
        let lhs = parse_operand(&self.previous_input)?;
        let rhs = parse_operand(&self.current_input)?;
        op.apply(lhs, rhs)
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn backspace(&mut self) {
        if self.current_input.len() <= 1 {
            self.current_input = "0".to_string();
            return;
        }
        if self.current_input.pop() == Some('.') {
            self.decimal_entered = false;
        }
    }

    fn percent(&mut self) {
        match parse_operand(&self.current_input) {
            Ok(value) => {
                self.current_input = format_number(value / 100.0);
                // The rewrite may add or drop the point wholesale.
                self.decimal_entered = self.current_input.contains('.');
            }
            Err(_) => {
                self.current_input = ERROR_TEXT.to_string();
            }
        }
    }

    fn toggle_sign(&mut self) {
        if let Some(stripped) = self.current_input.strip_prefix('-') {
            self.current_input = stripped.to_string();
        } else {
            self.current_input.insert(0, '-');
        }
    }
}

fn parse_operand(text: &str) -> CalcResult<f64> {
    text.parse()
        .map_err(|_| CalcError::bad_operand(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(state: &mut CalculatorState, events: &[Event]) -> DisplayModel {
        let mut last = state.display_model();
        for &event in events {
            last = state.handle_event(event);
        }
        last
    }

    // ===== Startup state =====

    #[test]
    fn test_new_starts_at_zero() {
        let state = CalculatorState::new();
        assert_eq!(state.current_input(), "0");
        assert_eq!(state.previous_input(), "");
        assert_eq!(state.pending_operator(), None);
        assert!(!state.awaiting_new_entry());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorState::default(), CalculatorState::new());
    }

    #[test]
    fn test_initial_display() {
        let model = CalculatorState::new().display_model();
        assert_eq!(model.main_text, "0");
        assert_eq!(model.secondary_text, "");
    }

    // ===== Digit entry =====

    #[test]
    fn test_digit_replaces_initial_zero() {
        let mut state = CalculatorState::new();
        let model = state.handle_event(Event::Digit(5));
        assert_eq!(model.main_text, "5");
    }

    #[test]
    fn test_digits_concatenate() {
        let mut state = CalculatorState::new();
        let model = feed(&mut state, &[Event::Digit(7), Event::Digit(3)]);
        assert_eq!(model.main_text, "73");
    }

    #[test]
    fn test_leading_zeros_collapse() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[Event::Digit(0), Event::Digit(0), Event::Digit(5)],
        );
        assert_eq!(model.main_text, "5");
    }

    #[test]
    fn test_digit_after_operator_starts_fresh() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[Event::Digit(5), Event::Operator(Op::Add), Event::Digit(3)],
        );
        assert_eq!(model.main_text, "3");
        assert_eq!(model.secondary_text, "5 +");
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(2),
                Event::Operator(Op::Add),
                Event::Digit(3),
                Event::Equals,
                Event::Digit(7),
            ],
        );
        assert_eq!(model.main_text, "7");
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut state = CalculatorState::new();
        let model = state.handle_event(Event::Digit(12));
        assert_eq!(model.main_text, "0");
    }

    // ===== Decimal point =====

    #[test]
    fn test_decimal_on_zero() {
        let mut state = CalculatorState::new();
        let model = state.handle_event(Event::DecimalPoint);
        assert_eq!(model.main_text, "0.");
    }

    #[test]
    fn test_decimal_appends_mid_number() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[Event::Digit(5), Event::DecimalPoint, Event::Digit(5)],
        );
        assert_eq!(model.main_text, "5.5");
    }

    #[test]
    fn test_second_decimal_is_ignored() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(1),
                Event::DecimalPoint,
                Event::DecimalPoint,
                Event::Digit(5),
            ],
        );
        assert_eq!(model.main_text, "1.5");
    }

    #[test]
    fn test_decimal_after_operator_starts_fresh() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[Event::Digit(1), Event::Operator(Op::Add), Event::DecimalPoint],
        );
        assert_eq!(model.main_text, "0.");
        assert_eq!(model.secondary_text, "1 +");
    }

    #[test]
    fn test_decimal_allowed_again_in_next_operand() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(1),
                Event::DecimalPoint,
                Event::Digit(5),
                Event::Operator(Op::Add),
                Event::DecimalPoint,
                Event::Digit(5),
            ],
        );
        assert_eq!(model.main_text, "0.5");
    }

    // ===== Operators =====

    #[test]
    fn test_operator_captures_left_operand() {
        let mut state = CalculatorState::new();
        let model = feed(&mut state, &[Event::Digit(5), Event::Operator(Op::Add)]);
        assert_eq!(model.main_text, "5");
        assert_eq!(model.secondary_text, "5 +");
        assert!(state.awaiting_new_entry());
        assert_eq!(state.pending_operator(), Some(Op::Add));
    }

    #[test]
    fn test_operator_retarget_without_operand() {
        // Pressing a second operator before typing replaces the first.
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Operator(Op::Add),
                Event::Operator(Op::Multiply),
            ],
        );
        assert_eq!(model.main_text, "5");
        assert_eq!(model.secondary_text, "5 ×");
    }

    #[test]
    fn test_chained_operators_commit_left_to_right() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Operator(Op::Add),
                Event::Digit(3),
                Event::Operator(Op::Add),
            ],
        );
        assert_eq!(model.main_text, "8");
        assert_eq!(model.secondary_text, "8 +");
    }

    #[test]
    fn test_chain_ends_with_equals() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Operator(Op::Add),
                Event::Digit(3),
                Event::Operator(Op::Add),
                Event::Digit(2),
                Event::Equals,
            ],
        );
        assert_eq!(model.main_text, "10");
        assert_eq!(model.secondary_text, "");
    }

    #[test]
    fn test_every_operator_glyph_reaches_secondary() {
        for op in Op::all() {
            let mut state = CalculatorState::new();
            let model = feed(&mut state, &[Event::Digit(9), Event::Operator(op)]);
            assert_eq!(model.secondary_text, format!("9 {}", op.glyph()));
        }
    }

    // ===== Equals =====

    #[test]
    fn test_equals_commits_pending_operation() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(2),
                Event::Operator(Op::Add),
                Event::Digit(3),
                Event::Equals,
            ],
        );
        assert_eq!(model.main_text, "5");
        assert_eq!(model.secondary_text, "");
        assert_eq!(state.pending_operator(), None);
        assert_eq!(state.previous_input(), "");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut state = CalculatorState::new();
        let model = feed(&mut state, &[Event::Digit(5), Event::Equals]);
        assert_eq!(model.main_text, "5");
    }

    #[test]
    fn test_repeated_equals_does_not_repeat_operation() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(2),
                Event::Operator(Op::Add),
                Event::Digit(3),
                Event::Equals,
                Event::Equals,
                Event::Equals,
            ],
        );
        assert_eq!(model.main_text, "5");
    }

    #[test]
    fn test_result_feeds_next_calculation() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(2),
                Event::Operator(Op::Add),
                Event::Digit(3),
                Event::Equals,
                Event::Operator(Op::Multiply),
                Event::Digit(2),
                Event::Equals,
            ],
        );
        assert_eq!(model.main_text, "10");
    }

    #[test]
    fn test_division_result_formatting() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(7),
                Event::Operator(Op::Divide),
                Event::Digit(2),
                Event::Equals,
            ],
        );
        assert_eq!(model.main_text, "3.5");
    }

    #[test]
    fn test_float_noise_hidden_in_results() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::DecimalPoint,
                Event::Digit(1),
                Event::Operator(Op::Add),
                Event::DecimalPoint,
                Event::Digit(2),
                Event::Equals,
            ],
        );
        assert_eq!(model.main_text, "0.3");
    }

    // ===== Clear =====

    #[test]
    fn test_clear_resets_everything() {
        let mut state = CalculatorState::new();
        feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Operator(Op::Add),
                Event::Digit(3),
                Event::Clear,
            ],
        );
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn test_clear_display_is_startup_display() {
        let mut state = CalculatorState::new();
        let model = feed(&mut state, &[Event::Digit(9), Event::Clear]);
        assert_eq!(model.main_text, "0");
        assert_eq!(model.secondary_text, "");
    }

    // ===== Backspace =====

    #[test]
    fn test_backspace_drops_last_character() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[Event::Digit(7), Event::Digit(3), Event::Backspace],
        );
        assert_eq!(model.main_text, "7");
    }

    #[test]
    fn test_backspace_single_digit_leaves_zero() {
        let mut state = CalculatorState::new();
        let model = feed(&mut state, &[Event::Digit(7), Event::Backspace]);
        assert_eq!(model.main_text, "0");
    }

    #[test]
    fn test_backspace_on_zero_stays_zero() {
        let mut state = CalculatorState::new();
        let model = state.handle_event(Event::Backspace);
        assert_eq!(model.main_text, "0");
    }

    #[test]
    fn test_backspace_over_point_allows_new_decimal() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::DecimalPoint,
                Event::Backspace,
                Event::DecimalPoint,
            ],
        );
        assert_eq!(model.main_text, "5.");
    }

    // ===== Percent =====

    #[test]
    fn test_percent_divides_by_hundred() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[Event::Digit(5), Event::Digit(0), Event::Percent],
        );
        assert_eq!(model.main_text, "0.5");
    }

    #[test]
    fn test_percent_formats_whole_results() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Digit(0),
                Event::Digit(0),
                Event::Percent,
            ],
        );
        assert_eq!(model.main_text, "5");
    }

    #[test]
    fn test_percent_of_zero() {
        let mut state = CalculatorState::new();
        let model = state.handle_event(Event::Percent);
        assert_eq!(model.main_text, "0");
    }

    #[test]
    fn test_decimal_after_percent_not_duplicated() {
        // "0.5" already holds a point, so a following point is ignored.
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Digit(0),
                Event::Percent,
                Event::DecimalPoint,
            ],
        );
        assert_eq!(model.main_text, "0.5");
    }

    #[test]
    fn test_decimal_usable_after_percent_yields_whole() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Digit(0),
                Event::Digit(0),
                Event::Percent,
                Event::DecimalPoint,
            ],
        );
        assert_eq!(model.main_text, "5.");
    }

    // ===== Sign toggle =====

    #[test]
    fn test_toggle_sign_prepends_minus() {
        let mut state = CalculatorState::new();
        let model = feed(&mut state, &[Event::Digit(5), Event::ToggleSign]);
        assert_eq!(model.main_text, "-5");
    }

    #[test]
    fn test_toggle_sign_twice_is_identity() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[Event::Digit(5), Event::ToggleSign, Event::ToggleSign],
        );
        assert_eq!(model.main_text, "5");
    }

    #[test]
    fn test_toggle_sign_on_zero() {
        let mut state = CalculatorState::new();
        let model = state.handle_event(Event::ToggleSign);
        assert_eq!(model.main_text, "-0");
    }

    #[test]
    fn test_negative_operand_parses_in_commit() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::ToggleSign,
                Event::Operator(Op::Add),
                Event::Digit(8),
                Event::Equals,
            ],
        );
        assert_eq!(model.main_text, "3");
    }

    // ===== Division by zero =====

    #[test]
    fn test_divide_by_zero_shows_error() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Operator(Op::Divide),
                Event::Digit(0),
                Event::Equals,
            ],
        );
        assert_eq!(model.main_text, ERROR_TEXT);
        assert_eq!(model.secondary_text, "");
    }

    #[test]
    fn test_equals_fault_keeps_left_operand_internally() {
        let mut state = CalculatorState::new();
        feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Operator(Op::Divide),
                Event::Digit(0),
                Event::Equals,
            ],
        );
        assert_eq!(state.previous_input(), "5");
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn test_chained_fault_never_captures_sentinel() {
        // The faulting Commit runs inside Operator handling; the capture
        // step is skipped so "Error" cannot become a left operand.
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Operator(Op::Divide),
                Event::Digit(0),
                Event::Operator(Op::Add),
            ],
        );
        assert_eq!(model.main_text, ERROR_TEXT);
        assert_eq!(state.previous_input(), "5");
        assert_eq!(state.pending_operator(), Some(Op::Divide));
    }

    #[test]
    fn test_zero_dividend_is_ordinary() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[
                Event::Digit(0),
                Event::Operator(Op::Divide),
                Event::Digit(5),
                Event::Equals,
            ],
        );
        assert_eq!(model.main_text, "0");
    }

    // ===== Recovery from the sentinel =====

    fn faulted_state() -> CalculatorState {
        let mut state = CalculatorState::new();
        feed(
            &mut state,
            &[
                Event::Digit(5),
                Event::Operator(Op::Divide),
                Event::Digit(0),
                Event::Equals,
            ],
        );
        assert_eq!(state.current_input(), ERROR_TEXT);
        state
    }

    #[test]
    fn test_digit_after_error_starts_clean() {
        let mut state = faulted_state();
        let model = state.handle_event(Event::Digit(7));
        assert_eq!(model.main_text, "7");
        assert_eq!(model.secondary_text, "");
        assert_eq!(state.previous_input(), "");
    }

    #[test]
    fn test_clear_after_error_resets() {
        let mut state = faulted_state();
        let model = state.handle_event(Event::Clear);
        assert_eq!(model.main_text, "0");
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn test_operator_after_error_acts_on_fresh_zero() {
        let mut state = faulted_state();
        let model = state.handle_event(Event::Operator(Op::Add));
        assert_eq!(model.main_text, "0");
        assert_eq!(model.secondary_text, "0 +");
    }

    #[test]
    fn test_equals_after_error_is_noop_on_fresh_state() {
        let mut state = faulted_state();
        let model = state.handle_event(Event::Equals);
        assert_eq!(model.main_text, "0");
        assert_eq!(model.secondary_text, "");
    }

    #[test]
    fn test_backspace_after_error_leaves_zero() {
        let mut state = faulted_state();
        let model = state.handle_event(Event::Backspace);
        assert_eq!(model.main_text, "0");
    }

    #[test]
    fn test_sentinel_is_never_parsed() {
        let mut state = faulted_state();
        let model = feed(
            &mut state,
            &[Event::Percent, Event::ToggleSign, Event::ToggleSign],
        );
        assert_eq!(model.main_text, "0");
    }

    // ===== Display derivation =====

    #[test]
    fn test_secondary_line_shows_operand_and_glyph() {
        let mut state = CalculatorState::new();
        let model = feed(
            &mut state,
            &[Event::Digit(1), Event::Digit(2), Event::Operator(Op::Subtract)],
        );
        assert_eq!(model.secondary_text, "12 −");
    }

    #[test]
    fn test_display_model_is_pure() {
        let mut state = CalculatorState::new();
        feed(&mut state, &[Event::Digit(4), Event::Operator(Op::Add)]);
        let first = state.display_model();
        let second = state.display_model();
        assert_eq!(first, second);
    }
}
