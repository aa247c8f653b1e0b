//! FILENAME: core/engine/src/calculator.rs
//! PURPOSE: The button-driven input/evaluation state machine.
//! CONTEXT: Two logical states: Idle (no pending operation) and Pending
//! (operator captured, awaiting its second operand). Digit and decimal
//! presses edit the display in place in either state; Equals and Clear
//! always return to Idle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::button::{BinaryOp, Button};
use crate::number_format::{format_integer, format_value, parse_integer, parse_value};

/// The one defect class the engine recognizes: a display buffer that does
/// not parse as a number. Unreachable under the defined transitions; it can
/// only be observed through a corrupted snapshot.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum StateError {
    #[error("display is not a number: {text:?}")]
    InvalidDisplay { text: String },
}

/// Button-driven calculator engine.
///
/// The display buffer is the only externally visible output: the caller
/// presses buttons through [`Calculator::handle`] and reads the result back
/// through [`Calculator::display`]. All four state fields are owned
/// exclusively by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculator {
    display: String,
    first_operand: f64,
    pending: Option<BinaryOp>,
    should_reset_display: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            display: "0".to_string(),
            first_operand: 0.0,
            pending: None,
            should_reset_display: false,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Pending binary operator, if a second operand is awaited.
    pub fn pending(&self) -> Option<BinaryOp> {
        self.pending
    }

    /// True when the next digit press starts a new number.
    pub fn should_reset_display(&self) -> bool {
        self.should_reset_display
    }

    /// Checked numeric read of the display.
    pub fn value(&self) -> Result<f64, StateError> {
        parse_value(&self.display)
    }

    /// Apply one button press.
    ///
    /// Never fails: a handler that finds the display unparseable (possible
    /// only through a corrupted snapshot) resets the engine to its initial
    /// Idle state instead of surfacing an error.
    pub fn handle(&mut self, button: Button) {
        match button {
            Button::Digit(digit) => self.press_digit(digit),
            Button::Decimal => self.press_decimal(),
            Button::Op(op) => self.press_operator(op),
            Button::Equals => self.press_equals(),
            Button::Clear => self.reset(),
            Button::SignFlip => self.flip_sign(),
            Button::Percent => self.apply_percent(),
            Button::Factorial => self.apply_factorial(),
        }
    }

    fn press_digit(&mut self, digit: u8) {
        if self.should_reset_display {
            self.display = digit.to_string();
            self.should_reset_display = false;
        } else if self.display == "0" {
            // A fresh entry replaces the bare zero instead of producing "07".
            self.display = digit.to_string();
        } else {
            self.display.push_str(&digit.to_string());
        }
    }

    fn press_decimal(&mut self) {
        if self.should_reset_display {
            // Start a fresh "0." rather than letting a stale display block
            // the decimal point after a computation.
            self.display = "0.".to_string();
            self.should_reset_display = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn press_operator(&mut self, op: BinaryOp) {
        if self.pending.is_some() {
            self.press_equals();
        }
        // Capture the operand after any implicit equals so chains evaluate
        // left to right: 5 + 3 X 2 = is (5 + 3) X 2.
        match self.value() {
            Ok(value) => {
                self.first_operand = value;
                self.pending = Some(op);
                self.should_reset_display = true;
            }
            Err(_) => self.recover(),
        }
    }

    fn press_equals(&mut self) {
        // take() and the operand reset below keep the two slots in lockstep:
        // both set by an operator press, both cleared by a produced result.
        if let Some(op) = self.pending.take() {
            match self.value() {
                Ok(second) => {
                    self.display = format_value(op.apply(self.first_operand, second));
                    self.first_operand = 0.0;
                }
                Err(_) => {
                    self.recover();
                    return;
                }
            }
        }
        self.should_reset_display = true;
    }

    fn flip_sign(&mut self) {
        // Negates the whole current value; the reset flag is untouched, so
        // subsequent digits append to the rewritten text.
        match self.value() {
            Ok(value) => self.display = format_value(-value),
            Err(_) => self.recover(),
        }
    }

    fn apply_percent(&mut self) {
        match self.value() {
            Ok(value) => {
                self.display = format_value(value * 0.01);
                self.should_reset_display = true;
            }
            Err(_) => self.recover(),
        }
    }

    fn apply_factorial(&mut self) {
        // Integer parse with fallback 0; n <= 0 yields the empty product 1.
        let n = parse_integer(&self.display);
        let mut result: i64 = 1;
        // Wrapping keeps the overflow behavior identical across build profiles.
        for factor in 2..=n {
            result = result.wrapping_mul(factor);
        }
        self.display = format_integer(result);
        self.should_reset_display = true;
    }

    /// Clear (AC): every field back to its initial value.
    fn reset(&mut self) {
        *self = Calculator::new();
    }

    /// Invalid-display recovery: drop back to the initial Idle state.
    fn recover(&mut self) {
        self.reset();
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
