//! FILENAME: core/engine/src/button.rs
//! PURPOSE: Defines the closed set of keypad buttons the engine accepts.
//! CONTEXT: Button identifiers mirror the keypad legends of the calculator
//! frontend. The UI forwards one `Button` per press; labels are the wire form.

use serde::{Deserialize, Serialize};

/// A binary arithmetic operator awaiting its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Apply the operator under IEEE 754 semantics.
    /// Division by zero yields an infinity or NaN, never an error.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => lhs / rhs,
        }
    }

    /// Keypad legend for this operator.
    pub fn label(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "X",
            BinaryOp::Divide => "÷",
        }
    }
}

/// A single keypad button press.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Button {
    /// One of the digits 0-9.
    Digit(u8),
    /// Decimal point.
    Decimal,
    /// Binary operator (+, -, X, ÷).
    Op(BinaryOp),
    Equals,
    /// AC: reset the engine to its initial state.
    Clear,
    /// +/-: negate the current display value.
    SignFlip,
    /// %: divide the current display value by 100.
    Percent,
    /// !: integer factorial of the current display value.
    Factorial,
}

impl Button {
    /// Construct a digit button. Values above 9 are rejected.
    pub fn digit(value: u8) -> Option<Button> {
        if value <= 9 {
            Some(Button::Digit(value))
        } else {
            None
        }
    }

    /// Parse a keypad legend into a button.
    ///
    /// Accepts the frontend legends (`"AC"`, `"+/-"`, `"X"`, `"÷"`, ...) plus
    /// the ASCII spellings `"x"`, `"*"` and `"/"` for the two legends that
    /// are awkward to type in a terminal.
    pub fn from_label(label: &str) -> Option<Button> {
        match label {
            "." => Some(Button::Decimal),
            "=" => Some(Button::Equals),
            "AC" => Some(Button::Clear),
            "+/-" => Some(Button::SignFlip),
            "%" => Some(Button::Percent),
            "!" => Some(Button::Factorial),
            "+" => Some(Button::Op(BinaryOp::Add)),
            "-" => Some(Button::Op(BinaryOp::Subtract)),
            "X" | "x" | "*" => Some(Button::Op(BinaryOp::Multiply)),
            "÷" | "/" => Some(Button::Op(BinaryOp::Divide)),
            _ => match label.as_bytes() {
                [c @ b'0'..=b'9'] => Some(Button::Digit(c - b'0')),
                _ => None,
            },
        }
    }

    /// Keypad legend for this button.
    pub fn label(&self) -> String {
        match self {
            Button::Digit(d) => d.to_string(),
            Button::Decimal => ".".to_string(),
            Button::Op(op) => op.label().to_string(),
            Button::Equals => "=".to_string(),
            Button::Clear => "AC".to_string(),
            Button::SignFlip => "+/-".to_string(),
            Button::Percent => "%".to_string(),
            Button::Factorial => "!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        let buttons = [
            Button::Digit(0),
            Button::Digit(9),
            Button::Decimal,
            Button::Op(BinaryOp::Add),
            Button::Op(BinaryOp::Subtract),
            Button::Op(BinaryOp::Multiply),
            Button::Op(BinaryOp::Divide),
            Button::Equals,
            Button::Clear,
            Button::SignFlip,
            Button::Percent,
            Button::Factorial,
        ];
        for button in buttons {
            assert_eq!(Button::from_label(&button.label()), Some(button));
        }
    }

    #[test]
    fn test_ascii_operator_spellings() {
        assert_eq!(Button::from_label("*"), Some(Button::Op(BinaryOp::Multiply)));
        assert_eq!(Button::from_label("/"), Some(Button::Op(BinaryOp::Divide)));
        assert_eq!(Button::from_label("x"), Some(Button::Op(BinaryOp::Multiply)));
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(Button::from_label(""), None);
        assert_eq!(Button::from_label("10"), None);
        assert_eq!(Button::from_label("=="), None);
    }

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Button::digit(9), Some(Button::Digit(9)));
        assert_eq!(Button::digit(10), None);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        assert!(BinaryOp::Divide.apply(6.0, 0.0).is_infinite());
        assert!(BinaryOp::Divide.apply(0.0, 0.0).is_nan());
    }
}
