//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod button;
pub mod calculator;
pub mod number_format;

// Re-export commonly used types at the crate root
pub use button::{BinaryOp, Button};
pub use calculator::{Calculator, StateError};
pub use number_format::{format_integer, format_value, parse_integer, parse_value};

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calculator: &mut Calculator, labels: &[&str]) {
        for label in labels {
            calculator.handle(Button::from_label(label).unwrap());
        }
    }

    #[test]
    fn it_starts_at_zero() {
        let calculator = Calculator::new();
        assert_eq!(calculator.display(), "0");
        assert_eq!(calculator.pending(), None);
        assert_eq!(calculator.value().unwrap(), 0.0);
    }

    #[test]
    fn integration_test_entry_and_evaluation_workflow() {
        let mut calculator = Calculator::new();

        // 12.5 + 7.5 =
        press_all(&mut calculator, &["1", "2", ".", "5", "+", "7", ".", "5", "="]);
        assert_eq!(calculator.display(), "20.0");

        // Keep going with the result: X 2 =
        press_all(&mut calculator, &["X", "2", "="]);
        assert_eq!(calculator.display(), "40.0");

        // AC wipes it all
        press_all(&mut calculator, &["AC"]);
        assert_eq!(calculator.display(), "0");
        assert_eq!(calculator.pending(), None);
    }

    #[test]
    fn integration_test_unary_operations_workflow() {
        let mut calculator = Calculator::new();

        press_all(&mut calculator, &["2", "5", "%"]);
        assert_eq!(calculator.display(), "0.25");

        press_all(&mut calculator, &["AC", "6", "+/-"]);
        assert_eq!(calculator.display(), "-6.0");

        press_all(&mut calculator, &["AC", "5", "!"]);
        assert_eq!(calculator.display(), "120");
    }

    #[test]
    fn integration_test_snapshot_round_trip() {
        let mut calculator = Calculator::new();
        press_all(&mut calculator, &["5", "+"]);

        // Snapshot mid-computation and continue on the restored copy.
        let snapshot = serde_json::to_string(&calculator).unwrap();
        let mut restored: Calculator = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(restored.display(), "5");
        assert_eq!(restored.pending(), Some(BinaryOp::Add));

        press_all(&mut restored, &["3", "="]);
        assert_eq!(restored.display(), "8.0");
    }

    #[test]
    fn integration_test_corrupt_snapshot_recovery() {
        // The display invariant can only be broken from outside; the engine
        // recovers by resetting to the initial Idle state.
        let corrupt = r#"{
            "display": "garbage",
            "first_operand": 5.0,
            "pending": "Add",
            "should_reset_display": false
        }"#;
        let mut calculator: Calculator = serde_json::from_str(corrupt).unwrap();
        assert_eq!(
            calculator.value(),
            Err(StateError::InvalidDisplay {
                text: "garbage".to_string()
            })
        );

        calculator.handle(Button::Equals);
        assert_eq!(calculator.display(), "0");
        assert_eq!(calculator.pending(), None);
        assert_eq!(calculator.value().unwrap(), 0.0);
    }
}
