//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Conversion between the display buffer and numeric values.
//! CONTEXT: The display text is the single source of truth for operands;
//! these helpers are the only parse and format paths the engine uses.

use crate::calculator::StateError;

/// Format a value for the display.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    // Integral results keep one decimal place (7 + 3 = shows "10.0"),
    // matching the keypad's float-to-text form.
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.1}", value);
    }

    // Shortest round-trip form for everything else.
    format!("{}", value)
}

/// Format an integer result (factorial) without a decimal point.
pub fn format_integer(value: i64) -> String {
    value.to_string()
}

/// Checked numeric read of display text.
///
/// Accepts everything `str::parse::<f64>` accepts, which includes the
/// transient trailing-dot form ("3.") as well as "inf" and "NaN" text a
/// prior division may have left on the display.
pub fn parse_value(text: &str) -> Result<f64, StateError> {
    text.parse::<f64>().map_err(|_| StateError::InvalidDisplay {
        text: text.to_string(),
    })
}

/// Integer read of display text with the documented fallback: any
/// non-integer text (including "5.0") collapses to 0.
pub fn parse_integer(text: &str) -> i64 {
    text.parse::<i64>().unwrap_or(0)
}
