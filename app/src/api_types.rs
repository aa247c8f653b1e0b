//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared type definitions for frontend communication.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use engine::Calculator;
use serde::{Deserialize, Serialize};

/// Engine state returned to the frontend after every button press.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayData {
    /// Display text the frontend renders verbatim.
    pub display: String,
    /// Keypad legend of the pending operator. None while idle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
    pub should_reset_display: bool,
}

impl DisplayData {
    /// Snapshot the engine for the frontend.
    pub fn from_engine(calculator: &Calculator) -> Self {
        DisplayData {
            display: calculator.display().to_string(),
            pending: calculator.pending().map(|op| op.label().to_string()),
            should_reset_display: calculator.should_reset_display(),
        }
    }
}
