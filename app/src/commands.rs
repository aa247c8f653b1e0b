//! FILENAME: app/src/commands.rs
// PURPOSE: Command handlers for keypad operations.
// CONTEXT: These commands are called by the frontend, one button per call.

use crate::api_types::DisplayData;
use crate::AppState;
use crate::{log_enter, log_exit, log_enter_info, log_exit_info, log_warn};
use engine::Button;

// ============================================================================
// KEYPAD COMMANDS
// ============================================================================

/// Forward one button press to the engine and return the refreshed state.
pub fn press_button(state: &AppState, button: Button) -> DisplayData {
    log_enter_info!("CMD", "press_button", "button={}", button.label());

    let mut calculator = state.calculator.lock().unwrap();
    if let Err(e) = calculator.value() {
        // Unreachable under normal event sequences; the engine resets
        // itself on the next arithmetic read.
        log_warn!("CMD", "pre-press state check failed: {}", e);
    }
    calculator.handle(button);
    let data = DisplayData::from_engine(&calculator);

    log_exit_info!("CMD", "press_button", "display={}", data.display);
    data
}

/// Forward one button press given its keypad legend.
pub fn press_label(state: &AppState, label: &str) -> Result<DisplayData, String> {
    log_enter!("CMD", "press_label", "label={}", label);

    let button = Button::from_label(label)
        .ok_or_else(|| format!("unknown button label: {:?}", label))?;
    let data = press_button(state, button);

    log_exit!("CMD", "press_label", "display={}", data.display);
    Ok(data)
}

/// Current display text.
pub fn get_display(state: &AppState) -> String {
    log_enter!("CMD", "get_display");

    let calculator = state.calculator.lock().unwrap();
    let display = calculator.display().to_string();

    log_exit!("CMD", "get_display", "display={}", display);
    display
}

/// Full engine snapshot for the frontend.
pub fn get_state(state: &AppState) -> DisplayData {
    log_enter!("CMD", "get_state");

    let calculator = state.calculator.lock().unwrap();
    let data = DisplayData::from_engine(&calculator);

    log_exit!("CMD", "get_state", "display={}", data.display);
    data
}
