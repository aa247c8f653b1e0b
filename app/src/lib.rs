//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point (keypad bridge).
// CONTEXT: Holds the shared engine state and wires the session loop to it.

use std::sync::Mutex;

use engine::Calculator;

pub mod api_types;
pub mod commands;
pub mod logging;
pub mod session;

pub use api_types::DisplayData;
pub use logging::{get_log_path, init_log_file, next_seq, write_log, write_log_raw};


// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Shared state the command layer operates on. The frontend owns the event
/// order; commands take the engine lock one press at a time.
pub struct AppState {
    pub calculator: Mutex<Calculator>,
}

pub fn create_app_state() -> AppState {
    AppState {
        calculator: Mutex::new(Calculator::new()),
    }
}

/// Initialize logging and run the keypad session until stdin closes.
pub fn run() {
    match logging::init_log_file() {
        Ok(path) => logging::write_log("I", "INIT", &format!("log file at {:?}", path)),
        Err(e) => eprintln!("[LOG_INIT] console-only logging: {}", e),
    }

    let state = create_app_state();
    session::run_session(&state);
}
