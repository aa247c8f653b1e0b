//! FILENAME: app/src/session.rs
// PURPOSE: Line-oriented keypad session over stdio.
// CONTEXT: Development frontend for the command layer: one keypad legend per
// line in, the display text after the press on stdout. "state" prints the
// JSON snapshot; "quit" or "exit" (or end of input) ends the session.

use std::io::{BufRead, Write};

use crate::{commands, AppState};
use crate::{log_error, log_info};

/// Run the session until stdin closes or the user quits.
pub fn run_session(state: &AppState) {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    log_info!("SESSION", "keypad session started");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "state" => {
                let snapshot = commands::get_state(state);
                match serde_json::to_string(&snapshot) {
                    Ok(json) => {
                        let _ = writeln!(stdout, "{}", json);
                    }
                    Err(e) => log_error!("SESSION", "snapshot serialization failed: {}", e),
                }
            }
            label => match commands::press_label(state, label) {
                Ok(data) => {
                    let _ = writeln!(stdout, "{}", data.display);
                }
                Err(e) => {
                    let _ = writeln!(stdout, "error: {}", e);
                }
            },
        }
        let _ = stdout.flush();
    }

    log_info!("SESSION", "keypad session ended");
}
