//! FILENAME: app/src/main.rs
// PURPOSE: Keypad entry point with unified logging (session on stdio).
// FORMAT: seq|level|category|message

fn main() {
    app_lib::run();
}
