/// ANSI color helper utilities for terminal output.
use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Status color, matching the dashboard badges:
/// done → green, doing → blue, delayed → red, not started → grey.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Done => GREEN,
        Status::Doing => BLUE,
        Status::Delay => RED,
        Status::Todo => GREY,
    }
}

/// Ritorna formattazione colorata di un valore opzionale.
///
/// Esempio:
/// `colorize_optional("—")` → "<grey>—<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "—" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
