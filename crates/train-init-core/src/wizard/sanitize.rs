//! Neutralizing terminal control input
//!
//! Answers can arrive with raw escape sequences in them, for example arrow keys
//! pressed on a line-based prompt or pasted text carrying cursor movement. Free-text
//! answers have every control sequence stripped. Selection answers additionally read
//! leading up/down arrows as cursor movement over the options.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// CSI, OSC, SS3 and two-byte escape sequences
static CONTROL_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B(?:\[[0-?]*[ -/]*[@-~]|\][^\x07\x1B]*(?:\x07|\x1B\\)?|O.|[@-Z\\-_])").unwrap()
});

/// One up or down arrow at the start of the input
static CURSOR_MOVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\x1B(?:\[|O)([AB])").unwrap()
});

/// Remove escape sequences and any remaining control characters
pub fn strip_control_sequences(input: &str) -> String {
    CONTROL_SEQUENCE
        .replace_all(input, "")
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// Whether `input` contains anything [`strip_control_sequences`] would remove
pub fn has_control_sequences(input: &str) -> bool {
    input.chars().any(char::is_control)
}

/// Split leading arrow keys off `input`: net movement (down is positive) and the rest
pub fn split_cursor_moves(input: &str) -> (isize, &str) {
    let mut delta = 0isize;
    let mut rest = input;
    while let Some(caps) = CURSOR_MOVE.captures(rest) {
        match caps.get(1).map(|m| m.as_str()) {
            Some("B") => delta += 1,
            _ => delta -= 1,
        }
        let end = caps.get(0).map_or(rest.len(), |m| m.end());
        rest = &rest[end..];
    }
    (delta, rest)
}

/// Pick an option index for a selection answer
///
/// Arrow keys move from `default_index`, clamped to the list. Typed text that names an
/// option (or is its 1-based position) wins over the cursor; anything else keeps the
/// cursor position. Returns `None` only when there are no options.
pub fn resolve_selection(input: &str, options: &[String], default_index: usize) -> Option<usize> {
    if options.is_empty() {
        return None;
    }

    let (delta, rest) = split_cursor_moves(input);
    let last = options.len() as isize - 1;
    let cursor = (default_index.min(options.len() - 1) as isize + delta).clamp(0, last) as usize;

    let typed = strip_control_sequences(rest);
    let typed = typed.trim();
    if typed.is_empty() {
        return Some(cursor);
    }
    if let Some(index) = options.iter().position(|option| option == typed) {
        return Some(index);
    }
    if let Ok(position) = typed.parse::<usize>() {
        if (1..=options.len()).contains(&position) {
            return Some(position - 1);
        }
    }

    warn!("'{}' is not one of the offered options, keeping '{}'", typed, options[cursor]);
    Some(cursor)
}
