//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Comma separated guessed letters, or `(none)`
#[must_use]
pub fn format_guessed(guessed: &BTreeSet<char>) -> String {
    if guessed.is_empty() {
        return "(none)".to_string();
    }
    guessed
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hint list shown when a new word is drawn
#[must_use]
pub fn format_hints(hints: &[&str], limit: usize) -> String {
    let mut shown = hints.iter().take(limit).copied().collect::<Vec<_>>().join(", ");
    if hints.len() > limit {
        shown.push_str(&format!(", ... ({} more)", hints.len() - limit));
    }
    shown
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `1 game` / `2 games`
#[must_use]
pub fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
