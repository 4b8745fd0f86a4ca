//! User-facing strings and row glyphs.
//!
//! Kept as pure functions so the page text can be asserted on without a
//! terminal. Frontends compose these; they never invent their own copy for
//! states the controller already names.

use crate::types::Todo;

/// Page header.
pub const TITLE: &str = "Just do it.";

/// Shown instead of the list while the initial load is pending.
pub const LOADING: &str = "Loading your todos...";

/// Shown when the list is loaded and empty.
pub const EMPTY_STATE: &str = "No tasks yet. Start by adding one above!";

/// Counter line above the list: `3 todos, 9:41 AM`.
pub fn counter_label(count: usize, clock: &str) -> String {
    let noun = if count == 1 { "todo" } else { "todos" };
    format!("{count} {noun}, {clock}")
}

pub fn checkbox_glyph(completed: bool) -> &'static str {
    if completed {
        "✓"
    } else {
        "○"
    }
}

pub fn expand_glyph(expanded: bool) -> &'static str {
    if expanded {
        "▼"
    } else {
        "▶"
    }
}

/// Status line inside the expanded detail panel.
pub fn status_label(completed: bool) -> &'static str {
    if completed {
        "✓ Completed"
    } else {
        "○ Pending"
    }
}

/// Description line inside the expanded detail panel.
pub fn description_label(todo: &Todo) -> &str {
    if todo.description.is_empty() {
        "No description"
    } else {
        &todo.description
    }
}
