//! Time formatting for the live clock and the created-at detail line.
//!
//! The once-per-second tick itself belongs to the frontend event loop; this
//! module only turns instants into display text.

use chrono::{DateTime, Local};

/// 12-hour wall-clock label shown next to the todo counter: `3:45 PM`.
pub fn wall_clock(now: DateTime<Local>) -> String {
    now.format("%-I:%M %p").to_string()
}

/// Created-at line of the detail panel: `Jan 5, 2026, 10:30`.
///
/// Absent or unparsable timestamps render as `N/A`. The timestamp keeps its
/// own offset rather than shifting to the local zone, so the same entity
/// renders the same everywhere.
pub fn format_created_at(created_at: Option<&str>) -> String {
    let Some(raw) = created_at else {
        return "N/A".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%b %-d, %Y, %H:%M").to_string(),
        Err(_) => "N/A".to_string(),
    }
}
