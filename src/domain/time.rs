use chrono::{DateTime, Utc};

/// Renders how long ago `instant` happened relative to `now`
///
/// Under a minute reads "just now", under an hour counts minutes, under a
/// day counts hours, and anything older falls back to the calendar date.
pub fn format_relative_time(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(instant);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();

    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }
    if hours < 24 {
        let plural = if hours > 1 { "s" } else { "" };
        return format!("{hours} hour{plural} ago");
    }
    instant.format("%Y-%m-%d").to_string()
}
