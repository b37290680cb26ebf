//! Relative-time formatting ("5 min", "2 hours", ...).

use chrono::{DateTime, Utc};

/// Human-friendly distance from `past` to `now`.
///
/// `just now` under a minute (including future instants), then minutes,
/// hours, days and weeks; four weeks or more falls back to `YYYY-MM-DD`.
pub fn time_ago(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - past).num_seconds();
    let minutes = seconds.div_euclid(60);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);
    let weeks = days.div_euclid(7);

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min", minutes)
    } else if hours < 24 {
        format!("{} hour{}", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{}", days, plural(days))
    } else if weeks < 4 {
        format!("{} week{}", weeks, plural(weeks))
    } else {
        past.format("%Y-%m-%d").to_string()
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}
