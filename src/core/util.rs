use chrono::{DateTime, Utc};

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Human readable age of a timestamp, e.g. `(5m ago)`
pub fn get_time_diff(timestamp_ms: i64) -> String {
    get_time_diff_from(timestamp_ms, now_millis())
}

pub(crate) fn get_time_diff_from(timestamp_ms: i64, now_ms: i64) -> String {
    let diff_ms = timestamp_ms.abs_diff(now_ms);

    let diff_secs = diff_ms / 1000;
    let is_future = timestamp_ms > now_ms;

    let (value, unit) = if diff_secs < 60 {
        (diff_secs, "s")
    } else if diff_secs < 3600 {
        (diff_secs / 60, "m")
    } else if diff_secs < 86400 {
        (diff_secs / 3600, "h")
    } else {
        (diff_secs / 86400, "d")
    };

    format!("({}{} {})", value, unit, if is_future { "in future" } else { "ago" })
}

/// RFC 3339 rendering of a millisecond timestamp, or `unknown` when out of range
pub fn format_timestamp(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Whole-meter distance label, e.g. `42m`
pub fn format_distance(distance: f64) -> String {
    format!("{:.0}m", distance)
}
