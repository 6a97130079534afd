//! Display formatting shared by the hourly, daily and current-conditions
//! views. Timestamps are provider epoch seconds rendered in the forecast
//! location's UTC offset.

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};

/// Shown when a clock time (sunrise, sunset) is unavailable
pub const UNKNOWN_CLOCK_TIME: &str = "0:00 am";

/// Convert provider seconds into a local date-time. Missing or out-of-range
/// timestamps fall back to the epoch.
pub fn local_time(timestamp_seconds: Option<f64>, tz: &FixedOffset) -> DateTime<FixedOffset> {
    let secs = timestamp_seconds
        .filter(|s| s.is_finite())
        .map(|s| s.trunc() as i64)
        .unwrap_or(0);
    DateTime::<Utc>::from_timestamp(secs, 0)
        .unwrap_or_default()
        .with_timezone(tz)
}

/// Hour-only label such as `8a` or `3p`: 12-hour clock, no leading zero,
/// meridiem reduced to one lowercase letter.
pub fn hour_label(timestamp_seconds: Option<f64>, tz: &FixedOffset) -> String {
    let (is_pm, hour) = local_time(timestamp_seconds, tz).hour12();
    format!("{}{}", hour, if is_pm { 'p' } else { 'a' })
}

/// Short clock time such as `6:42 AM`
pub fn clock_time(timestamp_seconds: Option<f64>, tz: &FixedOffset) -> String {
    match timestamp_seconds {
        Some(_) => local_time(timestamp_seconds, tz)
            .format("%-I:%M %p")
            .to_string(),
        None => UNKNOWN_CLOCK_TIME.to_string(),
    }
}

/// Abbreviated weekday such as `Mon`
pub fn weekday_label(timestamp_seconds: f64, tz: &FixedOffset) -> String {
    local_time(Some(timestamp_seconds), tz)
        .format("%a")
        .to_string()
}

/// Whole-degree temperature label, e.g. `72°`
pub fn degrees(value: f64) -> String {
    format!("{:.0}°", value)
}

/// Whole-percent label, e.g. `40%`
pub fn percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Offset from the provider's `timezone_offset` seconds; invalid offsets
/// fall back to UTC.
pub fn offset_from_seconds(seconds: i32) -> FixedOffset {
    FixedOffset::east_opt(seconds).unwrap_or_else(utc)
}

pub fn utc() -> FixedOffset {
    Utc.fix()
}
