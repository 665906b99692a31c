//! Tooltip text

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Clock time such as `5:07 PM` for absolute time `t` in `tz`
pub fn format_clock_time<Tz>(tz: &Tz, t: f64) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !t.is_finite() {
        return None;
    }
    let utc = DateTime::from_timestamp(t.floor() as i64, 0)?;
    Some(utc.with_timezone(tz).format("%-I:%M %p").to_string())
}

/// Clock time in the browser's local time zone
pub fn format_local_time(t: f64) -> Option<String> {
    format_clock_time(&Local, t)
}

/// `tide is 3.4 ft at 5:07 PM`, or `None` when the height is not finite
pub fn tooltip_text(height: f64, time_label: &str) -> Option<String> {
    height
        .is_finite()
        .then(|| format!("tide is {:.1} ft at {}", height, time_label))
}
