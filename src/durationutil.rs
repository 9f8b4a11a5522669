//! Millisecond duration arithmetic used by the picker.
//!
//! Durations are plain `u64` millisecond counts. These helpers split them into
//! hours, minutes and seconds with a fixed 60/60 radix, build them back up,
//! and format them for display.
//!
//! ```rust
//! use bubbletea_durationpicker::durationutil::{duration_of, format_hours_minutes_seconds};
//!
//! let d = duration_of(1, 2, 3);
//! assert_eq!(d, 3_723_000);
//! assert_eq!(format_hours_minutes_seconds(d), "1:02:03");
//! ```

use std::time::Duration;

/// The number of milliseconds within a second.
pub const MILLIS_PER_SECOND: u64 = 1_000;

/// The number of milliseconds within a minute.
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;

/// The number of milliseconds within an hour.
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Full hours within the duration.
pub fn hours_of(duration_ms: u64) -> u64 {
    duration_ms / MILLIS_PER_HOUR
}

/// Full minutes within the duration, hours included.
pub fn minutes_of(duration_ms: u64) -> u64 {
    duration_ms / MILLIS_PER_MINUTE
}

/// Minutes within the duration excluding full hours (0..=59).
pub fn minutes_in_hour_of(duration_ms: u64) -> u64 {
    (duration_ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
}

/// Full seconds within the duration, minutes and hours included.
pub fn seconds_of(duration_ms: u64) -> u64 {
    duration_ms / MILLIS_PER_SECOND
}

/// Seconds within the duration excluding full minutes (0..=59).
pub fn seconds_in_minute_of(duration_ms: u64) -> u64 {
    (duration_ms % MILLIS_PER_HOUR % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
}

/// Builds a millisecond duration from hours, minutes and seconds.
///
/// Components are not normalized, so `duration_of(0, 90, 0)` is ninety minutes.
/// The result saturates at `u64::MAX`.
pub fn duration_of(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours
        .saturating_mul(MILLIS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(MILLIS_PER_MINUTE))
        .saturating_add(seconds.saturating_mul(MILLIS_PER_SECOND))
}

/// Formats the duration as `h:mm:ss`.
pub fn format_hours_minutes_seconds(duration_ms: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        hours_of(duration_ms),
        minutes_in_hour_of(duration_ms),
        seconds_in_minute_of(duration_ms)
    )
}

/// Formats the duration as `m:ss`, folding hours into the minutes.
pub fn format_minutes_seconds(duration_ms: u64) -> String {
    format!(
        "{}:{:02}",
        minutes_of(duration_ms),
        seconds_in_minute_of(duration_ms)
    )
}

/// Formats the seconds within the minute as `s`.
pub fn format_seconds(duration_ms: u64) -> String {
    seconds_in_minute_of(duration_ms).to_string()
}

/// Converts a millisecond count into a [`Duration`].
pub fn to_std(duration_ms: u64) -> Duration {
    Duration::from_millis(duration_ms)
}

/// Converts a [`Duration`] into whole milliseconds.
///
/// Sub-millisecond precision is truncated and values beyond `u64::MAX`
/// milliseconds saturate.
pub fn from_std(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
