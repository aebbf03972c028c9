//! Minute offsets and wall-clock conversions.

/// Offset on the day axis, in minutes.
///
/// Offsets are relative to a caller-chosen origin (usually the first hour
/// shown in the day view) and may be negative.
pub type Minutes = i32;

/// Number of minutes in one hour.
pub const MINUTES_PER_HOUR: Minutes = 60;

/// Latest wall-clock hour accepted, as in `24:00`.
pub const LAST_HOUR: u8 = 24;

/// Convert a wall-clock time to minutes since midnight.
///
/// Returns `None` unless `hours <= 24` and `minutes < 60`, with `24:00` as the
/// latest valid time.
///
/// # Examples
///
/// ```
/// use daylane_core::time::clock_minutes;
///
/// assert_eq!(clock_minutes(9, 30), Some(570));
/// assert_eq!(clock_minutes(24, 0), Some(1440));
/// assert_eq!(clock_minutes(24, 1), None);
/// assert_eq!(clock_minutes(10, 60), None);
/// ```
pub fn clock_minutes(hours: u8, minutes: u8) -> Option<Minutes> {
    let valid = minutes < 60 && (hours < LAST_HOUR || (hours == LAST_HOUR && minutes == 0));
    valid.then(|| Minutes::from(hours) * MINUTES_PER_HOUR + Minutes::from(minutes))
}

/// Convert a whole hour to minutes since midnight.
pub fn hour_minutes(hour: u8) -> Minutes {
    Minutes::from(hour) * MINUTES_PER_HOUR
}
