//! Minute arithmetic over `HH:MM` clock times and decimal-hour durations.
//!
//! The typed values in `core::types` are what the rest of the crate passes
//! around; the string helpers here cover callers that still hold raw form
//! input and want the forgiving behaviour (missing or garbled times read as
//! midnight).

use crate::core::types::{ClockTime, MINUTES_PER_DAY, ShotDuration};

/// Minutes since 00:00. A missing time (no `:`) reads as `0`.
///
/// A value that looks like a clock time but does not parse is corrupt
/// input rather than a missing one: debug builds panic on it, release
/// builds fall back to `0`.
pub fn time_to_minutes(time: &str) -> i32 {
    match ClockTime::try_from_str(time) {
        Ok(t) => t.minutes(),
        Err(_) => {
            debug_assert!(!time.contains(':'), "malformed clock time '{time}'");
            0
        }
    }
}

/// Lenient duration read; anything unparseable becomes the minimum shot.
pub fn duration_from_str(duration: &str) -> ShotDuration {
    ShotDuration::try_from_str(duration).unwrap_or_default()
}

/// `HH:MM` end of a shot, wrapped onto the 24h clock. No day rollover is
/// tracked: `23:00` plus `2h` ends at `01:00`.
pub fn calculate_end_time(start: &str, duration: &str) -> String {
    let start = ClockTime::from_minutes(time_to_minutes(start));
    start.plus(duration_from_str(duration)).to_string()
}

/// Unwrapped end offset; exceeds [`MINUTES_PER_DAY`] past midnight.
pub fn end_offset(start: ClockTime, duration: ShotDuration) -> i32 {
    start.minutes().saturating_add(duration.minutes())
}

/// Duration picked with an end-time control. An end before the start
/// crosses midnight; the result is never shorter than the minimum shot.
pub fn derive_duration(start: ClockTime, end: ClockTime) -> ShotDuration {
    ShotDuration::between(start, end)
}

/// True once a shot starting at `start` runs past midnight.
pub fn crosses_midnight(start: ClockTime, duration: ShotDuration) -> bool {
    end_offset(start, duration) > MINUTES_PER_DAY
}
