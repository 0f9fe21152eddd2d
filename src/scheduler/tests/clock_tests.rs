use super::clock;
use crate::core::types::ShotDuration;
use crate::scheduler::clock::*;

#[test]
fn time_to_minutes_reads_clock_times() {
    assert_eq!(time_to_minutes("00:00"), 0);
    assert_eq!(time_to_minutes("09:30"), 570);
    assert_eq!(time_to_minutes("23:59"), 1439);
}

#[test]
fn time_to_minutes_treats_missing_time_as_midnight() {
    assert_eq!(time_to_minutes(""), 0);
    assert_eq!(time_to_minutes("noon"), 0);
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "malformed clock time"))]
fn time_to_minutes_flags_corrupt_clock_times() {
    // release builds keep the midnight fallback
    assert_eq!(time_to_minutes("25:00"), 0);
}

#[test]
fn calculate_end_time_adds_decimal_hours() {
    assert_eq!(calculate_end_time("09:00", "1.5"), "10:30");
    assert_eq!(calculate_end_time("14:15", "45m"), "15:00");
}

#[test]
fn calculate_end_time_wraps_without_rollover() {
    assert_eq!(calculate_end_time("23:00", "2h"), "01:00");
}

#[test]
fn calculate_end_time_falls_back_for_bad_input() {
    // midnight start, minimum duration
    assert_eq!(calculate_end_time("??", "abc"), "00:05");
}

#[test]
fn derive_duration_handles_midnight_crossing() {
    assert_eq!(derive_duration(clock("22:00"), clock("01:00")).minutes(), 180);
    assert_eq!(derive_duration(clock("10:00"), clock("11:15")).minutes(), 75);
    assert_eq!(derive_duration(clock("10:00"), clock("10:00")).minutes(), 5);
}

#[test]
fn end_offset_is_unwrapped() {
    let late = clock("23:00");
    let two_hours = ShotDuration::from_minutes(120);
    assert_eq!(end_offset(late, two_hours), 25 * 60);
    assert!(crosses_midnight(late, two_hours));
    assert!(!crosses_midnight(clock("22:00"), two_hours));
}

#[test]
fn oversized_durations_do_not_overflow() {
    assert_eq!(calculate_end_time("08:00", "99999999h"), "08:05");
    let longest = ShotDuration::from_minutes(i32::MAX);
    assert_eq!(end_offset(clock("23:59"), longest), 23 * 60 + 59 + 24 * 60);
    assert!(crosses_midnight(clock("00:01"), longest));
}
