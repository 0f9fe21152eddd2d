use super::{clock, date, shot};
use crate::core::types::ShotDuration;
use crate::scheduler::conflict::*;

fn slot(day: &str, start: &str, minutes: i32) -> ShotSlot {
    ShotSlot::new(
        date(day),
        clock(start),
        SlotEnd::After(ShotDuration::from_minutes(minutes)),
    )
}

#[test]
fn spans_overlap_only_when_they_share_time() {
    let a = MinuteSpan::new(60, 120);
    assert!(a.overlaps(&MinuteSpan::new(90, 150)));
    assert!(a.overlaps(&MinuteSpan::new(70, 80)));
    assert!(!a.overlaps(&MinuteSpan::new(120, 180)));
    assert!(!MinuteSpan::new(120, 180).overlaps(&a));
}

#[test]
fn finds_overlapping_shot_on_same_day() {
    let shots = vec![
        shot(1, "Wide", "2030-05-01", "09:00", 60),
        shot(2, "Close", "2030-05-01", "11:00", 60),
    ];
    let hit = find_conflict(&slot("2030-05-01", "09:30", 30), &shots).unwrap();
    assert_eq!(hit.id, 1);
}

#[test]
fn back_to_back_and_other_days_do_not_conflict() {
    let shots = vec![shot(1, "Wide", "2030-05-01", "09:00", 60)];
    assert!(find_conflict(&slot("2030-05-01", "10:00", 30), &shots).is_none());
    assert!(find_conflict(&slot("2030-05-01", "08:00", 60), &shots).is_none());
    assert!(find_conflict(&slot("2030-05-02", "09:00", 60), &shots).is_none());
}

#[test]
fn first_conflict_follows_list_order() {
    let shots = vec![
        shot(5, "Late", "2030-05-01", "10:00", 60),
        shot(2, "Early", "2030-05-01", "09:00", 60),
    ];
    let hit = find_conflict(&slot("2030-05-01", "09:30", 60), &shots).unwrap();
    assert_eq!(hit.id, 5);
}

#[test]
fn editing_ignores_the_shot_itself() {
    let shots = vec![
        shot(1, "Wide", "2030-05-01", "09:00", 60),
        shot(2, "Close", "2030-05-01", "11:00", 60),
    ];
    let moved = slot("2030-05-01", "09:15", 60);
    assert!(find_conflict_excluding(&moved, &shots, 1).is_none());

    let stretched = slot("2030-05-01", "09:00", 150);
    assert_eq!(find_conflict_excluding(&stretched, &shots, 1).unwrap().id, 2);
}

#[test]
fn end_time_slot_crossing_midnight_blocks_late_shots() {
    let shots = vec![shot(1, "Night", "2030-05-01", "23:30", 20)];
    let candidate = ShotSlot::new(date("2030-05-01"), clock("23:00"), SlotEnd::At(clock("00:30")));
    assert_eq!(candidate.duration().minutes(), 90);
    assert_eq!(candidate.span(), MinuteSpan::new(23 * 60, 24 * 60 + 30));
    assert_eq!(find_conflict(&candidate, &shots).unwrap().id, 1);
}

#[test]
fn slot_of_shot_mirrors_its_window() {
    let s = shot(3, "Insert", "2030-05-01", "14:00", 45);
    let slot = ShotSlot::of_shot(&s);
    assert_eq!(slot.span(), MinuteSpan::of_shot(&s));
    assert_eq!(slot.span().end, 14 * 60 + 45);
}

#[test]
fn identical_start_is_a_conflict() {
    let shots = vec![shot(1, "Wide", "2030-05-01", "09:00", 60)];
    assert_eq!(find_conflict(&slot("2030-05-01", "09:00", 60), &shots).unwrap().id, 1);
    assert_eq!(find_conflict(&slot("2030-05-01", "09:00", 5), &shots).unwrap().id, 1);
}

#[test]
fn oversized_slot_is_bounded_to_a_day() {
    let huge = slot("2030-05-01", "23:00", i32::MAX);
    assert_eq!(huge.duration().minutes(), 24 * 60);
    assert!(find_conflict(&huge, &[]).is_none());

    let shots = vec![shot(1, "Dawn", "2030-05-01", "23:30", 20)];
    assert_eq!(find_conflict(&huge, &shots).unwrap().id, 1);
}
