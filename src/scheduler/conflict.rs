use crate::core::aliases::ShotId;
use crate::core::models::Shot;
use crate::core::types::{ClockTime, ShootDate, ShotDuration};
use crate::scheduler::clock::{derive_duration, end_offset};

/// Half-open `[start, end)` interval in minutes from the start of a day.
/// `end` may exceed a day for shots that run past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteSpan {
    pub start: i32,
    pub end: i32,
}

impl MinuteSpan {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn of_shot(shot: &Shot) -> Self {
        Self::new(shot.start_time.minutes(), shot.end_minutes())
    }

    /// Back-to-back spans (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &MinuteSpan) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// How the candidate's window is closed: by an end-time picker or by a
/// typed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEnd {
    At(ClockTime),
    After(ShotDuration),
}

/// A shot being scheduled or edited, before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotSlot {
    pub date: ShootDate,
    pub start: ClockTime,
    pub end: SlotEnd,
}

impl ShotSlot {
    pub fn new(date: ShootDate, start: ClockTime, end: SlotEnd) -> Self {
        Self { date, start, end }
    }

    pub fn of_shot(shot: &Shot) -> Self {
        Self::new(shot.date, shot.start_time, SlotEnd::After(shot.duration))
    }

    pub fn duration(&self) -> ShotDuration {
        match self.end {
            SlotEnd::At(end) => derive_duration(self.start, end),
            SlotEnd::After(duration) => duration,
        }
    }

    pub fn span(&self) -> MinuteSpan {
        MinuteSpan::new(self.start.minutes(), end_offset(self.start, self.duration()))
    }
}

/// First shot in `existing` (list order) on the candidate's day whose
/// window overlaps the candidate's. Pure; callers decide whether to block.
pub fn find_conflict<'a>(candidate: &ShotSlot, existing: &'a [Shot]) -> Option<&'a Shot> {
    first_overlap(candidate, existing.iter())
}

/// Same as [`find_conflict`] but ignores the shot being edited.
pub fn find_conflict_excluding<'a>(
    candidate: &ShotSlot,
    existing: &'a [Shot],
    exclude: ShotId,
) -> Option<&'a Shot> {
    first_overlap(candidate, existing.iter().filter(|s| s.id != exclude))
}

fn first_overlap<'a>(
    candidate: &ShotSlot,
    mut shots: impl Iterator<Item = &'a Shot>,
) -> Option<&'a Shot> {
    let span = candidate.span();
    shots.find(|s| s.date == candidate.date && span.overlaps(&MinuteSpan::of_shot(s)))
}
