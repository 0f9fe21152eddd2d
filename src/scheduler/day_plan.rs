use std::collections::BTreeMap;

use crate::core::aliases::ShotId;
use crate::core::models::Shot;
use crate::core::types::{ClockTime, ShootDate, ShotStatus};
use crate::extensions::string::{ContainsIgnoreCase, StableHash};

/// Shots per calendar day, each bucket ordered by start time. Iterating
/// the map visits days in calendar order.
pub type DayBuckets<'a> = BTreeMap<ShootDate, Vec<&'a Shot>>;

/// Partitions shots by day and orders each day by start time. Shots that
/// start together keep their input order.
pub fn group_by_date<'a, I>(shots: I) -> DayBuckets<'a>
where
    I: IntoIterator<Item = &'a Shot>,
{
    let mut buckets: DayBuckets<'a> = BTreeMap::new();
    for shot in shots {
        buckets.entry(shot.date).or_default().push(shot);
    }
    for day in buckets.values_mut() {
        day.sort_by_key(|s| s.start_time);
    }
    buckets
}

/// Distinct shoot days, earliest first.
pub fn sorted_dates<'a, I>(shots: I) -> Vec<ShootDate>
where
    I: IntoIterator<Item = &'a Shot>,
{
    let mut dates: Vec<ShootDate> = shots.into_iter().map(|s| s.date).collect();
    dates.sort();
    dates.dedup();
    dates
}

/// Every bucketed shot, day by day.
pub fn flatten<'a>(buckets: &DayBuckets<'a>) -> Vec<&'a Shot> {
    buckets.values().flat_map(|day| day.iter().copied()).collect()
}

/// Search and status narrowing applied to the plan view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotFilter {
    pub query: Option<String>,
    pub status: Option<ShotStatus>,
}

impl ShotFilter {
    pub fn new(query: Option<String>, status: Option<ShotStatus>) -> Self {
        let query = query.filter(|q| !q.trim().is_empty());
        Self { query, status }
    }

    /// Any active filter breaks adjacency, which disables travel checks.
    pub fn is_active(&self) -> bool {
        self.query.is_some() || self.status.is_some()
    }

    pub fn matches(&self, shot: &Shot) -> bool {
        let text_ok = match &self.query {
            None => true,
            Some(q) => {
                let q = q.trim();
                shot.title.contains_ignore_case(q)
                    || shot.location.contains_ignore_case(q)
                    || shot.scene_number.contains_ignore_case(q)
            }
        };
        let status_ok = self.status.is_none_or(|st| shot.status == st);
        text_ok && status_ok
    }

    pub fn apply<'a>(&self, shots: &'a [Shot]) -> Vec<&'a Shot> {
        shots.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Daylight bounds shown in a day's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
}

/// Placeholder daylight for a shoot day, derived from the date alone so a
/// day always shows the same times. Sunrise falls between 06:10 and 07:49,
/// sunset between 17:15 and 19:54.
pub fn sun_times(date: ShootDate) -> SunTimes {
    let h = date.to_string().stable_hash().unsigned_abs();
    let at = |hour: u32, minute: u32| ClockTime::from_minutes((hour * 60 + minute) as i32);
    SunTimes {
        sunrise: at(6 + h % 2, 10 + h % 40),
        sunset: at(17 + h % 3, 15 + h % 40),
    }
}

/// Whole-number percentage of shots marked done.
pub fn progress(shots: &[Shot]) -> u8 {
    if shots.is_empty() {
        return 0;
    }
    let done = shots
        .iter()
        .filter(|s| s.status == ShotStatus::Done)
        .count();
    ((done as f64 / shots.len() as f64) * 100.0).round() as u8
}

/// New list with one shot's status flipped.
pub fn toggle_status(shots: &[Shot], id: ShotId) -> Vec<Shot> {
    shots
        .iter()
        .map(|s| {
            if s.id == id {
                Shot {
                    status: s.status.toggled(),
                    ..s.clone()
                }
            } else {
                s.clone()
            }
        })
        .collect()
}
