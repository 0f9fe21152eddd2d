mod display_manager_tests;

use crate::core::models::Shot;
use crate::core::types::{ClockTime, ShootDate, ShotDuration};

pub(super) fn shot(id: i32, title: &str, date: &str, start: &str, minutes: i32) -> Shot {
    let mut s = Shot::new(
        title,
        ShootDate::try_from_str(date).unwrap(),
        ClockTime::try_from_str(start).unwrap(),
        ShotDuration::from_minutes(minutes),
    );
    s.id = id;
    s
}
