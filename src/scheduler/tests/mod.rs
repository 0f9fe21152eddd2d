mod clock_tests;
mod conflict_tests;

use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::models::Shot;
use crate::core::types::{ClockTime, ShootDate, ShotDuration};
use crate::logging::Logger;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("shotlist-scheduler-test-{nanos}-{uniq}"));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub(super) fn make_ctx() -> AppContext {
    let dir = temp_dir();
    let config = Config::write_default(dir.join("config.json")).unwrap();
    let ctx = AppContext::with_parts(
        config,
        Logger::capturing(),
        dir.join("config.json"),
        dir.join("shoots"),
        dir.join("logs"),
    );
    ctx.logger.set_file_logging_enabled(false);
    ctx
}

pub(super) fn date(s: &str) -> ShootDate {
    ShootDate::try_from_str(s).unwrap()
}

pub(super) fn clock(s: &str) -> ClockTime {
    ClockTime::try_from_str(s).unwrap()
}

pub(super) fn shot(id: i32, title: &str, day: &str, start: &str, minutes: i32) -> Shot {
    let mut s = Shot::new(
        title,
        date(day),
        clock(start),
        ShotDuration::from_minutes(minutes),
    );
    s.id = id;
    s
}
