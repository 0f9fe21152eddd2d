use super::shot;
use crate::config::Config;
use crate::core::types::TransportMode;
use crate::scheduler::DayPlan;
use crate::ui::display_manager::DisplayManager;
use crate::ui::width_util::WidthUtil;

fn to_text(buf: Vec<u8>) -> String {
    WidthUtil::strip_ansi(&String::from_utf8(buf).unwrap())
}

#[test]
fn render_shots_lists_every_shot_or_the_empty_message() {
    let dm = DisplayManager::new();
    let a = shot(1, "Wide", "2030-05-01", "09:00", 60);

    let mut buf = Vec::new();
    dm.render_shots(&[&a], 20, &mut buf).unwrap();
    let text = to_text(buf);
    assert!(text.contains("SHOTS"));
    assert!(text.contains("ID | SCENE | TITLE"));
    assert!(text.contains("09:00-10:00"));

    let mut buf = Vec::new();
    dm.render_shots(&[], 20, &mut buf).unwrap();
    assert!(to_text(buf).contains("No shots scheduled."));
}

#[test]
fn render_checklist_has_its_own_empty_message() {
    let mut buf = Vec::new();
    DisplayManager::new().render_checklist(&[], &mut buf).unwrap();
    let text = to_text(buf);
    assert!(text.contains("EQUIPMENT CHECKLIST"));
    assert!(text.contains("No equipment assigned."));
}

#[test]
fn render_config_lists_all_keys() {
    let path = std::env::temp_dir().join(format!(
        "shotlist-dm-config-{}.json",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let config = Config::write_default(&path).unwrap();

    let mut buf = Vec::new();
    DisplayManager::new().render_config(&config, &mut buf).unwrap();
    let text = to_text(buf);
    for key in ["TRAVEL_MODE", "TRAVEL_SERVICE", "SETUP_ALLOWANCE", "FILE_LOGGING_ENABLED"] {
        assert!(text.contains(key), "missing {key}");
    }
}

#[test]
fn render_plan_prints_summary_and_one_table_per_day() {
    let a = shot(1, "Wide", "2030-05-01", "09:00", 60);
    let b = shot(2, "Close", "2030-05-02", "09:00", 60);
    let plans = vec![
        DayPlan {
            date: a.date,
            shots: vec![&a],
            legs: Vec::new(),
            hand_overs: Vec::new(),
        },
        DayPlan {
            date: b.date,
            shots: vec![&b],
            legs: Vec::new(),
            hand_overs: Vec::new(),
        },
    ];

    let mut buf = Vec::new();
    DisplayManager::new()
        .render_plan(&plans, 50, TransportMode::Cycling, true, &mut buf)
        .unwrap();
    let text = to_text(buf);
    assert!(text.starts_with('='));
    assert!(text.contains("SHOT PLAN"));
    assert!(text.contains("Progress: 50% done | travel by cycling"));
    assert!(text.contains("Filtered view: travel checks paused."));
    assert_eq!(text.matches("WINDOW | SCENE").count(), 2);

    // every rule line has the same width
    let widths: Vec<usize> = text
        .lines()
        .filter(|l| !l.is_empty() && l.chars().all(|c| c == '-' || c == '='))
        .map(|l| l.len())
        .collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn render_plan_without_shots_says_so() {
    let mut buf = Vec::new();
    DisplayManager::new()
        .render_plan(&[], 0, TransportMode::Driving, false, &mut buf)
        .unwrap();
    let text = to_text(buf);
    assert!(text.contains("No shots scheduled."));
    assert!(!text.contains("Filtered view"));
}
