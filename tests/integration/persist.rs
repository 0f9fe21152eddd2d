use shotlist::core::models::Shot;
use shotlist::core::persist::SaveFile;
use shotlist::core::types::{ClockTime, ShootDate, ShotDuration};

use crate::common::{
    CommandArgParser, CommandParser, build_context, execute_command, make_temp_dir,
    run_with_input, write_valid_config,
};
use std::fs;
use std::path::PathBuf;

fn write_save_file(path: &PathBuf, save_file: &SaveFile) {
    let contents = serde_json::to_string_pretty(save_file).unwrap();
    fs::write(path, contents).unwrap();
}

fn saved_shot(id: i32, title: &str, start: &str) -> Shot {
    let mut shot = Shot::new(
        title,
        ShootDate::try_from_str("2099-01-01").unwrap(),
        ClockTime::try_from_str(start).unwrap(),
        ShotDuration::from_minutes(60),
    );
    shot.id = id;
    shot
}

#[test]
fn save_command_creates_shoot_file() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);

    let output = run_with_input(
        &dir,
        "shot \"Wide\" 2099-01-01 09:00-10:00\nsave \"snap\"\nexit\n",
    );
    assert!(output.status.success());

    let path = dir.join("shoots").join("snap.json");
    let text = fs::read_to_string(path).expect("save file should exist");
    let parsed: SaveFile = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.shots.len(), 1);
    assert_eq!(parsed.shots[0].title, "Wide");
}

#[test]
fn read_command_restores_shots_and_ids() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let save_path = dir.join("day.json");
    let mut gear = saved_shot(4, "Close", "11:00");
    gear.equipment_ids = vec!["cam-a".into()];
    gear.prepared_equipment_ids = vec!["cam-a".into(), "ghost".into()];
    let save_file = SaveFile {
        shots: vec![saved_shot(2, "Wide", "09:00"), gear],
    };
    write_save_file(&save_path, &save_file);

    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);
    ctx.logger.set_file_logging_enabled(false);
    let line = format!("read \"{}\"", save_path.display());
    execute_command(&line, &arg_parser, &command_parser, &mut ctx);

    assert_eq!(ctx.shots.len(), 2);
    assert_eq!(ctx.shots.get(2).unwrap().title, "Wide");
    let close = ctx.shots.get(4).unwrap();
    assert_eq!(close.prepared_equipment_ids, vec!["cam-a"]);
    assert_eq!(ctx.shots.peek_next_id(), 5);
}

#[test]
fn read_command_rejects_overlapping_file() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let save_path = dir.join("bad.json");
    let save_file = SaveFile {
        shots: vec![saved_shot(1, "Wide", "09:00"), saved_shot(2, "Close", "09:30")],
    };
    write_save_file(&save_path, &save_file);

    let input = format!(
        "shot \"Keep\" 2099-02-01 09:00-10:00\nread \"{}\"\nshot\nexit\n",
        save_path.display()
    );
    let output = run_with_input(&dir, &input);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("overlaps"), "stderr was: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Keep"));
}
