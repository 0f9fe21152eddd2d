use shotlist::core::types::ShotStatus;

use crate::common::{
    CommandArgParser, CommandParser, build_context, execute_command, make_temp_dir,
    normalized_lines, read_log_contents, run_with_input, write_valid_config,
};

#[test]
fn unknown_command_reports_error_and_continues() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "frobnicate\nexit\n");

    assert!(output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    let expected = "Command resolution failed for 'frobnicate'. Unknown command: frobnicate";
    assert!(
        stderr_lines.iter().any(|line| line == expected),
        "stderr did not include expected error. stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn main_can_plan_after_adding_shots() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let input = "shot \"Wide\" 2099-01-01 09:00-10:00 @Pier\n\
                 shot \"Close\" 2099-01-01 10:30 30m @Harbour\n\
                 plan\nexit\n";
    let output = run_with_input(&dir, input);
    assert!(output.status.success(), "plan run should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SHOT PLAN"), "stdout did not include plan output");
    assert!(stdout.contains("Wide"));
}

#[test]
fn overlapping_shot_is_rejected_but_session_continues() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let input = "shot \"Wide\" 2099-01-01 09:00-10:00\n\
                 shot \"Close\" 2099-01-01 09:30 30m\n\
                 shot \"Insert\" 2099-01-01 10:00 15m\n\
                 shot\nexit\n";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Wide"), "conflict should name the blocking shot: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Insert"));
    assert!(!stdout.contains("Close"));
}

#[test]
fn man_command_prints_general_manual() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "man\nexit\n");

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(stdout_lines.iter().any(|line| line == "NAME"));
    assert!(
        stdout_lines
            .iter()
            .any(|line| line == "shotlist - Shot scheduling and equipment readiness.")
    );
}

#[test]
fn man_command_prints_gear_manual() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "man gear\nexit\n");

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(
        stdout_lines
            .iter()
            .any(|line| line == "gear <id> +<gear> [+<gear> ...]")
    );
}

#[test]
fn shot_add_modify_toggle_and_delete_flow_succeeds() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);
    ctx.logger.set_file_logging_enabled(false);

    execute_command(
        "shot \"Wide\" 2099-01-01 09:00-10:00 @Pier #1A",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    assert_eq!(ctx.shots.len(), 1, "shot should be inserted");
    let s = ctx.shots.get(1).expect("shot 1 should exist");
    assert_eq!(s.location, "Pier");
    assert_eq!(s.scene_number, "1A");
    assert_eq!(s.duration.minutes(), 60);

    execute_command("mod 1 @Harbour 13:00-13:45", &arg_parser, &command_parser, &mut ctx);
    let s = ctx.shots.get(1).unwrap();
    assert_eq!(s.location, "Harbour");
    assert_eq!(s.start_time.to_string(), "13:00");
    assert_eq!(s.duration.minutes(), 45);

    execute_command("toggle 1", &arg_parser, &command_parser, &mut ctx);
    assert_eq!(ctx.shots.get(1).unwrap().status, ShotStatus::Done);

    execute_command("del 1", &arg_parser, &command_parser, &mut ctx);
    assert!(ctx.shots.is_empty());
}

#[test]
fn gear_checklist_tracks_preparation() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);
    ctx.logger.set_file_logging_enabled(false);

    for line in [
        "shot \"Wide\" 2099-01-01 09:00-10:00",
        "gear 1 +cam-a +boom",
        "prep 1 +cam-a",
    ] {
        execute_command(line, &arg_parser, &command_parser, &mut ctx);
    }
    let s = ctx.shots.get(1).unwrap();
    assert_eq!(s.equipment_ids, vec!["cam-a", "boom"]);
    assert_eq!(s.prepared_equipment_ids, vec!["cam-a"]);

    execute_command("ungear 1 +cam-a", &arg_parser, &command_parser, &mut ctx);
    let s = ctx.shots.get(1).unwrap();
    assert_eq!(s.equipment_ids, vec!["boom"]);
    assert!(s.prepared_equipment_ids.is_empty());
}

#[test]
fn retake_copies_gear_into_a_new_pending_shot() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);
    ctx.logger.set_file_logging_enabled(false);

    for line in [
        "shot \"Wide\" 2099-01-01 09:00-10:00 +cam-a",
        "prep 1 +cam-a",
        "toggle 1",
        "retake 1 2099-01-02 08:00",
    ] {
        execute_command(line, &arg_parser, &command_parser, &mut ctx);
    }
    assert_eq!(ctx.shots.len(), 2);
    let copy = ctx.shots.get(2).unwrap();
    assert_eq!(copy.title, "Wide");
    assert_eq!(copy.status, ShotStatus::Pending);
    assert_eq!(copy.equipment_ids, vec!["cam-a"]);
    assert!(copy.prepared_equipment_ids.is_empty());
}

#[test]
fn commands_are_written_to_the_session_log() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "shot \"Wide\" 2099-01-01 09:00-10:00\ncheck\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Command run: shot \"Wide\" 2099-01-01 09:00-10:00"));
    assert!(log.contains("Added shot with id 1"));
}
