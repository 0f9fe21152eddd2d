use shotlist::config::Config;
use shotlist::core::types::TransportMode;

use crate::common::{
    build_context, make_temp_dir, normalized_lines, read_log_contents, run_with_input,
    write_config, write_valid_config,
};

#[test]
fn main_allows_running_config_command() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "config\nexit\n");
    assert!(output.status.success(), "config run should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("CONFIG"),
        "stdout did not include CONFIG table"
    );
    assert!(stdout.contains("TRAVEL_MODE"));
}

#[test]
fn config_set_persists_to_disk() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "config TRAVEL_MODE walking\nexit\n");
    assert!(output.status.success());

    let stdout_lines = normalized_lines(&output.stdout);
    assert!(
        stdout_lines
            .iter()
            .any(|l| l == "Config TRAVEL_MODE changed from driving to walking."),
        "stdout did not include change line:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
    let cfg = Config::load_from(dir.join("config.json")).expect("config should reload");
    assert_eq!(cfg.travel_mode(), TransportMode::Walking);
}

#[test]
fn invalid_config_value_is_reported_and_ignored() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "config SETUP_ALLOWANCE lots\nexit\n");
    assert!(output.status.success(), "session should complete");
    assert!(!normalized_lines(&output.stderr).is_empty());

    let ctx = build_context(&dir);
    assert_eq!(ctx.config.setup_allowance(), 20);
}

#[test]
fn travel_mode_drives_plan_risk() {
    let dir = make_temp_dir("config");
    write_config(&dir, "walking", "estimate", 20, "True");
    let input = "shot \"Wide\" 2099-01-01 09:00-10:00 @Pier\n\
                 shot \"Close\" 2099-01-01 10:01 30m @\"Old Mill\"\n\
                 plan\nexit\n";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("travel by walking"));
    assert!(
        stdout.to_lowercase().contains("1 at risk"),
        "plan should flag the leg:\n{stdout}"
    );

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Travel risk on 2099-01-01"));
}

#[test]
fn offline_service_still_renders_plan() {
    let dir = make_temp_dir("config");
    write_config(&dir, "driving", "offline", 20, "False");
    let input = "shot \"Wide\" 2099-01-01 09:00-10:00 @Pier\n\
                 shot \"Close\" 2099-01-01 10:01 30m @Harbour\n\
                 plan\nexit\n";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SHOT PLAN"));
    assert!(!stdout.to_lowercase().contains("at risk"));
    assert!(!dir.join("logs").exists(), "file logging was disabled");
}
