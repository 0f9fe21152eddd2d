use crate::common::{
    make_temp_dir, run_with_args, run_with_input, run_without_input, write_valid_config,
};

#[test]
fn main_exits_successfully_with_valid_config() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
}

#[test]
fn main_exits_on_end_of_input() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "");
    assert!(output.status.success());
}

#[test]
fn main_fails_when_config_missing() {
    let dir = make_temp_dir("core");
    let output = run_without_input(&dir);
    assert!(
        !output.status.success(),
        "expected failure when config is missing"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Configuration file"),
        "stderr did not mention missing config: {}",
        stderr
    );
}

#[test]
fn main_fails_when_config_is_malformed() {
    let dir = make_temp_dir("core");
    let cfg = r#"{
      "travel_mode": { "value": "hovercraft", "description": "bad" }
    }"#;
    std::fs::write(dir.join("config.json"), cfg).unwrap();

    let output = run_without_input(&dir);
    assert!(
        !output.status.success(),
        "expected failure on malformed config"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.to_lowercase().contains("invalid"),
        "stderr did not mention parse error: {}",
        stderr
    );
}

#[test]
fn init_flag_writes_default_config() {
    let dir = make_temp_dir("core");
    let output = run_with_args(&dir, &["--init"], "exit\n");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = std::fs::read_to_string(dir.join("config.json")).expect("config should exist");
    assert!(text.contains("travel_mode"));
    assert!(text.contains("setup_allowance"));
}

#[test]
fn path_flags_redirect_config_and_shoots() {
    let dir = make_temp_dir("core");
    std::fs::create_dir_all(dir.join("conf")).unwrap();
    write_valid_config(&dir.join("conf"));

    let output = run_with_args(
        &dir,
        &["--config", "conf/config.json", "--shoots", "out"],
        "shot \"Wide\" 2099-01-01 09:00-10:00\nsave \"day1\"\nexit\n",
    );
    assert!(output.status.success());
    assert!(dir.join("out").join("day1.json").exists());
}

#[test]
fn unknown_cli_argument_fails() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_args(&dir, &["--frobnicate"], "exit\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --frobnicate"));
}
