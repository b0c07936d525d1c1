use assert_cmd::Command;
use std::fs;

const PAYLOAD: &str = include_str!("../../readme_emitter_core/assets/README.md");

fn emitter_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_readme-emitter"));
    for key in [
        "README_EMITTER_TARGET",
        "README_EMITTER_WRITE_MODE",
        "README_EMITTER_CREATE_PARENTS",
        "README_EMITTER_LOG_LEVEL",
        "README_EMITTER_LOG_DIR",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("README_EMITTER_LOG_LEVEL", "error");
    cmd
}

#[test]
fn writes_readme_and_prints_single_success_line() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let target = out.join("README.md");

    let output = emitter_cmd()
        .env("README_EMITTER_TARGET", &target)
        .output()
        .expect("run readme-emitter");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout, "README.md created successfully\n");
    assert_eq!(fs::read_to_string(&target).unwrap(), PAYLOAD);
}

#[test]
fn rerun_overwrites_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("README.md");
    fs::write(&target, "stale notes\n").unwrap();

    for _ in 0..2 {
        let output = emitter_cmd()
            .env("README_EMITTER_TARGET", &target)
            .env("README_EMITTER_WRITE_MODE", "atomic")
            .output()
            .expect("run readme-emitter");
        assert!(output.status.success());
    }

    assert_eq!(fs::read_to_string(&target).unwrap(), PAYLOAD);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn missing_parent_exits_non_zero_without_creating_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("no").join("such").join("dir").join("README.md");

    let output = emitter_cmd()
        .env("README_EMITTER_TARGET", &target)
        .output()
        .expect("run readme-emitter");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("error: parent directory"));
    assert!(!target.exists());
    assert!(!dir.path().join("no").exists());
}

#[test]
fn create_parents_flag_allows_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("docs").join("README.md");

    let output = emitter_cmd()
        .env("README_EMITTER_TARGET", &target)
        .env("README_EMITTER_CREATE_PARENTS", "true")
        .output()
        .expect("run readme-emitter");

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&target).unwrap(), PAYLOAD);
}

#[test]
fn invalid_configuration_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("README.md");

    let output = emitter_cmd()
        .env("README_EMITTER_TARGET", &target)
        .env("README_EMITTER_WRITE_MODE", "append")
        .output()
        .expect("run readme-emitter");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("README_EMITTER_WRITE_MODE"));
    assert!(!target.exists());
}

#[test]
fn file_logging_writes_emit_events() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("README.md");
    let log_dir = dir.path().join("logs");

    let output = emitter_cmd()
        .env("README_EMITTER_TARGET", &target)
        .env("README_EMITTER_LOG_LEVEL", "info")
        .env("README_EMITTER_LOG_DIR", &log_dir)
        .output()
        .expect("run readme-emitter");

    assert!(output.status.success());
    let logs: String = fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect();
    assert!(logs.contains("event=emit module=emitter status=ok"));
}

#[test]
fn invalid_log_level_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("README.md");

    let output = emitter_cmd()
        .env("README_EMITTER_TARGET", &target)
        .env("README_EMITTER_LOG_LEVEL", "verbose")
        .output()
        .expect("run readme-emitter");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("error: README_EMITTER_LOG_LEVEL"));
    assert!(!target.exists());
}

#[test]
fn relative_log_dir_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("README.md");

    let output = emitter_cmd()
        .env("README_EMITTER_TARGET", &target)
        .env("README_EMITTER_LOG_DIR", "logs/dev")
        .output()
        .expect("run readme-emitter");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("README_EMITTER_LOG_DIR"));
    assert!(!target.exists());
}

#[test]
fn relative_target_exits_non_zero() {
    let output = emitter_cmd()
        .env("README_EMITTER_TARGET", "relative/README.md")
        .output()
        .expect("run readme-emitter");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("error: target path must be absolute"));
}

#[test]
fn parent_that_is_a_file_is_not_reported_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain");
    fs::write(&plain, "x").unwrap();

    let output = emitter_cmd()
        .env("README_EMITTER_TARGET", plain.join("README.md"))
        .output()
        .expect("run readme-emitter");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("error: failed to open"));
    assert!(!stderr.contains("does not exist"));
}
