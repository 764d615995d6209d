//! Integration tests for the daylog binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn daylog(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("daylog"));
    cmd.current_dir(dir.path()).env_remove("DAYLOG_DIR");
    cmd
}

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".daylog.yml"), config).unwrap();
    temp
}

fn log_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "log"))
        .collect()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    daylog(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day-rotating log files"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    daylog(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn duration_prints_chronometer_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    daylog(&temp)
        .args(["duration", "65.25"])
        .assert()
        .success()
        .stdout("01:05.25\n");
    daylog(&temp)
        .args(["duration", "--wrap", "90061"])
        .assert()
        .success()
        .stdout("01:01:01.00 (+1 day)\n");
    Ok(())
}

#[test]
fn log_writes_to_dir_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    daylog(&temp)
        .args(["log", "--dir", "out", "hello", "world"])
        .assert()
        .success()
        .stdout("");

    let files = log_files(&temp.path().join("out"));
    assert_eq!(files.len(), 1);
    let content = fs::read_to_string(&files[0])?;
    assert!(content.starts_with('['));
    assert!(content.ends_with("] hello world\n"));
    Ok(())
}

#[test]
fn log_appends_across_runs() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    for word in ["one", "two"] {
        daylog(&temp)
            .env("DAYLOG_DIR", "env-logs")
            .args(["log", word])
            .assert()
            .success();
    }

    let files = log_files(&temp.path().join("env-logs"));
    let lines: usize = files
        .iter()
        .map(|f| fs::read_to_string(f).unwrap().lines().count())
        .sum();
    assert_eq!(lines, 2);
    Ok(())
}

#[test]
fn log_requires_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    daylog(&temp).arg("log").assert().failure();
    Ok(())
}

#[test]
fn log_uses_config_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("directory: from-config\n");
    daylog(&temp).args(["log", "configured"]).assert().success();
    assert_eq!(log_files(&temp.path().join("from-config")).len(), 1);
    Ok(())
}

#[test]
fn path_creates_todays_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = daylog(&temp).args(["path", "--dir", "p"]).output()?;
    assert!(output.status.success());

    let printed = String::from_utf8(output.stdout)?;
    let path = temp.path().join(printed.trim_end());
    assert!(path.is_file());
    assert!(printed.starts_with("p/"));
    Ok(())
}

#[test]
fn print_writes_record_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    daylog(&temp)
        .args(["print", "hi", "there"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[.+\] hi there\n$")?);
    assert!(!temp.path().join("Log").exists());
    Ok(())
}

#[test]
fn stamp_honors_config_and_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
timestamp:
  order: dd_mm_yyyy
  flags: [hide_weekday]
  delimiter: "."
"#,
    );
    daylog(&temp)
        .args(["stamp", "--date-only"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{2}\.\d{2}\.\d{4}\n$")?);
    daylog(&temp)
        .args(["stamp", "--time-only", "--flag", "hide_seconds"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{2}:\d{2}\n$")?);
    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("timestamp:\n  delimiter: \"ab\"\n");
    daylog(&temp)
        .args(["duration", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn explicit_config_path_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    daylog(&temp)
        .args(["--config", "missing.yml", "duration", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}
