//! CLI tests for the `tm` binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn tm() -> Command {
    let mut cmd = Command::cargo_bin("tm").expect("binary should build");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_help() {
    tm().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("topology"))
        .stdout(predicate::str::contains("show-config"));
}

#[test]
fn test_topology_default() {
    let file = config_file("reader:\n  ticks: 1\n");
    tm().arg("--config")
        .arg(file.path())
        .arg("topology")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task10 (10ms)"))
        .stdout(predicate::str::contains("coord -> Task20 as z"))
        .stdout(predicate::str::contains("angle -> Task20 as yaw"));
}

#[test]
fn test_run_prints_snapshots_and_stats() {
    let file = config_file("reader:\n  ticks: 3\n  interval-ms: 20\n");
    tm().arg("--config")
        .arg(file.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("x: "))
        .stdout(predicate::str::contains("yaw: "))
        .stdout(predicate::str::contains("Task stats:"));
}

#[test]
fn test_run_json() {
    let file = config_file("reader:\n  ticks: 2\n  interval-ms: 10\n");
    let output = tm()
        .arg("--config")
        .arg(file.path())
        .args(["run", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["tick"], 0);
    assert!(first["snapshot"]["roll"].is_number());

    // Final line carries per-task stats
    let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
    for name in ["Task10", "Task20", "Task40"] {
        let stats = &last["stats"][name];
        assert!(stats["iterations"].as_u64().unwrap() > 0, "{} has no iterations", name);
        assert!(stats["missing_queue"].is_u64());
    }
}

#[test]
fn test_run_text_stats_include_missing_queue() {
    let file = config_file("reader:\n  ticks: 1\n  interval-ms: 10\n");
    tm().arg("--config")
        .arg(file.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("missing_queue=0"));
}

#[test]
fn test_default_level_logs_info() {
    let file = config_file("reader:\n  ticks: 1\n  interval-ms: 10\n");
    tm().arg("--config")
        .arg(file.path())
        .arg("topology")
        .assert()
        .success()
        .stderr(predicate::str::contains("Logging initialized"));
}

#[test]
fn test_rust_log_replaces_default_level() {
    let file = config_file("reader:\n  ticks: 1\n  interval-ms: 10\n");
    tm().env("RUST_LOG", "warn")
        .arg("--config")
        .arg(file.path())
        .arg("topology")
        .assert()
        .success()
        .stderr(predicate::str::contains("Logging initialized").not());
}

#[test]
fn test_run_rejects_invalid_config() {
    let file = config_file("tasks:\n  - name: Fast\n    period-ms: 0\n");
    tm().arg("--config")
        .arg(file.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_show_config_roundtrips() {
    let file = config_file("reader:\n  ticks: 7\n");
    tm().arg("--config")
        .arg(file.path())
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("ticks: 7"))
        .stdout(predicate::str::contains("period-ms: 40"));
}
