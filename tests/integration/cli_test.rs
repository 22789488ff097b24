//! Tests for the wego binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixture_path;

/// A `wego` command isolated from the user's config file.
fn wego(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wego").unwrap();
    cmd.env("WEGORC", config_dir.path().join("config.toml"))
        .env_remove("WEGO_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn report_prints_location_and_tables() {
    let dir = TempDir::new().unwrap();
    wego(&dir)
        .args(["report", "--color", "never"])
        .arg(fixture_path("forecast.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Weather for City: New York\n\n"))
        .stdout(predicate::str::contains("Fri 16. Oct"))
        .stdout(predicate::str::contains("Sun 18. Oct"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn report_days_flag_limits_tables() {
    let dir = TempDir::new().unwrap();
    wego(&dir)
        .args(["report", "--color", "never", "--days", "1"])
        .arg(fixture_path("forecast.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Fri 16. Oct"))
        .stdout(predicate::str::contains("Sat 17. Oct").not());
}

#[test]
fn report_color_always_emits_escapes() {
    let dir = TempDir::new().unwrap();
    wego(&dir)
        .args(["report", "--color", "always"])
        .arg(fixture_path("forecast.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;5;"));
}

#[test]
fn report_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let doc = std::fs::read_to_string(fixture_path("current_only.json")).unwrap();
    wego(&dir)
        .args(["report", "--color", "never", "--days", "0", "-"])
        .write_stdin(doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Partly cloudy"));
}

#[test]
fn report_without_current_conditions_fails() {
    let dir = TempDir::new().unwrap();
    wego(&dir)
        .args(["report"])
        .arg(fixture_path("no_current.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No weather data available."));
}

#[test]
fn report_without_days_fails_when_days_requested() {
    let dir = TempDir::new().unwrap();
    wego(&dir)
        .args(["report", "--days", "2"])
        .arg(fixture_path("current_only.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No detailed weather forecast available.",
        ));
}

#[test]
fn report_missing_file_names_path() {
    let dir = TempDir::new().unwrap();
    wego(&dir)
        .args(["report", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[display]\nimperial = true\ncolor = \"never\"\n\n[forecast]\ndays = 0\n",
    )
    .unwrap();
    wego(&dir)
        .arg("report")
        .arg(fixture_path("forecast.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("°F"))
        .stdout(predicate::str::contains("Fri 16. Oct").not());
}

#[test]
fn metric_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[display]\nimperial = true\n",
    )
    .unwrap();
    wego(&dir)
        .args(["report", "--metric", "--color", "never", "--days", "0"])
        .arg(fixture_path("forecast.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("°C"));
}

#[test]
fn config_path_honors_env() {
    let dir = TempDir::new().unwrap();
    wego(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    wego(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join("config.toml").exists());

    wego(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn completions_are_generated() {
    let dir = TempDir::new().unwrap();
    wego(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wego"));
}
