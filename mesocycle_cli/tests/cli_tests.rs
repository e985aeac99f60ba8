//! Integration tests for the mesocycle binary.
//!
//! These tests verify end-to-end behavior including:
//! - Defaults lookup and program generation output
//! - Workbook (CSV) and document (JSON) exports
//! - Week selection validation
//! - Config file fallbacks

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a scratch directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with an isolated config home
fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mesocycle"));
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mesocycle training program generator"));
}

#[test]
fn test_defaults_for_advanced_mixed() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["defaults", "--level", "advanced", "--focus", "mixed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mesocycle length: 8 weeks"))
        .stdout(predicate::str::contains("Sessions / week:  4"))
        .stdout(predicate::str::contains("50% endurance"));
}

#[test]
fn test_defaults_reject_unknown_focus() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["defaults", "--focus", "hybrid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown Focus"));
}

#[test]
fn test_generate_summary() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["generate", "--focus", "strength", "--weeks", "6", "--sessions", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6-WEEK STRENGTH MESOCYCLE"))
        .stdout(predicate::str::contains("Week 1 (build)"))
        .stdout(predicate::str::contains("Week 6 (taper)"))
        .stdout(predicate::str::contains("Balanced Strength A"));
}

#[test]
fn test_generate_json_clamps_inputs() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args([
            "generate", "--focus", "mixed", "--weeks", "13", "--sessions", "1", "--bias", "200",
            "--json",
        ])
        .output()
        .expect("Failed to run generate");
    assert!(output.status.success());

    let program: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(program["inputs"]["mesocycle_weeks"], 12);
    assert_eq!(program["inputs"]["sessions_per_week"], 2);
    assert_eq!(program["inputs"]["mixed_bias"], 100);
    assert_eq!(program["weeks"].as_array().map(|w| w.len()), Some(12));
    assert_eq!(program["weeks"][11]["objective"], "taper");
}

#[test]
fn test_generate_is_deterministic() {
    let temp_dir = setup_test_dir();
    let args = ["generate", "--focus", "endurance", "--weeks", "9", "--json"];

    let first = cli(&temp_dir).args(args).output().unwrap();
    let second = cli(&temp_dir).args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_workbook_export_writes_sheets() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path().join("out");

    cli(&temp_dir)
        .args(["export", "--format", "workbook", "--focus", "mixed", "--weeks", "8"])
        .args(["--now", "2024-03-01T09:30:00Z"])
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 8 weeks as 5 sheets"));

    let sheet_dir = out_dir.join("mesocycle-mixed-balanced-2024-03-01");
    for sheet in ["overview", "calendar", "workouts", "progression", "sessions-tracker"] {
        assert!(sheet_dir.join(format!("{}.csv", sheet)).exists(), "missing {}", sheet);
    }

    let overview = fs::read_to_string(sheet_dir.join("overview.csv")).unwrap();
    assert!(overview.contains("Exported At,2024-03-01T09:30:00.000Z"));

    let tracker = fs::read_to_string(sheet_dir.join("sessions-tracker.csv")).unwrap();
    assert!(tracker.starts_with("Exercise,Prescription,Actual Reps,Weight,Notes"));
}

#[test]
fn test_calendar_only_workbook_skips_detail_sheets() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path().join("out");

    cli(&temp_dir)
        .args(["export", "--format", "workbook", "--detail", "calendar-only"])
        .args(["--now", "2024-03-01T00:00:00Z"])
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("as 3 sheets"));

    let sheet_dir = out_dir.join("mesocycle-strength-balanced-2024-03-01");
    assert!(sheet_dir.join("calendar.csv").exists());
    assert!(!sheet_dir.join("workouts.csv").exists());
}

#[test]
fn test_document_export_selected_weeks() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path().join("docs");

    cli(&temp_dir)
        .args(["export", "--format", "document", "--focus", "endurance", "--select", "2,1,2"])
        .args(["--pdf-mode", "detailed", "--paper", "a4"])
        .args(["--now", "2024-03-01T00:00:00Z"])
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 weeks"));

    let path = out_dir.join("mesocycle-endurance-balanced-2024-03-01.json");
    let render: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(render["orientation"], "portrait");
    assert_eq!(render["page_size"]["width"], 595);
    assert_eq!(render["pages"][0]["title"], "Mesocycle Program");
    assert_eq!(render["pages"][1]["content"]["kind"], "week_overview");
    assert_eq!(render["pages"][1]["content"]["week"], 1);
    assert_eq!(render["pages"][2]["content"]["week"], 2);
    assert_eq!(render["pages"][3]["content"]["kind"], "session_detail");

    let pages = render["pages"].as_array().unwrap();
    assert_eq!(render["page_count"], pages.len() - 1);
}

#[test]
fn test_export_logs_resolved_request_at_debug() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path().join("out");

    cli(&temp_dir)
        .env("RUST_LOG", "debug")
        .args(["export", "--format", "document", "--focus", "mixed", "--bias", "70"])
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Resolved export request"))
        .stderr(predicate::str::contains("mixed_bias: Some(70.0)"));
}

#[test]
fn test_export_is_quiet_without_rust_log() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path().join("out");

    cli(&temp_dir)
        .args(["export", "--format", "document"])
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Resolved export request").not());
}

#[test]
fn test_export_rejects_empty_selection() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path().join("out");

    cli(&temp_dir)
        .args(["export", "--format", "workbook", "--weeks", "6", "--select", "9,10"])
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Select at least one week"));

    assert!(!out_dir.exists());
}

#[test]
fn test_config_file_supplies_plan_defaults() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"
[planner]
focus = "endurance"
level = "advanced"
"#,
    )
    .unwrap();

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("10-WEEK ENDURANCE MESOCYCLE"));
}

#[test]
fn test_invalid_config_is_reported() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[planner]\nweeks = 40\n").unwrap();

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("planner.weeks"));
}
