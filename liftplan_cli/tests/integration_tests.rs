//! Integration tests for the liftplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Deterministic generation within a calendar week
//! - Archetype selection and session naming
//! - JSON output shape
//! - Alternative-exercise lookup and catalog validation
//! - Config file and custom catalog loading

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("liftplan"))
}

/// Helper for a binary invocation pinned to an empty config in `temp_dir`,
/// so results never depend on the host machine's real config file
fn cli_isolated(temp_dir: &TempDir) -> Command {
    let config_path = temp_dir.path().join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "").expect("Failed to write config");
    }
    let mut cmd = cli();
    cmd.arg("--config").arg(config_path);
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deterministic weekly training plan generator",
        ));
}

#[test]
fn test_generate_is_deterministic_for_a_fixed_week() {
    let temp_dir = setup_test_dir();
    let run = || {
        cli_isolated(&temp_dir)
            .arg("generate")
            .arg("--date")
            .arg("2025-06-02")
            .arg("--experience")
            .arg("intermediate")
            .arg("--focus")
            .arg("hypertrophy")
            .arg("--days")
            .arg("4")
            .arg("--equipment")
            .arg("bodyweight")
            .arg("--equipment")
            .arg("dumbbells")
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn test_different_weeks_reshuffle() {
    let temp_dir = setup_test_dir();
    let run = |date: &str| {
        cli_isolated(&temp_dir)
            .arg("generate")
            .arg("--date")
            .arg(date)
            .arg("--experience")
            .arg("intermediate")
            .arg("--focus")
            .arg("hypertrophy")
            .arg("--days")
            .arg("3")
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    // same week bucket (2025 days 155 and 160 both land in week 22)
    assert_eq!(run("2025-06-05"), run("2025-06-09"));
    // a different week may rotate picks; at minimum the output stays valid JSON
    let other: Value = serde_json::from_slice(&run("2025-06-12")).unwrap();
    assert_eq!(other["sessions"].as_array().unwrap().len(), 3);
}

#[test]
fn test_four_days_is_upper_lower() {
    let temp_dir = setup_test_dir();
    cli_isolated(&temp_dir)
        .arg("generate")
        .arg("--date")
        .arg("2025-06-02")
        .arg("--days")
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("UPPER/LOWER PLAN"))
        .stdout(predicate::str::contains("Upper 1"))
        .stdout(predicate::str::contains("Lower 1"))
        .stdout(predicate::str::contains("Upper 2"))
        .stdout(predicate::str::contains("Lower 2"));
}

#[test]
fn test_six_days_is_push_pull_legs_json() {
    let temp_dir = setup_test_dir();
    let output = cli_isolated(&temp_dir)
        .arg("generate")
        .arg("--date")
        .arg("2025-06-02")
        .arg("--days")
        .arg("6")
        .arg("--experience")
        .arg("intermediate")
        .arg("--equipment")
        .arg("bodyweight")
        .arg("--equipment")
        .arg("barbell")
        .arg("--equipment")
        .arg("dumbbells")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let program: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(program["archetype"], "push_pull_legs");

    let sessions = program["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 6);
    let names: Vec<&str> = sessions
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Push 1", "Pull 1", "Legs 1", "Push 2", "Pull 2", "Legs 2"]
    );
    // day 3 reuses day 0's template
    assert_eq!(sessions[3]["session_type"], sessions[0]["session_type"]);
}

#[test]
fn test_days_out_of_range_are_clamped() {
    let temp_dir = setup_test_dir();
    let output = cli_isolated(&temp_dir)
        .arg("generate")
        .arg("--date")
        .arg("2025-06-02")
        .arg("--days")
        .arg("12")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let program: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(program["sessions"].as_array().unwrap().len(), 7);
}

#[test]
fn test_today_emits_a_single_session() {
    // 2025-06-02 is a Monday: weekday 1 of a 3-session week -> session index 1
    let temp_dir = setup_test_dir();
    let output = cli_isolated(&temp_dir)
        .arg("today")
        .arg("--date")
        .arg("2025-06-02")
        .arg("--days")
        .arg("3")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let session: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(session["name"], "Full Body 2");
    assert!(!session["main"].as_array().unwrap().is_empty());
}

#[test]
fn test_disliked_exercise_never_appears() {
    let temp_dir = setup_test_dir();
    let output = cli_isolated(&temp_dir)
        .arg("generate")
        .arg("--date")
        .arg("2025-06-02")
        .arg("--days")
        .arg("3")
        .arg("--dislike")
        .arg("push_up")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let program: Value = serde_json::from_slice(&output).unwrap();
    for session in program["sessions"].as_array().unwrap() {
        for exercise in session["main"].as_array().unwrap() {
            assert_ne!(exercise["exercise_id"], "push_up");
        }
    }
}

#[test]
fn test_swap_suggests_an_alternative() {
    let temp_dir = setup_test_dir();
    cli_isolated(&temp_dir)
        .arg("swap")
        .arg("--exercise")
        .arg("back_squat")
        .arg("--date")
        .arg("2025-06-02")
        .arg("--equipment")
        .arg("dumbbells")
        .assert()
        .success()
        .stdout(predicate::str::contains("Instead of Barbell Back Squat"));
}

#[test]
fn test_swap_unknown_exercise_fails() {
    let temp_dir = setup_test_dir();
    cli_isolated(&temp_dir)
        .arg("swap")
        .arg("--exercise")
        .arg("no_such_exercise")
        .arg("--date")
        .arg("2025-06-02")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_exercise"));
}

#[test]
fn test_validate_default_catalog() {
    let temp_dir = setup_test_dir();
    cli_isolated(&temp_dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog valid"));
}

#[test]
fn test_validate_rejects_broken_catalog() {
    let temp_dir = setup_test_dir();
    let catalog_path = temp_dir.path().join("catalog.json");
    // one squat, no other patterns, no bookends
    fs::write(
        &catalog_path,
        r#"{
  "exercises": [
    {
      "id": "only_squat",
      "name": "Only Squat",
      "movement_pattern": "squat",
      "muscle_groups": ["quadriceps"],
      "experience_level": "beginner",
      "is_compound": true,
      "category": "normal"
    }
  ],
  "alternatives": { "only_squat": ["missing"] }
}"#,
    )
    .unwrap();

    cli_isolated(&temp_dir)
        .arg("validate")
        .arg("--catalog")
        .arg(&catalog_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("No exercises cover the hinge pattern"))
        .stdout(predicate::str::contains("warm-up"))
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn test_generate_refuses_broken_catalog() {
    let temp_dir = setup_test_dir();
    let catalog_path = temp_dir.path().join("catalog.json");
    fs::write(&catalog_path, r#"{ "exercises": [] }"#).unwrap();

    cli_isolated(&temp_dir)
        .arg("generate")
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("--date")
        .arg("2025-06-02")
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation errors"));
}

#[test]
fn test_missing_catalog_file_fails() {
    let temp_dir = setup_test_dir();
    cli_isolated(&temp_dir)
        .arg("generate")
        .arg("--catalog")
        .arg("/nonexistent/catalog.json")
        .arg("--date")
        .arg("2025-06-02")
        .assert()
        .failure();
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[defaults]
experience = "intermediate"
focus = "strength"
weekly_availability = 4
preferred_duration_minutes = 60

[equipment]
available = ["bodyweight", "barbell"]
"#,
    )
    .unwrap();

    let output = cli()
        .arg("generate")
        .arg("--config")
        .arg(&config_path)
        .arg("--date")
        .arg("2025-06-02")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let program: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(program["archetype"], "upper_lower");
    assert_eq!(program["sessions"].as_array().unwrap().len(), 4);
}

#[test]
fn test_flags_override_config() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[defaults]
weekly_availability = 4
"#,
    )
    .unwrap();

    let output = cli()
        .arg("generate")
        .arg("--config")
        .arg(&config_path)
        .arg("--days")
        .arg("3")
        .arg("--date")
        .arg("2025-06-02")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let program: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(program["archetype"], "full_body");
}

#[test]
fn test_invalid_date_fails() {
    let temp_dir = setup_test_dir();
    cli_isolated(&temp_dir)
        .arg("generate")
        .arg("--date")
        .arg("not-a-date")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_invalid_experience_fails() {
    let temp_dir = setup_test_dir();
    cli_isolated(&temp_dir)
        .arg("generate")
        .arg("--experience")
        .arg("wizard")
        .arg("--date")
        .arg("2025-06-02")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown experience level"));
}
