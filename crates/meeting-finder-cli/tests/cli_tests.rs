//! Integration tests for the `meeting-finder` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the find and check
//! subcommands through the actual binary, including stdin/stdout piping, file
//! I/O, output formats, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture must exist")
}

fn run_find_json(args: &[&str]) -> serde_json::Value {
    let output = Command::cargo_bin("meeting-finder")
        .unwrap()
        .arg("find")
        .args(args)
        .output()
        .expect("find should run");
    assert!(output.status.success(), "find should succeed");
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// find subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn find_stdin_to_stdout() {
    Command::cargo_bin("meeting-finder")
        .unwrap()
        .arg("find")
        .write_stdin(fixture("day.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tier\": \"everyone\""))
        .stdout(predicate::str::contains("\"start\": \"09:30\""));
}

#[test]
fn find_honours_optional_attendees() {
    let value = run_find_json(&["-i", &fixture_path("day.json")]);

    assert_eq!(value["tier"], "everyone");
    let slots = value["slots"].as_array().expect("slots array");
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["start"], "00:00");
    assert_eq!(slots[0]["end"], "08:00");
    assert_eq!(slots[0]["duration_minutes"], 480);
    assert_eq!(slots[1]["start"], "09:30");
    assert_eq!(slots[1]["end"], "24:00");
    assert_eq!(slots[1]["duration_minutes"], 870);
}

#[test]
fn find_falls_back_to_mandatory_attendees() {
    let value = run_find_json(&["-i", &fixture_path("optional_busy.json")]);

    assert_eq!(value["tier"], "mandatory_only");
    let slots = value["slots"].as_array().expect("slots array");
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["end"], "08:00");
    assert_eq!(slots[1]["start"], "08:30");
}

#[test]
fn find_first_reports_single_slot() {
    let value = run_find_json(&["-i", &fixture_path("day.json"), "--first"]);

    let slots = value["slots"].as_array().expect("slots array");
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0]["start"], "00:00");
}

#[test]
fn find_text_format() {
    Command::cargo_bin("meeting-finder")
        .unwrap()
        .args(["find", "-i", &fixture_path("optional_busy.json"), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Optional attendees could not be accommodated",
        ))
        .stdout(predicate::str::contains("[00:00, 08:00)  480 min"))
        .stdout(predicate::str::contains("[08:30, 24:00)  930 min"));
}

#[test]
fn find_text_format_with_no_slots() {
    let input = r#"{"request": {"duration": 2000, "attendees": ["alice"]}}"#;

    Command::cargo_bin("meeting-finder")
        .unwrap()
        .args(["find", "--format", "text"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No available slots"));
}

#[test]
fn find_file_to_file() {
    let output_path = std::env::temp_dir().join("meeting-finder-test-find-output.json");
    let output_str = output_path.to_str().expect("temp path is UTF-8");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("meeting-finder")
        .unwrap()
        .args(["find", "-i", &fixture_path("day.json"), "-o", output_str])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(value["tier"], "everyone");

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn find_invalid_range_fails() {
    Command::cargo_bin("meeting-finder")
        .unwrap()
        .args(["find", "-i", &fixture_path("invalid_range.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input document"))
        .stderr(predicate::str::contains("Invalid time range"));
}

#[test]
fn find_zero_duration_fails() {
    Command::cargo_bin("meeting-finder")
        .unwrap()
        .arg("find")
        .write_stdin(r#"{"request": {"duration": 0, "attendees": ["alice"]}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid meeting duration"));
}

#[test]
fn find_invalid_json_fails() {
    Command::cargo_bin("meeting-finder")
        .unwrap()
        .arg("find")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input document"));
}

#[test]
fn find_missing_file_fails() {
    Command::cargo_bin("meeting-finder")
        .unwrap()
        .args(["find", "-i", "/nonexistent/path/day.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_summarizes_document() {
    Command::cargo_bin("meeting-finder")
        .unwrap()
        .args(["check", "-i", &fixture_path("day.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Events:              4"))
        .stdout(predicate::str::contains("Duration:            30 min"))
        .stdout(predicate::str::contains("Mandatory attendees: 2"))
        .stdout(predicate::str::contains("Optional attendees:  1"));
}

#[test]
fn check_rejects_invalid_document() {
    Command::cargo_bin("meeting-finder")
        .unwrap()
        .arg("check")
        .write_stdin(fixture("invalid_range.json"))
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn verbose_logs_to_stderr_only() {
    let output = Command::cargo_bin("meeting-finder")
        .unwrap()
        .args(["-v", "find", "-i", &fixture_path("day.json")])
        .output()
        .expect("find should run");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("meeting search finished"));
    let _: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout stays valid JSON");
}

#[test]
fn no_subcommand_shows_usage() {
    Command::cargo_bin("meeting-finder")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
