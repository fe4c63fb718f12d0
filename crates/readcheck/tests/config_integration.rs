//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` and `evaluate --json` to assert actual config values, not
//! just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run the binary from `dir` with `args` and parse the JSON output.
fn run_json(dir: &std::path::Path, args: &[&str]) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap()])
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

fn info_json(dir: &std::path::Path) -> Value {
    run_json(dir, &["info"])
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
    assert_eq!(json["config"]["thresholds"]["acceptance"], 0.6);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readcheck.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".readcheck.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("readcheck.toml"), "min_score = 75\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["min_score"], 75);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readcheck.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("readcheck.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readcheck.yaml"),
        "thresholds:\n  clean: 0.8\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["thresholds"]["clean"], 0.8);
    assert_eq!(json["config"]["thresholds"]["acceptance"], 0.6);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readcheck.json"),
        r#"{"max_syllables_per_second": 4.0}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["max_syllables_per_second"], 4.0);
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".readcheck.toml"), r#"log_level = "error""#).unwrap();
    fs::write(sub_dir.join(".readcheck.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "warn", "closer config should win");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readcheck.toml"), "min_score = 50\n").unwrap();
    let explicit = tmp.path().join("custom.toml");
    fs::write(&explicit, "min_score = 90\n").unwrap();

    let json = run_json(
        tmp.path(),
        &["--config", explicit.to_str().unwrap(), "info"],
    );
    assert_eq!(json["config"]["min_score"], 90);
}

#[test]
fn env_var_overrides_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readcheck.toml"), "min_score = 50\n").unwrap();

    let output = cmd()
        .env("READCHECK_MIN_SCORE", "95")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_score"], 95);
}

// =============================================================================
// Config Affects Evaluation
// =============================================================================

#[test]
fn configured_clean_threshold_changes_scores() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readcheck.toml"),
        "[thresholds]\nclean = 0.7\n",
    )
    .unwrap();

    let json = run_json(
        tmp.path(),
        &["evaluate", "--text", "We can win", "we can wun"],
    );
    assert_eq!(json["score"]["overall"], 100);
}

#[test]
fn configured_min_score_fails_evaluate() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readcheck.toml"), "min_score = 80\n").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "evaluate",
            "--text",
            "Stop and help",
            "and help",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the minimum of 80%"));
}

#[test]
fn invalid_thresholds_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readcheck.toml"),
        "[thresholds]\nacceptance = 0.95\n",
    )
    .unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "evaluate",
            "--text",
            "cat",
            "cat",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid thresholds"));
}

#[test]
fn configured_phrase_set_is_evaluable() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readcheck.yaml"),
        r#"phrase_sets:
  - id: set-3
    focus: Blends
    phrases:
      - id: p3-1
        text: The frog jumps
        sight_words: [the]
"#,
    )
    .unwrap();

    let info = info_json(tmp.path());
    assert_eq!(info["config"]["phrase_sets"][2], "set-3");

    let json = run_json(
        tmp.path(),
        &["evaluate", "--phrase", "p3-1", "the frog jumps"],
    );
    assert_eq!(json["score"]["overall"], 100);
    assert_eq!(json["details"]["sightWordAccuracy"]["the"], true);
}

#[test]
fn relative_dictionary_path_resolves_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("dict")).unwrap();
    fs::write(
        tmp.path().join("dict").join("cmudict.txt"),
        "THREE  TH R IY1\nFREE  F R IY1\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join(".readcheck.toml"),
        r#"phoneme_dictionary = "dict/cmudict.txt""#,
    )
    .unwrap();

    let json = run_json(
        tmp.path(),
        &["evaluate", "--text", "three cats", "free cats"],
    );
    assert_eq!(json["score"]["overall"], 100);
}

#[test]
fn dictionary_path_resolves_from_the_file_that_set_it() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("lessons");
    fs::create_dir_all(tmp.path().join("dict")).unwrap();
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(
        tmp.path().join("dict").join("cmudict.txt"),
        "THREE  TH R IY1\nFREE  F R IY1\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join(".readcheck.toml"),
        r#"phoneme_dictionary = "dict/cmudict.txt""#,
    )
    .unwrap();
    fs::write(sub_dir.join(".readcheck.toml"), "min_score = 10\n").unwrap();

    let info = info_json(&sub_dir);
    let reported = info["config"]["phoneme_dictionary"].as_str().unwrap();
    assert!(
        !reported.contains("lessons"),
        "dictionary should resolve next to the file that set it: {reported}"
    );

    let json = run_json(&sub_dir, &["evaluate", "--text", "three cats", "free cats"]);
    assert_eq!(json["score"]["overall"], 100);
}

#[test]
fn log_dir_writes_jsonl() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");

    cmd()
        .env("READCHECK_LOG_DIR", logs.to_str().unwrap())
        .args(["-C", tmp.path().to_str().unwrap(), "-v", "info"])
        .assert()
        .success();

    let entries: Vec<_> = fs::read_dir(&logs).unwrap().collect();
    assert!(!entries.is_empty(), "expected a log file in {}", logs.display());
}
