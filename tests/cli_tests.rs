//! Binary-level tests that need no media tools

use assert_cmd::Command;
use predicates::prelude::*;

fn splicer() -> Command {
    let mut cmd = Command::cargo_bin("splicer").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("SPLICER_CONFIG")
        .env_remove("SPLICER_LOG_LEVEL")
        .arg("--log-level")
        .arg("error");
    cmd
}

#[test]
fn test_plan_prints_keep_ranges() {
    splicer()
        .args(["plan", "--duration", "01:00", "--cut", "00:40-00:45", "--cut", "10-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00.000 - 00:10.000"))
        .stdout(predicate::str::contains("00:20.000 - 00:40.000"))
        .stdout(predicate::str::contains("00:45.000 - 01:00.000"))
        .stdout(predicate::str::contains("Kept: 00:45.000"));
}

#[test]
fn test_plan_json_output() {
    let output = splicer()
        .args(["plan", "--duration", "100", "--cut", "90-120", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["cuts"], 1);
    assert_eq!(plan["keep_ranges"].as_array().unwrap().len(), 1);
    assert_eq!(plan["keep_ranges"][0]["start"], 0.0);
    assert_eq!(plan["keep_ranges"][0]["end"], 90.0);
    assert_eq!(plan["kept_duration"], 90.0);
}

#[test]
fn test_plan_reads_cuts_file() {
    let dir = tempfile::tempdir().unwrap();
    let cuts = dir.path().join("cuts.yaml");
    std::fs::write(&cuts, "cuts:\n  - start: \"0\"\n    end: \"5\"\n    reason: intro\n").unwrap();

    splicer()
        .args(["plan", "--duration", "30", "--cuts-file"])
        .arg(&cuts)
        .assert()
        .success()
        .stdout(predicate::str::contains("00:05.000 - 00:30.000"));
}

#[test]
fn test_reversed_cut_fails_with_kind() {
    splicer()
        .args(["plan", "--duration", "60", "--cut", "30-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[invalid_cut_range]"));
}

#[test]
fn test_bad_timestamp_fails_with_kind() {
    splicer()
        .args(["plan", "--duration", "60", "--cut", "1:75x-2:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[parse_error]"));
}

#[test]
fn test_cutting_everything_fails() {
    splicer()
        .args(["plan", "--duration", "60", "--cut", "0-60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[empty_result_error]"));
}

#[test]
fn test_probe_missing_file_fails() {
    splicer()
        .args(["probe", "--input", "/no/such/file.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[probe_error]"));
}

#[test]
fn test_zero_timeout_is_a_config_error() {
    splicer()
        .env("SPLICER_TOOL_TIMEOUT_SECS", "0")
        .args(["plan", "--duration", "60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[config_error]"));
}
