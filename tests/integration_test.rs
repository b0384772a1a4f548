//! Integration tests for the NACHA payroll CLI.
//!
//! These tests run the actual binary against fixture files and check the
//! produced NACHA records.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_builder(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("nacha-payroll").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn default_args() -> Vec<String> {
    vec![
        test_data_path("config.json"),
        test_data_path("entries.csv"),
    ]
}

fn record<'a>(output: &'a str, record_type: char) -> &'a str {
    output
        .lines()
        .find(|l| l.starts_with(record_type) && !l.chars().all(|c| c == '9'))
        .unwrap()
}

#[test]
fn test_sample_file_structure() {
    let args = default_args();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run_builder(&args);

    assert!(output.ends_with('\n'));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 10);
    for line in &lines {
        assert_eq!(line.len(), 94, "bad width: {:?}", line);
    }

    let details: Vec<&&str> = lines.iter().filter(|l| l.starts_with('6')).collect();
    assert_eq!(details.len(), 3);
    assert_eq!(&details[0][1..3], "22");
    assert_eq!(&details[1][1..3], "32");
    assert_eq!(&details[2][1..3], "22");
    assert_eq!(&details[2][79..94], "111000020000003");
}

#[test]
fn test_sample_control_totals() {
    let args = default_args();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run_builder(&args);

    let batch = record(&output, '8');
    assert_eq!(&batch[4..10], "000003");
    assert_eq!(&batch[10..20], "0015300027");
    assert_eq!(&batch[32..44], "000000241735");

    let file = output.lines().nth(6).unwrap();
    assert!(file.starts_with("9000001000001"));
    assert_eq!(&file[13..21], "00000003");
    assert_eq!(&file[21..31], &batch[10..20]);
    assert_eq!(&file[43..55], &batch[32..44]);
}

#[test]
fn test_default_mode_is_test() {
    let args = default_args();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run_builder(&args);
    assert_eq!(&record(&output, '1')[33..34], "T");
}

#[test]
fn test_prod_mode_and_run_options() {
    let mut args = default_args();
    args.extend(
        ["--mode", "prod", "--batch", "12", "--end-date", "20240331"]
            .iter()
            .map(|s| s.to_string()),
    );
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run_builder(&args);

    assert_eq!(&record(&output, '1')[33..34], "A");
    let batch_header = record(&output, '5');
    assert_eq!(&batch_header[69..75], "240331");
    assert_eq!(&batch_header[87..94], "0000012");
    assert_eq!(&record(&output, '8')[87..94], "0000012");
}

#[test]
fn test_output_file_option() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("payroll.ach");
    let out_str = out_path.to_str().unwrap();

    let mut args = default_args();
    args.push("--output".to_string());
    args.push(out_str.to_string());
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let stdout = run_builder(&args);

    assert!(stdout.is_empty());
    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written.lines().count(), 10);
}

#[test]
fn test_missing_config_field_error() {
    let mut cmd = Command::cargo_bin("nacha-payroll").unwrap();
    cmd.arg(test_data_path("config_missing_company.json"))
        .arg(test_data_path("entries.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "missing configuration field `company_name`",
        ));
}

#[test]
fn test_invalid_amount_error() {
    let mut cmd = Command::cargo_bin("nacha-payroll").unwrap();
    cmd.arg(test_data_path("config.json"))
        .arg(test_data_path("entries_bad_amount.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid amount \"N/A\" in entry 1"));
}

#[test]
fn test_invalid_mode_error() {
    let mut cmd = Command::cargo_bin("nacha-payroll").unwrap();
    cmd.arg(test_data_path("config.json"))
        .arg(test_data_path("entries.csv"))
        .args(["--mode", "live"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mode"));
}

#[test]
fn test_zero_batch_number_error() {
    let mut cmd = Command::cargo_bin("nacha-payroll").unwrap();
    cmd.arg(test_data_path("config.json"))
        .arg(test_data_path("entries.csv"))
        .args(["--batch", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid argument: --batch 0"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("nacha-payroll").unwrap();
    cmd.arg("nonexistent.json")
        .arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("nacha-payroll").unwrap();
    cmd.arg(test_data_path("config.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}
