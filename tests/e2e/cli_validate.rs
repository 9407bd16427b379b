//! `paramcheck validate` end-to-end tests.

#[path = "support.rs"]
mod support;

use std::io;
use support::{fixture, paramcheck, paramcheck_with_env, stderr, stdout};

fn rules_arg() -> String {
    fixture("rules.toml").display().to_string()
}

#[test]
fn valid_values_exit_zero() -> io::Result<()> {
    let rules = rules_arg();
    let output = paramcheck(&[
        "validate", "--rules", &rules, "--set", "max=20", "--set", "sort=ASC", "--set", "query=rust",
    ])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("status: valid\n"));
    assert!(text.contains("limit (integer) = \"20\" via max\n"));
    Ok(())
}

#[test]
fn failing_values_exit_four_and_list_every_failure() -> io::Result<()> {
    let rules = rules_arg();
    let output = paramcheck(&[
        "validate", "--rules", &rules, "--set", "limit=-4.2", "--set", "sort=up",
    ])?;
    assert_eq!(output.status.code(), Some(4));
    let text = stdout(&output);
    assert!(text.contains("failures: 3\n"));
    assert!(text.contains("  FAIL  isInteger: value \"-4.2\" of `limit` is not a non-negative integer\n"));
    assert!(text.contains("  FAIL  inRange: value \"-4.2\" of `limit` is not an integer\n"));
    assert!(text.contains("query (string): not supplied\n"));
    Ok(())
}

#[test]
fn json_report_lists_unknown_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let rules = rules_arg();
    let output = paramcheck(&[
        "validate", "--output", "json", "--rules", &rules, "--set", "limit=5", "--set", "colour=red",
    ])?;
    assert_eq!(output.status.code(), Some(4));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(value["valid"], false);
    assert_eq!(value["parameters"][0]["status"], "evaluated");
    assert_eq!(value["unknownInputs"][0]["name"], "colour");
    assert_eq!(value["unknownInputs"][0]["value"], "red");
    Ok(())
}

#[test]
fn duplicate_supply_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let rules = rules_arg();
    let output = paramcheck(&[
        "validate", "--output", "json", "--rules", &rules, "--set", "limit=5", "--set", "max=6",
    ])?;
    assert_eq!(output.status.code(), Some(4));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(value["parameters"][0]["value"], "5");
    assert_eq!(value["parameters"][0]["duplicates"][0], "max");
    Ok(())
}

#[test]
fn input_file_and_env_rules_are_honoured() -> io::Result<()> {
    let rules = rules_arg();
    let inputs = fixture("inputs.json").display().to_string();
    let output = paramcheck_with_env(
        &["validate", "--input", &inputs],
        &[("PARAMCHECK_RULES", &rules), ("PARAMCHECK_OUTPUT", "ndjson")],
    )?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let last = text.lines().last().unwrap_or_default();
    assert!(last.contains(r#""type":"summary""#));
    assert!(last.contains(r#""valid":true"#));
    assert_eq!(text.lines().count(), 4);
    Ok(())
}

#[test]
fn missing_rules_is_invalid_input() -> io::Result<()> {
    let output = paramcheck(&["validate", "--set", "limit=1"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("PARAMCHECK_RULES"));
    Ok(())
}

#[test]
fn malformed_assignment_is_invalid_input() -> io::Result<()> {
    let rules = rules_arg();
    let output = paramcheck(&["validate", "--rules", &rules, "--set", "limit"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn logs_go_to_stderr_only() -> io::Result<()> {
    let rules = rules_arg();
    let output = paramcheck_with_env(
        &["validate", "--output", "json", "--rules", &rules, "--set", "colour=red"],
        &[("PARAMCHECK_LOG", "warn"), ("PARAMCHECK_LOG_FORMAT", "json")],
    )?;
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("input matches no declared parameter"));
    assert!(!stdout(&output).contains("input matches no declared parameter"));
    Ok(())
}

#[test]
fn invalid_log_format_fails_fast() -> io::Result<()> {
    let rules = rules_arg();
    let output = paramcheck_with_env(
        &["validate", "--rules", &rules],
        &[("PARAMCHECK_LOG_FORMAT", "xml")],
    )?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
