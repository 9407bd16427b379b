//! CLI smoke tests: version, schema, and single-criterion checks.

#[path = "support.rs"]
mod support;

use std::io;
use support::{paramcheck, stdout};

#[test]
fn version_is_printed() -> io::Result<()> {
    let output = paramcheck(&["--version"])?;
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("paramcheck "));
    Ok(())
}

#[test]
fn schema_is_deterministic_json() -> Result<(), Box<dyn std::error::Error>> {
    let first = paramcheck(&["rules", "schema"])?;
    let second = paramcheck(&["rules", "schema"])?;
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(stdout(&first), stdout(&second));

    let value: serde_json::Value = serde_json::from_str(&stdout(&first))?;
    assert!(value.get("properties").and_then(|properties| properties.get("parameters")).is_some());
    Ok(())
}

#[test]
fn check_reports_pass_and_fail_through_exit_codes() -> io::Result<()> {
    let pass = paramcheck(&["check", "--criterion", r#"{"kind":"inRange","min":0,"max":9}"#, "--type", "integer", "7"])?;
    assert_eq!(pass.status.code(), Some(0));
    assert_eq!(stdout(&pass), "valid: inRange\n");

    let fail = paramcheck(&["check", "--criterion", r#"{"kind":"inRange","min":0,"max":9}"#, "--type", "integer", "42"])?;
    assert_eq!(fail.status.code(), Some(4));
    assert_eq!(
        stdout(&fail),
        "invalid: inRange: value 42 of `value` must be between 0 and 9\n"
    );
    Ok(())
}

#[test]
fn check_json_output_carries_the_message() -> Result<(), Box<dyn std::error::Error>> {
    let output = paramcheck(&[
        "--output",
        "json",
        "check",
        "--criterion",
        r#"{"kind":"inArray","values":["foo","bar"]}"#,
        "baz",
    ])?;
    assert_eq!(output.status.code(), Some(4));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(value["criterion"], "inArray");
    assert_eq!(value["valid"], false);
    assert_eq!(value["message"], "value \"baz\" of `value` is not one of: foo, bar");
    Ok(())
}

#[test]
fn malformed_criterion_is_invalid_input() -> io::Result<()> {
    let output = paramcheck(&["check", "--criterion", r#"{"kind":"nope"}"#, "1"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn misconfigured_criterion_is_invalid_input() -> io::Result<()> {
    let output = paramcheck(&["check", "--criterion", r#"{"kind":"hasLength","min":5,"max":2}"#, "abc"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(support::stderr(&output).contains("criteria:inverted_bounds"));
    Ok(())
}
