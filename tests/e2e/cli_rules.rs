//! `paramcheck rules` end-to-end tests.

#[path = "support.rs"]
mod support;

use std::io;
use support::{fixture, paramcheck, stderr, stdout};

#[test]
fn rules_check_summarizes_the_file() -> io::Result<()> {
    let rules = fixture("rules.toml").display().to_string();
    let output = paramcheck(&["rules", "check", "--rules", &rules])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("parameters: 3\n"));
    assert!(text.contains("criteria: 4\n"));
    assert!(text.contains("- limit (integer) aliases: max criteria: isInteger, inRange\n"));
    assert!(stderr(&output).is_empty());
    Ok(())
}

#[test]
fn rules_check_json_lists_parameters() -> Result<(), Box<dyn std::error::Error>> {
    let rules = fixture("rules.toml").display().to_string();
    let output = paramcheck(&["--output", "json", "rules", "check", "--rules", &rules])?;
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(value["status"], "ok");
    assert_eq!(value["parameters"][1]["name"], "sort");
    assert_eq!(value["parameters"][1]["criteria"][0], "inArray");
    Ok(())
}

#[test]
fn broken_rules_are_invalid_input() -> io::Result<()> {
    let rules = fixture("broken.toml").display().to_string();
    let output = paramcheck(&["rules", "check", "--rules", &rules])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("rules:invalid_criterion"));
    Ok(())
}

#[test]
fn missing_rule_file_is_io_error() -> io::Result<()> {
    let output = paramcheck(&["rules", "check", "--rules", "/nonexistent/paramcheck.toml"])?;
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("config:rules_file_not_found"));
    Ok(())
}
