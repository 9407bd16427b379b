//! Validate command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use paramcheck_app::{
    ParameterReport, ParameterStatus, SuppliedValue, ValidationReport, validate_parameters,
};
use paramcheck_config::load_rule_set_from_path;
use serde_json::Value;
use std::fmt::Write as _;
use std::path::Path;

/// Inputs gathered from `validate` flags.
#[derive(Debug)]
pub struct ValidateCommandInput<'a> {
    /// Rule file.
    pub rules: &'a Path,
    /// `NAME=VALUE` assignments, in flag order.
    pub assignments: &'a [String],
    /// Optional JSON object of `name: value` pairs.
    pub input_file: Option<&'a Path>,
}

/// Run the validate command.
pub fn run_validate(mode: OutputMode, input: &ValidateCommandInput<'_>) -> Result<CliOutput, CliError> {
    let rule_set = load_rule_set_from_path(input.rules)?;

    let mut supplied = match input.input_file {
        Some(path) => read_input_file(path)?,
        None => Vec::new(),
    };
    for assignment in input.assignments {
        supplied.push(parse_assignment(assignment)?);
    }

    let report = validate_parameters(&rule_set, &supplied);
    let stdout = if mode.is_ndjson() {
        format_report_ndjson(&report)?
    } else if mode.is_json() {
        format_report_json(&report)?
    } else {
        format_report_text(&report)
    };

    Ok(CliOutput {
        stdout,
        exit_code: if report.is_valid() {
            ExitCode::Ok
        } else {
            ExitCode::ValidationFailed
        },
    })
}

/// Split `NAME=VALUE` at the first `=`; the value may be empty.
pub fn parse_assignment(input: &str) -> Result<SuppliedValue, CliError> {
    let Some((name, value)) = input.split_once('=') else {
        return Err(CliError::InvalidInput(format!(
            "expected NAME=VALUE, got {input:?}"
        )));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "missing parameter name in {input:?}"
        )));
    }
    Ok(SuppliedValue::new(name, value))
}

fn read_input_file(path: &Path) -> Result<Vec<SuppliedValue>, CliError> {
    let text = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text).map_err(|error| {
        CliError::InvalidInput(format!("{}: invalid JSON: {error}", path.display()))
    })?;
    supplied_from_json(&value)
        .map_err(|message| CliError::InvalidInput(format!("{}: {message}", path.display())))
}

/// Flatten a JSON object into supplied values; keys come out in map order.
fn supplied_from_json(value: &Value) -> Result<Vec<SuppliedValue>, String> {
    let Value::Object(entries) = value else {
        return Err("input must be a JSON object of name/value pairs".to_string());
    };
    entries
        .iter()
        .map(|(name, value)| {
            let raw = match value {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                Value::Bool(flag) => flag.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    return Err(format!("value of {name:?} must be a string, number or boolean"));
                },
            };
            Ok(SuppliedValue::new(name.as_str(), raw))
        })
        .collect()
}

fn status_label(report: &ValidationReport) -> &'static str {
    if report.is_valid() { "valid" } else { "invalid" }
}

fn format_report_text(report: &ValidationReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "status: {}", status_label(report));
    let _ = writeln!(
        output,
        "parameters: {} ({} evaluated)",
        report.parameters().len(),
        report.evaluated_count()
    );
    let _ = writeln!(output, "failures: {}", report.failure_count());

    for parameter in report.parameters() {
        write_parameter_text(&mut output, parameter);
    }
    for unknown in report.unknown_inputs() {
        let _ = writeln!(output, "unknown: {} = {:?}", unknown.name(), unknown.value());
    }
    output
}

fn write_parameter_text(output: &mut String, parameter: &ParameterReport) {
    if parameter.status() == ParameterStatus::NotSupplied {
        let _ = writeln!(
            output,
            "{} ({}): {}",
            parameter.name(),
            parameter.kind(),
            parameter.status().as_str()
        );
        return;
    }

    let _ = write!(
        output,
        "{} ({}) = {:?}",
        parameter.name(),
        parameter.kind(),
        parameter.value().unwrap_or_default()
    );
    match parameter.supplied_as() {
        Some(alias) if alias != parameter.name().as_str() => {
            let _ = writeln!(output, " via {alias}");
        },
        _ => output.push('\n'),
    }
    for outcome in parameter.criteria() {
        match outcome.result().message() {
            Some(message) if !outcome.is_valid() => {
                let _ = writeln!(output, "  FAIL  {}: {message}", outcome.criterion());
            },
            _ => {
                let _ = writeln!(output, "  ok    {}", outcome.criterion());
            },
        }
    }
    for duplicate in parameter.duplicates() {
        let _ = writeln!(output, "  duplicate: supplied again as {duplicate}");
    }
}

fn format_report_json(report: &ValidationReport) -> Result<String, CliError> {
    let mut output = serde_json::to_string_pretty(report)?;
    output.push('\n');
    Ok(output)
}

fn format_report_ndjson(report: &ValidationReport) -> Result<String, CliError> {
    let mut output = String::new();
    for parameter in report.parameters() {
        let line = serde_json::json!({ "type": "parameter", "parameter": parameter });
        output.push_str(&serde_json::to_string(&line)?);
        output.push('\n');
    }
    for unknown in report.unknown_inputs() {
        let line = serde_json::json!({ "type": "unknownInput", "input": unknown });
        output.push_str(&serde_json::to_string(&line)?);
        output.push('\n');
    }
    let summary = serde_json::json!({
        "type": "summary",
        "kind": "validate",
        "status": status_label(report),
        "valid": report.is_valid(),
        "evaluated": report.evaluated_count(),
        "failures": report.failure_count(),
        "unknown": report.unknown_inputs().len(),
    });
    output.push_str(&serde_json::to_string(&summary)?);
    output.push('\n');
    Ok(output)
}
