//! Rule-file command handlers.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use paramcheck_config::{ParameterRule, ValidatedRuleSet, load_rule_set_from_path, rule_set_schema};
use serde_json::Value;
use std::fmt::Write as _;
use std::path::Path;

/// Load and validate a rule file, then print a summary.
pub fn run_rules_check(mode: OutputMode, path: &Path) -> Result<CliOutput, CliError> {
    let rule_set = load_rule_set_from_path(path)?;

    let stdout = if mode.is_ndjson() {
        format_rules_ndjson(path, &rule_set)?
    } else if mode.is_json() {
        format_rules_json(path, &rule_set)?
    } else {
        format_rules_text(path, &rule_set)
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}

/// Print the rule-file JSON schema (JSON in every output mode).
pub fn run_rules_schema(mode: OutputMode) -> Result<CliOutput, CliError> {
    let schema = rule_set_schema();
    let mut stdout = if mode.is_ndjson() {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    stdout.push('\n');

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}

fn criterion_names(rule: &ParameterRule) -> Vec<&'static str> {
    rule.criteria().iter().map(|criterion| criterion.name()).collect()
}

fn parameter_json(rule: &ParameterRule) -> Value {
    serde_json::json!({
        "name": rule.name(),
        "type": rule.kind(),
        "aliases": rule.aliases(),
        "criteria": criterion_names(rule),
    })
}

fn format_rules_text(path: &Path, rule_set: &ValidatedRuleSet) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "status: ok");
    let _ = writeln!(output, "path: {}", path.display());
    let _ = writeln!(output, "version: {}", rule_set.as_config().version);
    let _ = writeln!(output, "parameters: {}", rule_set.parameters().len());
    let _ = writeln!(output, "criteria: {}", rule_set.criteria_count());
    for rule in rule_set.parameters() {
        let _ = write!(output, "- {} ({})", rule.name(), rule.kind());
        if !rule.aliases().is_empty() {
            let aliases: Vec<&str> = rule.aliases().iter().map(|alias| alias.as_str()).collect();
            let _ = write!(output, " aliases: {}", aliases.join(", "));
        }
        let names = criterion_names(rule);
        if names.is_empty() {
            output.push('\n');
        } else {
            let _ = writeln!(output, " criteria: {}", names.join(", "));
        }
    }
    output
}

fn format_rules_json(path: &Path, rule_set: &ValidatedRuleSet) -> Result<String, CliError> {
    let parameters: Vec<Value> = rule_set.parameters().iter().map(parameter_json).collect();
    let payload = serde_json::json!({
        "status": "ok",
        "path": path.display().to_string(),
        "version": rule_set.as_config().version,
        "criteria": rule_set.criteria_count(),
        "parameters": parameters,
    });
    let mut output = serde_json::to_string_pretty(&payload)?;
    output.push('\n');
    Ok(output)
}

fn format_rules_ndjson(path: &Path, rule_set: &ValidatedRuleSet) -> Result<String, CliError> {
    let mut output = String::new();
    for rule in rule_set.parameters() {
        let line = serde_json::json!({ "type": "parameter", "parameter": parameter_json(rule) });
        output.push_str(&serde_json::to_string(&line)?);
        output.push('\n');
    }
    let summary = serde_json::json!({
        "type": "summary",
        "kind": "rulesCheck",
        "status": "ok",
        "path": path.display().to_string(),
        "version": rule_set.as_config().version,
        "parameters": rule_set.parameters().len(),
        "criteria": rule_set.criteria_count(),
    });
    output.push_str(&serde_json::to_string(&summary)?);
    output.push('\n');
    Ok(output)
}
