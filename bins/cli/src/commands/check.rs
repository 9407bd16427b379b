//! Check command handler: one criterion, one value.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use paramcheck_app::{CheckCriterionInput, CriterionOutcome, check_criterion};
use paramcheck_criteria::CriterionSpec;
use paramcheck_domain::{ParameterName, ParameterType};
use paramcheck_shared::ErrorEnvelope;

const VALUE_NAME: &str = "value";

/// Run the check command.
pub fn run_check(
    mode: OutputMode,
    criterion_json: &str,
    kind: &str,
    value: &str,
) -> Result<CliOutput, CliError> {
    let spec: CriterionSpec = serde_json::from_str(criterion_json)
        .map_err(|error| CliError::InvalidInput(format!("invalid criterion JSON: {error}")))?;
    let kind: ParameterType = kind.parse().map_err(ErrorEnvelope::from)?;
    let name = ParameterName::parse(VALUE_NAME).map_err(ErrorEnvelope::from)?;

    let outcome = check_criterion(CheckCriterionInput {
        spec,
        name,
        kind,
        raw: value.to_string(),
    })?;

    let stdout = if mode.is_ndjson() {
        format_outcome_ndjson(&outcome)?
    } else if mode.is_json() {
        format_outcome_json(&outcome)?
    } else {
        format_outcome_text(&outcome)
    };

    Ok(CliOutput {
        stdout,
        exit_code: if outcome.is_valid() {
            ExitCode::Ok
        } else {
            ExitCode::ValidationFailed
        },
    })
}

const fn status_label(outcome: &CriterionOutcome) -> &'static str {
    if outcome.is_valid() { "valid" } else { "invalid" }
}

fn format_outcome_text(outcome: &CriterionOutcome) -> String {
    match outcome.result().message() {
        Some(message) => format!("{}: {}: {message}\n", status_label(outcome), outcome.criterion()),
        None => format!("{}: {}\n", status_label(outcome), outcome.criterion()),
    }
}

fn format_outcome_json(outcome: &CriterionOutcome) -> Result<String, CliError> {
    let mut output = serde_json::to_string_pretty(outcome)?;
    output.push('\n');
    Ok(output)
}

fn format_outcome_ndjson(outcome: &CriterionOutcome) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "type": "summary",
        "kind": "check",
        "status": status_label(outcome),
        "outcome": outcome,
    });
    let mut output = serde_json::to_string(&payload)?;
    output.push('\n');
    Ok(output)
}
