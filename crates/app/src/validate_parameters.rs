//! Validate a batch of user-supplied values against a rule set.

use crate::report::{
    CriterionOutcome, ParameterReport, ParameterStatus, UnknownInput, ValidationReport,
};
use paramcheck_config::{ParameterRule, ValidatedRuleSet};
use paramcheck_domain::{Parameter, ParameterSet};

/// One `(name, raw value)` pair as the user supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppliedValue {
    /// Name the value was supplied under (canonical name or alias).
    pub name: String,
    /// Raw text of the value.
    pub raw: String,
}

impl SuppliedValue {
    /// Create a supplied value.
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
        }
    }
}

struct Slot<'a> {
    rule: &'a ParameterRule,
    parameter: Parameter,
    duplicates: Vec<Box<str>>,
}

/// Resolve every input to a declared parameter and evaluate its criteria.
///
/// Unresolved inputs are reported as unknown. A parameter supplied twice
/// keeps its first value and records the later names as duplicates.
/// Declared parameters without input are reported as not supplied.
#[tracing::instrument(
    name = "validate_parameters",
    skip_all,
    fields(parameters = rule_set.parameters().len(), inputs = inputs.len())
)]
pub fn validate_parameters(rule_set: &ValidatedRuleSet, inputs: &[SuppliedValue]) -> ValidationReport {
    let mut slots: Vec<Slot<'_>> = rule_set
        .parameters()
        .iter()
        .map(|rule| Slot {
            rule,
            parameter: Parameter::with_type(rule.name().clone(), rule.kind()),
            duplicates: Vec::new(),
        })
        .collect();
    let mut unknown_inputs = Vec::new();

    for input in inputs {
        let Some(slot) = slots.iter_mut().find(|slot| slot.rule.answers_to(&input.name)) else {
            tracing::warn!(input = %input.name, "input matches no declared parameter");
            unknown_inputs.push(UnknownInput {
                name: input.name.as_str().into(),
                value: input.raw.as_str().into(),
            });
            continue;
        };
        if let Err(error) = slot
            .parameter
            .set_user_value(input.name.as_str(), input.raw.as_str())
        {
            tracing::warn!(input = %input.name, %error, "parameter supplied more than once");
            slot.duplicates.push(input.name.as_str().into());
        }
    }

    let siblings: ParameterSet = slots
        .iter()
        .filter(|slot| slot.parameter.user_value().is_some())
        .map(|slot| slot.parameter.clone())
        .collect();

    let parameters: Vec<ParameterReport> = slots
        .into_iter()
        .map(|slot| evaluate(slot, &siblings))
        .collect();
    let report = ValidationReport::new(parameters, unknown_inputs);

    tracing::info!(
        valid = report.is_valid(),
        evaluated = report.evaluated_count(),
        failures = report.failure_count(),
        unknown = report.unknown_inputs().len(),
        "validation finished"
    );
    report
}

fn evaluate(slot: Slot<'_>, siblings: &ParameterSet) -> ParameterReport {
    let Slot {
        rule,
        parameter,
        duplicates,
    } = slot;

    let Some(user_value) = parameter.user_value() else {
        tracing::debug!(parameter = %rule.name(), "not supplied");
        return ParameterReport {
            name: rule.name().clone(),
            kind: rule.kind(),
            status: ParameterStatus::NotSupplied,
            supplied_as: None,
            value: None,
            duplicates,
            criteria: Vec::new(),
        };
    };

    let criteria: Vec<CriterionOutcome> = rule
        .criteria()
        .iter()
        .map(|criterion| {
            CriterionOutcome::new(criterion.name(), criterion.validate(&parameter, siblings))
        })
        .collect();

    let report = ParameterReport {
        name: rule.name().clone(),
        kind: rule.kind(),
        status: ParameterStatus::Evaluated,
        supplied_as: Some(user_value.supplied_as().into()),
        value: Some(user_value.raw().into()),
        duplicates,
        criteria,
    };
    tracing::debug!(
        parameter = %rule.name(),
        supplied_as = user_value.supplied_as(),
        valid = report.is_valid(),
        "evaluated"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramcheck_config::parse_rule_set_toml;
    use paramcheck_shared::ErrorEnvelope;

    const RULES: &str = r#"
version = 1

[[parameters]]
name = "limit"
type = "integer"
aliases = ["max"]
criteria = [
  { kind = "isInteger", allowNegative = false },
  { kind = "inRange", min = 1, max = 500 },
]

[[parameters]]
name = "sort"
criteria = [{ kind = "inArray", values = ["asc", "desc"] }]
"#;

    fn rules() -> Result<ValidatedRuleSet, ErrorEnvelope> {
        parse_rule_set_toml(RULES)
    }

    #[test]
    fn valid_inputs_produce_a_valid_report() -> Result<(), ErrorEnvelope> {
        let report = validate_parameters(
            &rules()?,
            &[SuppliedValue::new("limit", "20"), SuppliedValue::new("sort", "asc")],
        );
        assert!(report.is_valid());
        assert_eq!(report.evaluated_count(), 2);
        Ok(())
    }

    #[test]
    fn every_criterion_runs_even_after_a_failure() -> Result<(), ErrorEnvelope> {
        let report = validate_parameters(&rules()?, &[SuppliedValue::new("limit", "-4.2")]);
        let limit = report.parameter("limit");
        let verdicts: Vec<(&str, bool)> = limit
            .map(|limit| {
                limit
                    .criteria()
                    .iter()
                    .map(|outcome| (outcome.criterion(), outcome.is_valid()))
                    .collect()
            })
            .unwrap_or_default();
        assert_eq!(verdicts, vec![("isInteger", false), ("inRange", false)]);
        assert_eq!(report.failure_count(), 2);
        assert!(!report.is_valid());
        Ok(())
    }

    #[test]
    fn alias_is_recorded_as_supplied_name() -> Result<(), ErrorEnvelope> {
        let report = validate_parameters(&rules()?, &[SuppliedValue::new("max", "10")]);
        let limit = report.parameter("limit");
        assert_eq!(limit.and_then(ParameterReport::supplied_as), Some("max"));
        assert_eq!(limit.and_then(ParameterReport::value), Some("10"));
        Ok(())
    }

    #[test]
    fn missing_parameters_are_not_evaluated() -> Result<(), ErrorEnvelope> {
        let report = validate_parameters(&rules()?, &[SuppliedValue::new("limit", "10")]);
        let sort = report.parameter("sort");
        assert_eq!(sort.map(ParameterReport::status), Some(ParameterStatus::NotSupplied));
        assert!(sort.is_some_and(|sort| sort.criteria().is_empty()));
        assert!(report.is_valid());
        Ok(())
    }

    #[test]
    fn duplicates_keep_the_first_value() -> Result<(), ErrorEnvelope> {
        let report = validate_parameters(
            &rules()?,
            &[SuppliedValue::new("limit", "10"), SuppliedValue::new("max", "999")],
        );
        let limit = report.parameter("limit");
        assert_eq!(limit.and_then(ParameterReport::value), Some("10"));
        assert_eq!(
            limit.map(|limit| limit.duplicates().to_vec()),
            Some(vec![Box::<str>::from("max")])
        );
        assert_eq!(report.failure_count(), 0);
        assert!(!report.is_valid());
        Ok(())
    }

    #[test]
    fn unknown_inputs_keep_input_order() -> Result<(), ErrorEnvelope> {
        let report = validate_parameters(
            &rules()?,
            &[
                SuppliedValue::new("zeta", "1"),
                SuppliedValue::new("limit", "10"),
                SuppliedValue::new("alpha", "2"),
            ],
        );
        let names: Vec<&str> = report.unknown_inputs().iter().map(UnknownInput::name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert!(!report.is_valid());
        Ok(())
    }

    #[test]
    fn parameters_follow_declaration_order() -> Result<(), ErrorEnvelope> {
        let report = validate_parameters(
            &rules()?,
            &[SuppliedValue::new("sort", "desc"), SuppliedValue::new("limit", "1")],
        );
        let names: Vec<&str> = report
            .parameters()
            .iter()
            .map(|parameter| parameter.name().as_str())
            .collect();
        assert_eq!(names, vec!["limit", "sort"]);
        Ok(())
    }
}
