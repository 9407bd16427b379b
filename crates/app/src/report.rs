//! Validation report types.

use paramcheck_domain::{ParameterName, ParameterType, ValidationResult};
use serde::Serialize;

/// Outcome of one criterion applied to one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionOutcome {
    criterion: &'static str,
    #[serde(flatten)]
    result: ValidationResult,
}

impl CriterionOutcome {
    /// Pair a criterion name with its result.
    #[must_use]
    pub const fn new(criterion: &'static str, result: ValidationResult) -> Self {
        Self { criterion, result }
    }

    /// Criterion name (`hasLength`, `inRange`, ...).
    #[must_use]
    pub const fn criterion(&self) -> &'static str {
        self.criterion
    }

    /// Underlying result.
    #[must_use]
    pub const fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Returns true when the criterion passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.result.is_valid()
    }
}

/// Whether a declared parameter received a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterStatus {
    /// A value was supplied and every criterion ran.
    Evaluated,
    /// No value was supplied; no criterion ran.
    NotSupplied,
}

impl ParameterStatus {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Evaluated => "evaluated",
            Self::NotSupplied => "not supplied",
        }
    }
}

/// Per-parameter section of a [`ValidationReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterReport {
    pub(crate) name: ParameterName,
    #[serde(rename = "type")]
    pub(crate) kind: ParameterType,
    pub(crate) status: ParameterStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) supplied_as: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<Box<str>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) duplicates: Vec<Box<str>>,
    pub(crate) criteria: Vec<CriterionOutcome>,
}

impl ParameterReport {
    /// Canonical parameter name.
    #[must_use]
    pub const fn name(&self) -> &ParameterName {
        &self.name
    }

    /// Declared type.
    #[must_use]
    pub const fn kind(&self) -> ParameterType {
        self.kind
    }

    /// Evaluation status.
    #[must_use]
    pub const fn status(&self) -> ParameterStatus {
        self.status
    }

    /// Name the value was supplied under (canonical name or alias).
    #[must_use]
    pub fn supplied_as(&self) -> Option<&str> {
        self.supplied_as.as_deref()
    }

    /// Raw value that was evaluated.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Names under which the parameter was supplied again after the first value.
    #[must_use]
    pub fn duplicates(&self) -> &[Box<str>] {
        &self.duplicates
    }

    /// Criterion outcomes in declaration order.
    #[must_use]
    pub fn criteria(&self) -> &[CriterionOutcome] {
        &self.criteria
    }

    /// Failing criterion outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &CriterionOutcome> {
        self.criteria.iter().filter(|outcome| !outcome.is_valid())
    }

    /// Returns true when no criterion failed and the value was supplied once.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.duplicates.is_empty() && self.failures().next().is_none()
    }
}

/// An input whose name matches no declared parameter or alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownInput {
    pub(crate) name: Box<str>,
    pub(crate) value: Box<str>,
}

impl UnknownInput {
    /// Name as supplied.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value as supplied.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Deterministic result of validating a batch of inputs against a rule set.
///
/// Parameters appear in declaration order, unknown inputs in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    valid: bool,
    parameters: Vec<ParameterReport>,
    unknown_inputs: Vec<UnknownInput>,
}

impl ValidationReport {
    pub(crate) fn new(parameters: Vec<ParameterReport>, unknown_inputs: Vec<UnknownInput>) -> Self {
        let valid = unknown_inputs.is_empty() && parameters.iter().all(ParameterReport::is_valid);
        Self {
            valid,
            parameters,
            unknown_inputs,
        }
    }

    /// Returns true iff no criterion failed, no input was unknown, and no
    /// parameter was supplied twice.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Per-parameter reports in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterReport] {
        &self.parameters
    }

    /// Look up a parameter report by canonical name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterReport> {
        self.parameters
            .iter()
            .find(|report| report.name.as_str() == name)
    }

    /// Unknown inputs in input order.
    #[must_use]
    pub fn unknown_inputs(&self) -> &[UnknownInput] {
        &self.unknown_inputs
    }

    /// Number of parameters whose criteria ran.
    #[must_use]
    pub fn evaluated_count(&self) -> usize {
        self.parameters
            .iter()
            .filter(|report| report.status == ParameterStatus::Evaluated)
            .count()
    }

    /// Number of failing criterion outcomes across all parameters.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.parameters
            .iter()
            .map(|report| report.failures().count())
            .sum()
    }
}
