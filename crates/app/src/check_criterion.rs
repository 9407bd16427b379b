//! Evaluate a single criterion spec against a single value.

use crate::report::CriterionOutcome;
use paramcheck_criteria::CriterionSpec;
use paramcheck_domain::{Parameter, ParameterName, ParameterSet, ParameterType};
use paramcheck_shared::{ErrorEnvelope, Result};

/// Input payload for a one-off criterion check.
#[derive(Debug, Clone)]
pub struct CheckCriterionInput {
    /// Criterion to build and run.
    pub spec: CriterionSpec,
    /// Name the value is reported under.
    pub name: ParameterName,
    /// Declared type of the value.
    pub kind: ParameterType,
    /// Raw value.
    pub raw: String,
}

/// Build the criterion and evaluate it with no siblings.
///
/// Fails only when the spec itself is misconfigured; an invalid value is a
/// failing outcome, not an error.
#[tracing::instrument(
    name = "check_criterion",
    skip_all,
    fields(criterion = input.spec.name(), kind = %input.kind)
)]
pub fn check_criterion(input: CheckCriterionInput) -> Result<CriterionOutcome> {
    let criterion = input.spec.build().map_err(ErrorEnvelope::from)?;
    let parameter = Parameter::with_type(input.name, input.kind).with_value(input.raw);
    let result = criterion.validate(&parameter, &ParameterSet::new());
    tracing::debug!(valid = result.is_valid(), "criterion checked");
    Ok(CriterionOutcome::new(criterion.name(), result))
}
