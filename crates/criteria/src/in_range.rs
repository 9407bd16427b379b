//! Inclusive numeric range on the typed value.

use crate::{Criterion, CriterionConfigError, describe_bounds, required_value};
use paramcheck_domain::{Parameter, ParameterSet, ParameterType, ValidationResult};

/// Valid iff `min <= value <= max`, reading the value per the declared type.
///
/// Integer parameters must hold an integer literal (compared as `f64` when it
/// overflows `i64`); float and string parameters a decimal literal. Boolean parameters are never in range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl InRange {
    /// Rule name.
    pub const NAME: &'static str = "inRange";

    /// Create a range criterion with finite bounds and `min <= max`.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, CriterionConfigError> {
        check_finite(min, "min")?;
        check_finite(max, "max")?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(CriterionConfigError::InvertedBounds {
                    criterion: Self::NAME,
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }
}

fn check_finite(bound: Option<f64>, side: &'static str) -> Result<(), CriterionConfigError> {
    match bound {
        Some(value) if !value.is_finite() => Err(CriterionConfigError::NonFiniteBound {
            criterion: InRange::NAME,
            bound: side,
        }),
        _ => Ok(()),
    }
}

impl Criterion for InRange {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, parameter: &Parameter, _siblings: &ParameterSet) -> ValidationResult {
        let raw = match required_value(parameter) {
            Ok(raw) => raw,
            Err(result) => return result,
        };
        if parameter.kind() == ParameterType::Boolean {
            return ValidationResult::invalid(format!(
                "`{}` is a boolean parameter and has no numeric range",
                parameter.name()
            ));
        }
        let Some(number) = parameter.numeric_value() else {
            let expected = if parameter.kind() == ParameterType::Integer {
                "an integer"
            } else {
                "a number"
            };
            return ValidationResult::invalid(format!(
                "value {raw:?} of `{}` is not {expected}",
                parameter.name()
            ));
        };

        let value = number.as_f64();
        let within =
            self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max);

        ValidationResult::check(within, || {
            format!(
                "value {number} of `{}` must be {}",
                parameter.name(),
                describe_bounds(self.min, self.max)
            )
        })
    }
}
