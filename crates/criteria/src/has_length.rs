//! Length bounds on the raw value.

use crate::{Criterion, CriterionConfigError, describe_bounds, required_value};
use paramcheck_domain::{Parameter, ParameterSet, ValidationResult};

/// Valid iff `min <= length(value) <= max`, counting Unicode scalar values.
///
/// An absent bound removes that side of the constraint; with both absent
/// every value is valid, including the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HasLength {
    min: Option<usize>,
    max: Option<usize>,
}

impl HasLength {
    /// Rule name.
    pub const NAME: &'static str = "hasLength";

    /// Create a length criterion; `min` must not exceed `max`.
    pub fn new(min: Option<usize>, max: Option<usize>) -> Result<Self, CriterionConfigError> {
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
    pub const fn min(&self) -> Option<usize> {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> Option<usize> {
        self.max
    }
}

impl Criterion for HasLength {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, parameter: &Parameter, _siblings: &ParameterSet) -> ValidationResult {
        let raw = match required_value(parameter) {
            Ok(raw) => raw,
            Err(result) => return result,
        };
        let length = raw.chars().count();
        let within = self.min.is_none_or(|min| length >= min)
            && self.max.is_none_or(|max| length <= max);

        ValidationResult::check(within, || {
            format!(
                "length of `{}` is {length}; it must be {} characters",
                parameter.name(),
                describe_bounds(self.min, self.max)
            )
        })
    }
}
