//! Integer syntax check.

use crate::{Criterion, required_value};
use paramcheck_domain::{Parameter, ParameterSet, ValidationResult, is_integer_literal};

/// Valid iff the raw value is all digits, with a leading `-` only when
/// negatives are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsInteger {
    allow_negative: bool,
}

impl IsInteger {
    /// Rule name.
    pub const NAME: &'static str = "isInteger";

    /// Create an integer criterion.
    #[must_use]
    pub const fn new(allow_negative: bool) -> Self {
        Self { allow_negative }
    }

    /// Whether a leading minus sign is accepted.
    #[must_use]
    pub const fn allows_negative(&self) -> bool {
        self.allow_negative
    }
}

impl Default for IsInteger {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Criterion for IsInteger {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, parameter: &Parameter, _siblings: &ParameterSet) -> ValidationResult {
        let raw = match required_value(parameter) {
            Ok(raw) => raw,
            Err(result) => return result,
        };
        ValidationResult::check(is_integer_literal(raw, self.allow_negative), || {
            let expected = if self.allow_negative {
                "an integer"
            } else {
                "a non-negative integer"
            };
            format!("value {raw:?} of `{}` is not {expected}", parameter.name())
        })
    }
}
