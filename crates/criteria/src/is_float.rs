//! Decimal number syntax check.

use crate::{Criterion, required_value};
use paramcheck_domain::{Parameter, ParameterSet, ValidationResult, is_decimal_literal};

/// Valid iff the raw value is a well-formed decimal number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsFloat;

impl IsFloat {
    /// Rule name.
    pub const NAME: &'static str = "isFloat";
}

impl Criterion for IsFloat {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, parameter: &Parameter, _siblings: &ParameterSet) -> ValidationResult {
        let raw = match required_value(parameter) {
            Ok(raw) => raw,
            Err(result) => return result,
        };
        ValidationResult::check(is_decimal_literal(raw), || {
            format!("value {raw:?} of `{}` is not a number", parameter.name())
        })
    }
}
