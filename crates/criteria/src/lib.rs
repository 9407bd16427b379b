//! # paramcheck-criteria
//!
//! Criterion validators for user-supplied parameter values.
//!
//! A [`Criterion`] inspects one parameter and the set of its siblings and
//! returns a [`ValidationResult`]. Evaluation is pure: invalid input never
//! produces an error, only a failing result with a message. Misconfiguration
//! (inverted bounds, empty allow-lists) is rejected when the criterion is
//! constructed, see [`CriterionConfigError`].
//!
//! Criteria can be built directly (`HasLength::new(..)`) or from their
//! serializable form, [`CriterionSpec`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod error;
pub mod has_length;
pub mod in_array;
pub mod in_range;
pub mod is_float;
pub mod is_integer;
pub mod spec;

pub use error::CriterionConfigError;
pub use has_length::HasLength;
pub use in_array::InArray;
pub use in_range::InRange;
pub use is_float::IsFloat;
pub use is_integer::IsInteger;
pub use spec::{AllowedValue, BoundSpec, CriterionSpec};

use paramcheck_domain::{Parameter, ParameterSet, ValidationResult};
use std::fmt;

/// A single named validation rule with its own configuration.
pub trait Criterion: fmt::Debug + Send + Sync {
    /// Stable rule name, matching the `kind` tag of [`CriterionSpec`].
    fn name(&self) -> &'static str;

    /// Evaluate the rule against `parameter`.
    ///
    /// `siblings` holds the other parameters of the same request.
    fn validate(&self, parameter: &Parameter, siblings: &ParameterSet) -> ValidationResult;
}

/// Returns the criteria crate version.
#[must_use]
pub const fn criteria_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Raw value of `parameter`, or the failing result for a parameter without one.
pub(crate) fn required_value(parameter: &Parameter) -> Result<&str, ValidationResult> {
    parameter.raw_value().ok_or_else(|| {
        ValidationResult::invalid(format!("parameter `{}` has no value", parameter.name()))
    })
}

/// Human-readable inclusive bounds, e.g. `between 2 and 3`.
pub(crate) fn describe_bounds<T: fmt::Display>(min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("between {min} and {max}"),
        (Some(min), None) => format!("at least {min}"),
        (None, Some(max)) => format!("at most {max}"),
        (None, None) => "unbounded".to_string(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use paramcheck_domain::{Parameter, ParameterName, ParameterType, PrimitiveError};

    /// A `test` parameter of the given type with the value assigned.
    pub fn typed(kind: ParameterType, value: &str) -> Result<Parameter, PrimitiveError> {
        Ok(Parameter::with_type(ParameterName::parse("test")?, kind).with_value(value))
    }

    /// A string-typed `test` parameter with the value assigned.
    pub fn text(value: &str) -> Result<Parameter, PrimitiveError> {
        typed(ParameterType::String, value)
    }
}
