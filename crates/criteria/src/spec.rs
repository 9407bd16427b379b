//! Serializable criterion descriptions, as written in rule files.

use crate::{
    Criterion, CriterionConfigError, HasLength, InArray, InRange, IsFloat, IsInteger,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of a bound: a number, or `false` for "unbounded".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum BoundSpec<T> {
    /// Inclusive bound.
    Value(T),
    /// `false` disables the bound; `true` is rejected.
    Flag(bool),
}

impl<T> BoundSpec<T> {
    fn resolve(
        self,
        criterion: &'static str,
        bound: &'static str,
    ) -> Result<Option<T>, CriterionConfigError> {
        match self {
            Self::Value(value) => Ok(Some(value)),
            Self::Flag(false) => Ok(None),
            Self::Flag(true) => Err(CriterionConfigError::InvalidBoundFlag { criterion, bound }),
        }
    }
}

fn resolve_bound<T: Copy>(
    spec: Option<&BoundSpec<T>>,
    criterion: &'static str,
    bound: &'static str,
) -> Result<Option<T>, CriterionConfigError> {
    spec.copied()
        .map_or(Ok(None), |spec| spec.resolve(criterion, bound))
}

/// Entry of an `inArray` list. Numbers are compared by their text form.
///
/// Decimal entries keep a fractional part or exponent in that form (`1.0`,
/// `2.5`, `1e21`), so they match the way they are usually written. The text
/// is the shortest one that reads back to the same `f64`, so `2.50` compares
/// as `2.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AllowedValue {
    /// Text entry.
    Text(String),
    /// Whole-number entry.
    Integer(i64),
    /// Decimal entry.
    Float(f64),
}

impl fmt::Display for AllowedValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => formatter.write_str(value),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
        }
    }
}

const fn default_allow_negative() -> bool {
    true
}

/// Serializable form of a criterion, tagged by `kind`.
///
/// ```
/// use paramcheck_criteria::CriterionSpec;
///
/// let spec: CriterionSpec = serde_json::from_str(r#"{"kind":"inRange","min":0,"max":99}"#)?;
/// let criterion = spec.build()?;
/// assert_eq!(criterion.name(), "inRange");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CriterionSpec {
    /// Length bounds in characters.
    HasLength {
        /// Minimum length, or `false`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<BoundSpec<usize>>,
        /// Maximum length, or `false`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<BoundSpec<usize>>,
    },
    /// Membership in a list.
    #[serde(rename_all = "camelCase")]
    InArray {
        /// Allowed values.
        values: Vec<AllowedValue>,
        /// Compare ignoring case.
        #[serde(default)]
        case_insensitive: bool,
    },
    /// Inclusive numeric range.
    InRange {
        /// Lower bound, or `false`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<BoundSpec<f64>>,
        /// Upper bound, or `false`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<BoundSpec<f64>>,
    },
    /// Decimal number syntax.
    IsFloat,
    /// Integer syntax.
    #[serde(rename_all = "camelCase")]
    IsInteger {
        /// Accept a leading minus sign.
        #[serde(default = "default_allow_negative")]
        allow_negative: bool,
    },
}

impl CriterionSpec {
    /// Rule name of the described criterion.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HasLength { .. } => HasLength::NAME,
            Self::InArray { .. } => InArray::NAME,
            Self::InRange { .. } => InRange::NAME,
            Self::IsFloat => IsFloat::NAME,
            Self::IsInteger { .. } => IsInteger::NAME,
        }
    }

    /// Build the criterion, rejecting invalid configuration.
    pub fn build(&self) -> Result<Box<dyn Criterion>, CriterionConfigError> {
        let name = self.name();
        Ok(match self {
            Self::HasLength { min, max } => Box::new(HasLength::new(
                resolve_bound(min.as_ref(), name, "min")?,
                resolve_bound(max.as_ref(), name, "max")?,
            )?),
            Self::InArray {
                values,
                case_insensitive,
            } => Box::new(InArray::new(
                values.iter().map(ToString::to_string),
                *case_insensitive,
            )?),
            Self::InRange { min, max } => Box::new(InRange::new(
                resolve_bound(min.as_ref(), name, "min")?,
                resolve_bound(max.as_ref(), name, "max")?,
            )?),
            Self::IsFloat => Box::new(IsFloat),
            Self::IsInteger { allow_negative } => Box::new(IsInteger::new(*allow_negative)),
        })
    }
}
