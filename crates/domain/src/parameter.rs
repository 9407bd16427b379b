//! Parameters under validation and the sibling set they are evaluated with.

use crate::literals::{is_decimal_literal, is_integer_literal};
use crate::primitives::{ParameterName, ParameterType};
use paramcheck_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;

/// Errors raised while assigning parameter values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// A value was already assigned to this parameter.
    ValueAlreadySet {
        /// Parameter that already carries a value.
        parameter: ParameterName,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueAlreadySet { parameter } => {
                write!(formatter, "parameter `{parameter}` already has a value")
            },
        }
    }
}

impl std::error::Error for ParameterError {}

impl From<ParameterError> for ErrorEnvelope {
    fn from(error: ParameterError) -> Self {
        let message = error.to_string();
        match error {
            ParameterError::ValueAlreadySet { parameter } => {
                Self::expected(ErrorCode::new("domain", "value_already_set"), message)
                    .with_metadata("parameter", parameter.as_str())
            },
        }
    }
}

/// Raw value as the user supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserValue {
    supplied_as: Box<str>,
    raw: Box<str>,
}

impl UserValue {
    /// Name the user supplied the value under (may be an alias).
    #[must_use]
    pub fn supplied_as(&self) -> &str {
        &self.supplied_as
    }

    /// Raw, unparsed value.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Numeric reading of a parameter value, following its declared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// Value of an integer-typed parameter.
    Integer(i64),
    /// Value of a float- or string-typed parameter.
    Float(f64),
}

impl NumericValue {
    /// Widen to `f64` for comparison against range bounds.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "range bounds are f64; integers beyond 2^53 compare approximately"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
        }
    }
}

/// A named, typed input value under validation.
///
/// The name and type are fixed at construction; the value can be assigned
/// once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: ParameterName,
    kind: ParameterType,
    user_value: Option<UserValue>,
}

impl Parameter {
    /// Create a string-typed parameter without a value.
    #[must_use]
    pub const fn new(name: ParameterName) -> Self {
        Self::with_type(name, ParameterType::String)
    }

    /// Create a parameter with an explicit declared type.
    #[must_use]
    pub const fn with_type(name: ParameterName, kind: ParameterType) -> Self {
        Self {
            name,
            kind,
            user_value: None,
        }
    }

    /// Assign the user-supplied value, recording the name it was supplied under.
    pub fn set_user_value(
        &mut self,
        supplied_as: impl Into<Box<str>>,
        raw: impl Into<Box<str>>,
    ) -> Result<(), ParameterError> {
        if self.user_value.is_some() {
            return Err(ParameterError::ValueAlreadySet {
                parameter: self.name.clone(),
            });
        }
        self.user_value = Some(UserValue {
            supplied_as: supplied_as.into(),
            raw: raw.into(),
        });
        Ok(())
    }

    /// Builder form of [`Parameter::set_user_value`] for a fresh parameter.
    #[must_use]
    pub fn with_value(mut self, raw: impl Into<Box<str>>) -> Self {
        let supplied_as: Box<str> = self.name.as_str().into();
        self.user_value = Some(UserValue {
            supplied_as,
            raw: raw.into(),
        });
        self
    }

    /// Parameter name.
    #[must_use]
    pub const fn name(&self) -> &ParameterName {
        &self.name
    }

    /// Declared type.
    #[must_use]
    pub const fn kind(&self) -> ParameterType {
        self.kind
    }

    /// Assigned value, if any.
    #[must_use]
    pub const fn user_value(&self) -> Option<&UserValue> {
        self.user_value.as_ref()
    }

    /// Raw assigned value, if any.
    #[must_use]
    pub fn raw_value(&self) -> Option<&str> {
        self.user_value.as_ref().map(UserValue::raw)
    }

    /// Read the value as a number according to the declared type.
    ///
    /// Integer parameters need an integer literal; one that overflows `i64`
    /// is read as `f64`. Float and string parameters need a decimal literal.
    /// Boolean parameters and missing values yield `None`.
    #[must_use]
    pub fn numeric_value(&self) -> Option<NumericValue> {
        let raw = self.raw_value()?;
        match self.kind {
            ParameterType::Integer => {
                if !is_integer_literal(raw, true) {
                    return None;
                }
                raw.parse()
                    .map(NumericValue::Integer)
                    .or_else(|_| raw.parse().map(NumericValue::Float))
                    .ok()
            },
            ParameterType::Float | ParameterType::String => {
                if !is_decimal_literal(raw) {
                    return None;
                }
                raw.parse().ok().map(NumericValue::Float)
            },
            ParameterType::Boolean => None,
        }
    }
}

/// Parameters of one request, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    parameters: BTreeMap<ParameterName, Parameter>,
}

impl ParameterSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parameters: BTreeMap::new(),
        }
    }

    /// Insert a parameter, returning the one it replaced.
    pub fn insert(&mut self, parameter: Parameter) -> Option<Parameter> {
        self.parameters.insert(parameter.name.clone(), parameter)
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// Iterate parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true when the set holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut set = Self::new();
        for parameter in iter {
            set.insert(parameter);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveError;

    fn name(value: &str) -> Result<ParameterName, PrimitiveError> {
        ParameterName::parse(value)
    }

    #[test]
    fn value_can_only_be_set_once() -> Result<(), Box<dyn std::error::Error>> {
        let mut parameter = Parameter::new(name("test")?);
        parameter.set_user_value("test", "foo")?;

        let second = parameter.set_user_value("test", "bar");
        assert!(matches!(
            second,
            Err(ParameterError::ValueAlreadySet { .. })
        ));
        assert_eq!(parameter.raw_value(), Some("foo"));
        Ok(())
    }

    #[test]
    fn user_value_records_alias() -> Result<(), Box<dyn std::error::Error>> {
        let mut parameter = Parameter::new(name("limit")?);
        parameter.set_user_value("max", "10")?;

        let value = parameter.user_value().ok_or("value missing")?;
        assert_eq!(value.supplied_as(), "max");
        assert_eq!(value.raw(), "10");
        Ok(())
    }

    #[test]
    fn numeric_value_follows_declared_type() -> Result<(), PrimitiveError> {
        let integer = Parameter::with_type(name("n")?, ParameterType::Integer).with_value("-42");
        assert_eq!(integer.numeric_value(), Some(NumericValue::Integer(-42)));

        let truncated = Parameter::with_type(name("n")?, ParameterType::Integer).with_value("4.2");
        assert_eq!(truncated.numeric_value(), None);

        let float = Parameter::with_type(name("n")?, ParameterType::Float).with_value("4.2");
        assert_eq!(float.numeric_value(), Some(NumericValue::Float(4.2)));

        let flag = Parameter::with_type(name("n")?, ParameterType::Boolean).with_value("1");
        assert_eq!(flag.numeric_value(), None);

        let unset = Parameter::with_type(name("n")?, ParameterType::Float);
        assert_eq!(unset.numeric_value(), None);
        Ok(())
    }

    #[test]
    fn integer_overflow_reads_as_float() -> Result<(), PrimitiveError> {
        let parameter = Parameter::with_type(name("n")?, ParameterType::Integer)
            .with_value("99999999999999999999");
        assert_eq!(parameter.numeric_value(), Some(NumericValue::Float(1e20)));

        let negative = Parameter::with_type(name("n")?, ParameterType::Integer)
            .with_value("-99999999999999999999");
        assert_eq!(negative.numeric_value(), Some(NumericValue::Float(-1e20)));
        Ok(())
    }

    #[test]
    fn parameter_set_lookup_by_str() -> Result<(), PrimitiveError> {
        let set: ParameterSet = [
            Parameter::new(name("a")?).with_value("1"),
            Parameter::new(name("b")?).with_value("2"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("b").and_then(Parameter::raw_value), Some("2"));
        assert!(set.get("c").is_none());
        Ok(())
    }
}
