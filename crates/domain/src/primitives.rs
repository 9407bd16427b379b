//! Domain primitives with validated constructors.

use paramcheck_shared::{ErrorCode, ErrorEnvelope};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Validation failures for domain primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// `ParameterName` is empty after trimming.
    EmptyParameterName {
        /// Length of the raw input before trimming.
        input_length: usize,
    },
    /// `ParameterName` contains whitespace or `=`.
    InvalidParameterName {
        /// Trimmed name that failed validation.
        input: String,
    },
    /// `ParameterType` is not one of the known type names.
    UnknownParameterType {
        /// Raw type name.
        input: String,
    },
}

impl PrimitiveError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyParameterName { .. } | Self::InvalidParameterName { .. } => {
                ErrorCode::new("domain", "invalid_parameter_name")
            },
            Self::UnknownParameterType { .. } => {
                ErrorCode::new("domain", "unknown_parameter_type")
            },
        }
    }
}

impl fmt::Display for PrimitiveError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyParameterName { .. } => {
                formatter.write_str("ParameterName must be non-empty")
            },
            Self::InvalidParameterName { .. } => {
                formatter.write_str("ParameterName must not contain whitespace or '='")
            },
            Self::UnknownParameterType { input } => write!(
                formatter,
                "unknown parameter type `{input}` (expected string, integer, float or boolean)"
            ),
        }
    }
}

impl std::error::Error for PrimitiveError {}

impl From<PrimitiveError> for ErrorEnvelope {
    fn from(error: PrimitiveError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            PrimitiveError::EmptyParameterName { input_length } => {
                envelope.with_metadata("input_length", input_length.to_string())
            },
            PrimitiveError::InvalidParameterName { input }
            | PrimitiveError::UnknownParameterType { input } => {
                envelope.with_metadata("input", input)
            },
        }
    }
}

/// Name of a parameter, trimmed and free of whitespace and `=`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParameterName(Box<str>);

impl ParameterName {
    /// Parse and validate a parameter name.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, PrimitiveError> {
        let raw = input.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PrimitiveError::EmptyParameterName {
                input_length: raw.len(),
            });
        }
        if trimmed.chars().any(|ch| ch.is_whitespace() || ch == '=') {
            return Err(PrimitiveError::InvalidParameterName {
                input: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.into()))
    }

    /// Borrow the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParameterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ParameterName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl TryFrom<String> for ParameterName {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ParameterName> for String {
    fn from(value: ParameterName) -> Self {
        value.0.into_string()
    }
}

/// Declared type of a parameter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// Free-form text.
    #[default]
    String,
    /// Signed whole number.
    Integer,
    /// Decimal number.
    Float,
    /// Boolean flag.
    Boolean,
}

impl ParameterType {
    /// Stable lowercase name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = PrimitiveError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(Self::String),
            "integer" | "int" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "boolean" | "bool" => Ok(Self::Boolean),
            _ => Err(PrimitiveError::UnknownParameterType {
                input: input.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_name_requires_non_empty_input() {
        let error = ParameterName::parse("   ").err();
        assert!(matches!(
            error,
            Some(PrimitiveError::EmptyParameterName { input_length: 3 })
        ));
    }

    #[test]
    fn parameter_name_is_trimmed() -> Result<(), PrimitiveError> {
        let name = ParameterName::parse("  limit ")?;
        assert_eq!(name.as_str(), "limit");
        Ok(())
    }

    #[test]
    fn parameter_name_rejects_separator_characters() {
        for input in ["a b", "a=b", "tab\tname"] {
            let error = ParameterName::parse(input).err();
            assert!(
                matches!(error, Some(PrimitiveError::InvalidParameterName { .. })),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn parameter_type_parses_aliases() -> Result<(), PrimitiveError> {
        assert_eq!("INT".parse::<ParameterType>()?, ParameterType::Integer);
        assert_eq!("bool".parse::<ParameterType>()?, ParameterType::Boolean);
        assert!("decimal".parse::<ParameterType>().is_err());
        Ok(())
    }

    #[test]
    fn primitive_errors_map_into_error_envelopes() {
        let envelope: ErrorEnvelope = PrimitiveError::EmptyParameterName { input_length: 1 }.into();
        assert_eq!(envelope.code.namespace(), "domain");
        assert_eq!(envelope.code.code(), "invalid_parameter_name");
        assert_eq!(envelope.metadata_value("input_length"), Some("1"));
    }

    #[test]
    fn parameter_name_deserializes_with_validation() {
        let ok: Result<ParameterName, _> = serde_json::from_str("\"limit\"");
        assert!(ok.is_ok());
        let bad: Result<ParameterName, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
