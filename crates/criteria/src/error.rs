//! Construction-time configuration errors for criteria.

use paramcheck_shared::{ErrorCode, ErrorEnvelope};
use std::fmt;

/// A criterion was configured in a way no value could ever satisfy sensibly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionConfigError {
    /// The lower bound is greater than the upper bound.
    InvertedBounds {
        /// Criterion name (e.g. `inRange`).
        criterion: &'static str,
        /// Lower bound as written.
        min: String,
        /// Upper bound as written.
        max: String,
    },
    /// A range bound is NaN or infinite.
    NonFiniteBound {
        /// Criterion name.
        criterion: &'static str,
        /// Which bound (`min` or `max`).
        bound: &'static str,
    },
    /// A bound was given as `true`; only `false` (unbounded) is accepted.
    InvalidBoundFlag {
        /// Criterion name.
        criterion: &'static str,
        /// Which bound (`min` or `max`).
        bound: &'static str,
    },
    /// `inArray` has no non-empty allowed value.
    EmptyAllowedValues,
}

impl CriterionConfigError {
    fn error_code(&self) -> ErrorCode {
        let code = match self {
            Self::InvertedBounds { .. } => "inverted_bounds",
            Self::NonFiniteBound { .. } => "non_finite_bound",
            Self::InvalidBoundFlag { .. } => "invalid_bound_flag",
            Self::EmptyAllowedValues => "empty_allowed_values",
        };
        ErrorCode::new("criteria", code)
    }
}

impl fmt::Display for CriterionConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds {
                criterion,
                min,
                max,
            } => write!(
                formatter,
                "{criterion}: min ({min}) must not be greater than max ({max})"
            ),
            Self::NonFiniteBound { criterion, bound } => {
                write!(formatter, "{criterion}: {bound} must be a finite number")
            },
            Self::InvalidBoundFlag { criterion, bound } => write!(
                formatter,
                "{criterion}: {bound} must be a number or false"
            ),
            Self::EmptyAllowedValues => {
                formatter.write_str("inArray: at least one non-empty value is required")
            },
        }
    }
}

impl std::error::Error for CriterionConfigError {}

impl From<CriterionConfigError> for ErrorEnvelope {
    fn from(error: CriterionConfigError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            CriterionConfigError::InvertedBounds {
                criterion,
                min,
                max,
            } => envelope
                .with_metadata("criterion", criterion)
                .with_metadata("min", min)
                .with_metadata("max", max),
            CriterionConfigError::NonFiniteBound { criterion, bound }
            | CriterionConfigError::InvalidBoundFlag { criterion, bound } => envelope
                .with_metadata("criterion", criterion)
                .with_metadata("bound", bound),
            CriterionConfigError::EmptyAllowedValues => {
                envelope.with_metadata("criterion", "inArray")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_bounds_carry_metadata() {
        let envelope: ErrorEnvelope = CriterionConfigError::InvertedBounds {
            criterion: "hasLength",
            min: "5".to_string(),
            max: "2".to_string(),
        }
        .into();

        assert_eq!(envelope.code, ErrorCode::new("criteria", "inverted_bounds"));
        assert_eq!(envelope.metadata_value("min"), Some("5"));
        assert_eq!(envelope.metadata_value("max"), Some("2"));
        assert_eq!(
            envelope.message,
            "hasLength: min (5) must not be greater than max (2)"
        );
    }
}
