//! Pass/fail outcome of a single criterion evaluation.

use serde::Serialize;

/// Verdict plus optional explanation. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<Box<str>>,
}

impl ValidationResult {
    /// A passing result without a message.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing result with an explanation.
    pub fn invalid(message: impl Into<Box<str>>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Pass when `condition` holds, otherwise fail with the lazily built message.
    pub fn check<F>(condition: bool, message: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if condition {
            Self::valid()
        } else {
            Self::invalid(message())
        }
    }

    /// Returns true when the value satisfied the criterion.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Explanation attached to a failing result.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
