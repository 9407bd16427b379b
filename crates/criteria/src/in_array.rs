//! Membership in a fixed list of allowed values.

use crate::{Criterion, CriterionConfigError, required_value};
use paramcheck_domain::{Parameter, ParameterSet, ValidationResult};

/// Valid iff the value equals one of the allowed entries.
///
/// Empty entries are dropped at construction, so the empty value never
/// matches. With `case_insensitive` both sides are lowercased with
/// `str::to_lowercase` before comparison. That is a per-character mapping,
/// not full case folding: `"STRASSE"` does not match `"straße"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InArray {
    allowed: Vec<Box<str>>,
    folded: Vec<Box<str>>,
    case_insensitive: bool,
}

impl InArray {
    /// Rule name.
    pub const NAME: &'static str = "inArray";

    /// Create a membership criterion from at least one non-empty entry.
    pub fn new<I, S>(allowed: I, case_insensitive: bool) -> Result<Self, CriterionConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let allowed: Vec<Box<str>> = allowed
            .into_iter()
            .map(Into::into)
            .filter(|entry: &Box<str>| !entry.is_empty())
            .collect();
        if allowed.is_empty() {
            return Err(CriterionConfigError::EmptyAllowedValues);
        }
        let folded = if case_insensitive {
            allowed.iter().map(|entry| entry.to_lowercase().into()).collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            allowed,
            folded,
            case_insensitive,
        })
    }

    /// Allowed entries in configuration order.
    #[must_use]
    pub fn allowed(&self) -> &[Box<str>] {
        &self.allowed
    }

    fn contains(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        if self.case_insensitive {
            let value = value.to_lowercase();
            self.folded.iter().any(|entry| **entry == *value)
        } else {
            self.allowed.iter().any(|entry| &**entry == value)
        }
    }
}

impl Criterion for InArray {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, parameter: &Parameter, _siblings: &ParameterSet) -> ValidationResult {
        let raw = match required_value(parameter) {
            Ok(raw) => raw,
            Err(result) => return result,
        };

        ValidationResult::check(self.contains(raw), || {
            format!(
                "value {raw:?} of `{}` is not one of: {}",
                parameter.name(),
                self.allowed.join(", ")
            )
        })
    }
}
