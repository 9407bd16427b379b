//! Rule-set schema: which parameters exist, their types, and their criteria.

use paramcheck_criteria::{Criterion, CriterionConfigError, CriterionSpec};
use paramcheck_domain::{ParameterName, ParameterType, PrimitiveError};
use paramcheck_shared::{ErrorCode, ErrorEnvelope};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Rule-file schema version understood by this crate.
pub const CURRENT_RULE_SET_VERSION: u32 = 1;

const fn default_version() -> u32 {
    CURRENT_RULE_SET_VERSION
}

/// Rule file as written on disk, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleSetConfig {
    /// Schema version; must equal [`CURRENT_RULE_SET_VERSION`].
    #[serde(default = "default_version")]
    pub version: u32,
    /// Declared parameters, in evaluation order.
    #[serde(default)]
    pub parameters: Vec<ParameterRuleConfig>,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_RULE_SET_VERSION,
            parameters: Vec::new(),
        }
    }
}

/// One declared parameter and its criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParameterRuleConfig {
    /// Canonical parameter name.
    pub name: String,
    /// Declared type (defaults to `string`).
    #[serde(default, rename = "type")]
    pub kind: ParameterType,
    /// Alternative names users may supply the value under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Criteria evaluated in order.
    #[serde(default)]
    pub criteria: Vec<CriterionSpec>,
}

impl RuleSetConfig {
    /// Validate the rule set and build its criteria.
    pub fn validate_and_normalize(self) -> Result<ValidatedRuleSet, RuleSetError> {
        self.validate_version()?;

        let mut seen = BTreeSet::new();
        let mut parameters = Vec::with_capacity(self.parameters.len());
        for (index, rule) in self.parameters.iter().enumerate() {
            let built = build_parameter_rule(index, rule)?;
            for name in std::iter::once(&built.name).chain(&built.aliases) {
                if !seen.insert(name.clone()) {
                    return Err(RuleSetError::DuplicateName {
                        name: name.to_string(),
                    });
                }
            }
            parameters.push(built);
        }

        Ok(ValidatedRuleSet {
            raw: self,
            parameters,
        })
    }

    const fn validate_version(&self) -> Result<(), RuleSetError> {
        if self.version != CURRENT_RULE_SET_VERSION {
            return Err(RuleSetError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_RULE_SET_VERSION,
            });
        }
        Ok(())
    }
}

fn build_parameter_rule(
    index: usize,
    rule: &ParameterRuleConfig,
) -> Result<ParameterRule, RuleSetError> {
    let name = ParameterName::parse(&rule.name)
        .map_err(|source| RuleSetError::InvalidParameterName { index, source })?;
    let aliases = rule
        .aliases
        .iter()
        .map(ParameterName::parse)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| RuleSetError::InvalidParameterName { index, source })?;

    let mut criteria = Vec::with_capacity(rule.criteria.len());
    for (criterion_index, spec) in rule.criteria.iter().enumerate() {
        let criterion = spec.build().map_err(|source| RuleSetError::InvalidCriterion {
            parameter: name.to_string(),
            index: criterion_index,
            source,
        })?;
        criteria.push(criterion);
    }

    Ok(ParameterRule {
        name,
        kind: rule.kind,
        aliases,
        criteria,
    })
}

/// Validated rule set with built criteria.
#[derive(Debug)]
pub struct ValidatedRuleSet {
    raw: RuleSetConfig,
    parameters: Vec<ParameterRule>,
}

impl ValidatedRuleSet {
    /// Declared parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterRule] {
        &self.parameters
    }

    /// Find the parameter a user-supplied name refers to (name or alias).
    #[must_use]
    pub fn resolve(&self, supplied_as: &str) -> Option<&ParameterRule> {
        self.parameters
            .iter()
            .find(|rule| rule.answers_to(supplied_as))
    }

    /// Total number of criteria across all parameters.
    #[must_use]
    pub fn criteria_count(&self) -> usize {
        self.parameters.iter().map(|rule| rule.criteria.len()).sum()
    }

    /// Borrow the rule file this set was built from.
    #[must_use]
    pub const fn as_config(&self) -> &RuleSetConfig {
        &self.raw
    }
}

/// A declared parameter with its built criteria.
#[derive(Debug)]
pub struct ParameterRule {
    name: ParameterName,
    kind: ParameterType,
    aliases: Vec<ParameterName>,
    criteria: Vec<Box<dyn Criterion>>,
}

impl ParameterRule {
    /// Canonical name.
    #[must_use]
    pub const fn name(&self) -> &ParameterName {
        &self.name
    }

    /// Declared type.
    #[must_use]
    pub const fn kind(&self) -> ParameterType {
        self.kind
    }

    /// Alternative names.
    #[must_use]
    pub fn aliases(&self) -> &[ParameterName] {
        &self.aliases
    }

    /// Criteria in evaluation order.
    #[must_use]
    pub fn criteria(&self) -> &[Box<dyn Criterion>] {
        &self.criteria
    }

    /// Returns true when `supplied_as` is the name or one of the aliases.
    #[must_use]
    pub fn answers_to(&self, supplied_as: &str) -> bool {
        self.name.as_str() == supplied_as
            || self.aliases.iter().any(|alias| alias.as_str() == supplied_as)
    }
}

/// Typed validation errors for rule sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    /// The rule-file version is not supported by this binary.
    UnsupportedVersion {
        /// Version found in the file.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
    /// A parameter name or alias is invalid.
    InvalidParameterName {
        /// Position of the parameter in the file.
        index: usize,
        /// Underlying name error.
        source: PrimitiveError,
    },
    /// A name or alias is declared more than once.
    DuplicateName {
        /// Repeated name.
        name: String,
    },
    /// A criterion failed to build.
    InvalidCriterion {
        /// Parameter the criterion belongs to.
        parameter: String,
        /// Position of the criterion in the parameter's list.
        index: usize,
        /// Underlying configuration error.
        source: CriterionConfigError,
    },
}

impl RuleSetError {
    fn error_code(&self) -> ErrorCode {
        let code = match self {
            Self::UnsupportedVersion { .. } => "unsupported_version",
            Self::InvalidParameterName { .. } => "invalid_parameter_name",
            Self::DuplicateName { .. } => "duplicate_name",
            Self::InvalidCriterion { .. } => "invalid_criterion",
        };
        ErrorCode::new("rules", code)
    }
}

impl fmt::Display for RuleSetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => write!(
                formatter,
                "unsupported rule-set version {found} (supported: {supported})"
            ),
            Self::InvalidParameterName { index, source } => {
                write!(formatter, "parameters[{index}]: {source}")
            },
            Self::DuplicateName { name } => {
                write!(formatter, "parameter name or alias `{name}` is declared twice")
            },
            Self::InvalidCriterion {
                parameter,
                index,
                source,
            } => write!(formatter, "parameter `{parameter}` criteria[{index}]: {source}"),
        }
    }
}

impl std::error::Error for RuleSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidParameterName { source, .. } => Some(source),
            Self::InvalidCriterion { source, .. } => Some(source),
            Self::UnsupportedVersion { .. } | Self::DuplicateName { .. } => None,
        }
    }
}

impl From<RuleSetError> for ErrorEnvelope {
    fn from(error: RuleSetError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            RuleSetError::UnsupportedVersion { found, supported } => envelope
                .with_metadata("found", found.to_string())
                .with_metadata("supported", supported.to_string()),
            RuleSetError::InvalidParameterName { index, .. } => {
                envelope.with_metadata("index", index.to_string())
            },
            RuleSetError::DuplicateName { name } => envelope.with_metadata("name", name),
            RuleSetError::InvalidCriterion {
                parameter,
                index,
                source,
            } => {
                let inner = Self::from(source);
                envelope
                    .with_metadata("parameter", parameter)
                    .with_metadata("index", index.to_string())
                    .with_metadata("cause", inner.code.to_string())
            },
        }
    }
}
