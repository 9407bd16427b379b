//! Rule-file loading helpers (file + format detection).
//!
//! Parsing and validation both surface user-facing errors as typed
//! `ErrorEnvelope`s; a loaded rule set is always validated.

use crate::{RuleSetConfig, ValidatedRuleSet};
use paramcheck_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::fmt;
use std::path::Path;

/// Supported rule-file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileFormat {
    /// `.json` (also used when the path has no extension).
    Json,
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
}

impl RuleFileFormat {
    /// Pick the format from a path's extension.
    pub fn detect(path: &Path) -> Result<Self, ErrorEnvelope> {
        let ext = path
            .extension()
            .and_then(|value| value.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            None | Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some(other) => Err(ErrorEnvelope::expected(
                ErrorCode::new("config", "unsupported_format"),
                "unsupported rule file format; use .json, .toml, .yaml or .yml",
            )
            .with_metadata("extension", other.to_string())),
        }
    }

    /// Lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for RuleFileFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Load and validate a rule file, detecting its format from the extension.
pub fn load_rule_set_from_path(path: &Path) -> Result<ValidatedRuleSet, ErrorEnvelope> {
    let format = RuleFileFormat::detect(path)?;
    let text = read_rule_file(path)?;
    let validated = parse_rule_set(&text, format)
        .map_err(|error| error.with_metadata("path", path.to_string_lossy().to_string()))?;
    tracing::debug!(
        path = %path.display(),
        format = %format,
        parameters = validated.parameters().len(),
        criteria = validated.criteria_count(),
        "loaded rule set"
    );
    Ok(validated)
}

/// Parse and validate rule-file text in the given format.
pub fn parse_rule_set(
    input: &str,
    format: RuleFileFormat,
) -> Result<ValidatedRuleSet, ErrorEnvelope> {
    let config = parse_rule_set_unvalidated(input, format)?;
    config.validate_and_normalize().map_err(ErrorEnvelope::from)
}

/// Parse and validate a JSON rule set.
pub fn parse_rule_set_json(input: &str) -> Result<ValidatedRuleSet, ErrorEnvelope> {
    parse_rule_set(input, RuleFileFormat::Json)
}

/// Parse and validate a TOML rule set.
pub fn parse_rule_set_toml(input: &str) -> Result<ValidatedRuleSet, ErrorEnvelope> {
    parse_rule_set(input, RuleFileFormat::Toml)
}

/// Parse and validate a YAML rule set.
pub fn parse_rule_set_yaml(input: &str) -> Result<ValidatedRuleSet, ErrorEnvelope> {
    parse_rule_set(input, RuleFileFormat::Yaml)
}

/// Serialize a rule set as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &RuleSetConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::internal(),
            format!("failed to serialize rule set: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    output.push('\n');
    Ok(output)
}

fn parse_rule_set_unvalidated(
    input: &str,
    format: RuleFileFormat,
) -> Result<RuleSetConfig, ErrorEnvelope> {
    let parsed = match format {
        RuleFileFormat::Json => serde_json::from_str(input).map_err(|error| error.to_string()),
        RuleFileFormat::Toml => toml::from_str(input).map_err(|error| error.to_string()),
        RuleFileFormat::Yaml => serde_yaml_ng::from_str(input).map_err(|error| error.to_string()),
    };
    parsed.map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", format!("invalid_{format}")),
            format!("invalid rule set {}: {error}", format.as_str().to_uppercase()),
        )
        .with_metadata("format", format.as_str())
    })
}

fn read_rule_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "rules_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "rules_file_permission_denied")
            },
            _ => ErrorCode::new("config", "rules_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read rule file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}
