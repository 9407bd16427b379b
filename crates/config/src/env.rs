//! Runtime environment variables read by the CLI.
//!
//! Parsing is strict: a variable that is present but empty, or that holds an
//! unknown choice, fails fast instead of falling back to a default.

use paramcheck_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Env var: default rule-file path.
pub const ENV_RULES: &str = "PARAMCHECK_RULES";
/// Env var: default output format (`text`, `json`, `ndjson`).
pub const ENV_OUTPUT: &str = "PARAMCHECK_OUTPUT";
/// Env var: log filter directives (`EnvFilter` syntax).
pub const ENV_LOG: &str = "PARAMCHECK_LOG";
/// Env var: log line format (`text`, `json`).
pub const ENV_LOG_FORMAT: &str = "PARAMCHECK_LOG_FORMAT";

const KNOWN_VARS: [&str; 4] = [ENV_RULES, ENV_OUTPUT, ENV_LOG, ENV_LOG_FORMAT];

/// Output format requested through the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPreference {
    /// Human-readable text.
    Text,
    /// Pretty JSON document.
    Json,
    /// One JSON object per line.
    Ndjson,
}

impl OutputPreference {
    const CHOICES: &'static str = "text, json, ndjson";

    fn parse(var: &'static str, value: &str) -> Result<Self, EnvParseError> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "ndjson" => Ok(Self::Ndjson),
            _ => Err(EnvParseError::InvalidChoice {
                var,
                value: value.to_owned(),
                expected: Self::CHOICES,
            }),
        }
    }
}

/// Log line format for the stderr subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    const CHOICES: &'static str = "text, json";

    fn parse(var: &'static str, value: &str) -> Result<Self, EnvParseError> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(EnvParseError::InvalidChoice {
                var,
                value: value.to_owned(),
                expected: Self::CHOICES,
            }),
        }
    }
}

/// Parsed runtime environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeEnv {
    /// Rule file used when `--rules` is not given.
    pub rules_path: Option<PathBuf>,
    /// Output format used when `--output` is not given.
    pub output: Option<OutputPreference>,
    /// Log filter directives.
    pub log_filter: Option<Box<str>>,
    /// Log line format.
    pub log_format: LogFormat,
}

impl RuntimeEnv {
    /// Parse from an explicit map (tests and embedding callers).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        let rules_path = parse_optional_trimmed_string(map, ENV_RULES)?
            .map(|value| PathBuf::from(value.as_ref()));
        let output = parse_optional_trimmed_string(map, ENV_OUTPUT)?
            .map(|value| OutputPreference::parse(ENV_OUTPUT, &value))
            .transpose()?;
        let log_filter = parse_optional_trimmed_string(map, ENV_LOG)?;
        let log_format = parse_optional_trimmed_string(map, ENV_LOG_FORMAT)?
            .map(|value| LogFormat::parse(ENV_LOG_FORMAT, &value))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            rules_path,
            output,
            log_filter,
            log_format,
        })
    }

    /// Parse from the process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in KNOWN_VARS {
            if let Some(value) = std::env::var_os(name) {
                map.insert(name.to_string(), value.to_string_lossy().into_owned());
            }
        }
        Self::from_map(&map)
    }
}

/// Env parsing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// An env var held a value outside its fixed set of choices.
    InvalidChoice {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
        /// Accepted values, comma separated.
        expected: &'static str,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidChoice { .. } => ErrorCode::new("config", "invalid_env_enum"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidChoice {
                var,
                value,
                expected,
            } => write!(formatter, "{var} must be one of {expected} (got {value:?})"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidChoice { var, value, .. } => envelope
                .with_metadata("env_var", var)
                .with_metadata("value", value),
        }
    }
}

fn parse_optional_trimmed_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Box<str>>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    Ok(Some(trimmed.to_owned().into_boxed_str()))
}
