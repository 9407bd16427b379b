//! # paramcheck-config
//!
//! Rule-set schema, validation, and loading, plus the runtime environment
//! read by the CLI. This crate depends on `criteria`, `domain` and `shared`.

/// Runtime environment variable parsing.
pub mod env;
/// Rule-set loading helpers (file + format detection).
pub mod load;
/// Rule-set schema types and validation.
pub mod schema;
/// JSON Schema export for rule files.
pub mod schema_export;

pub use env::{
    ENV_LOG, ENV_LOG_FORMAT, ENV_OUTPUT, ENV_RULES, EnvParseError, LogFormat, OutputPreference,
    RuntimeEnv,
};
pub use load::{
    RuleFileFormat, load_rule_set_from_path, parse_rule_set, parse_rule_set_json,
    parse_rule_set_toml, parse_rule_set_yaml, to_pretty_json,
};
pub use schema::{
    CURRENT_RULE_SET_VERSION, ParameterRule, ParameterRuleConfig, RuleSetConfig, RuleSetError,
    ValidatedRuleSet,
};
pub use schema_export::rule_set_schema;

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramcheck_domain::domain_crate_version;
    use paramcheck_shared::shared_crate_version;

    #[test]
    fn config_crate_compiles() {
        assert!(!config_crate_version().is_empty());
        assert_eq!(config_crate_version(), domain_crate_version());
        assert_eq!(config_crate_version(), shared_crate_version());
    }
}
