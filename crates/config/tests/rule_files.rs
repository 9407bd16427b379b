//! Rule-file fixtures load identically in every supported format.

use paramcheck_config::{ValidatedRuleSet, load_rule_set_from_path, to_pretty_json};
use paramcheck_shared::{ErrorCode, ErrorEnvelope};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn summary(rule_set: &ValidatedRuleSet) -> Vec<(String, String, Vec<&'static str>)> {
    rule_set
        .parameters()
        .iter()
        .map(|rule| {
            (
                rule.name().to_string(),
                rule.kind().to_string(),
                rule.criteria().iter().map(|criterion| criterion.name()).collect(),
            )
        })
        .collect()
}

#[test]
fn all_formats_describe_the_same_rules() -> Result<(), ErrorEnvelope> {
    let toml = load_rule_set_from_path(&fixture("rules.toml"))?;
    let json = load_rule_set_from_path(&fixture("rules.json"))?;
    let yaml = load_rule_set_from_path(&fixture("rules.yaml"))?;

    assert_eq!(
        summary(&toml),
        vec![
            (
                "limit".to_string(),
                "integer".to_string(),
                vec!["isInteger", "inRange"]
            ),
            ("sort".to_string(), "string".to_string(), vec!["inArray"]),
            ("query".to_string(), "string".to_string(), vec!["hasLength"]),
        ]
    );
    assert_eq!(summary(&toml), summary(&json));
    assert_eq!(summary(&toml), summary(&yaml));
    assert_eq!(to_pretty_json(toml.as_config())?, to_pretty_json(json.as_config())?);
    Ok(())
}

#[test]
fn aliases_resolve_to_their_parameter() -> Result<(), ErrorEnvelope> {
    let rules = load_rule_set_from_path(&fixture("rules.toml"))?;
    let resolved = rules.resolve("max").map(|rule| rule.name().as_str());
    assert_eq!(resolved, Some("limit"));
    Ok(())
}

#[test]
fn duplicate_alias_is_rejected_with_path() {
    let Err(error) = load_rule_set_from_path(&fixture("duplicate_alias.toml")) else {
        unreachable!("duplicate alias must be rejected");
    };
    assert_eq!(error.code, ErrorCode::new("rules", "duplicate_name"));
    assert_eq!(error.metadata_value("name"), Some("size"));
    assert!(
        error
            .metadata_value("path")
            .is_some_and(|path| path.ends_with("duplicate_alias.toml"))
    );
}

#[test]
fn inverted_range_is_a_configuration_error() {
    let Err(error) = load_rule_set_from_path(&fixture("inverted_range.json")) else {
        unreachable!("inverted range must be rejected");
    };
    assert_eq!(error.code, ErrorCode::new("rules", "invalid_criterion"));
    assert_eq!(error.metadata_value("parameter"), Some("page"));
    assert_eq!(error.metadata_value("cause"), Some("criteria:inverted_bounds"));
}
