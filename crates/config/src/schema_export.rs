//! JSON Schema export for rule files.

use crate::RuleSetConfig;
use schemars::{Schema, schema_for};

/// JSON Schema describing the rule-file format.
#[must_use]
pub fn rule_set_schema() -> Schema {
    schema_for!(RuleSetConfig)
}
