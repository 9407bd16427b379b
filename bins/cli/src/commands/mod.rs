//! CLI command handlers.

pub mod check;
pub mod rules;
pub mod validate;

pub use check::run_check;
pub use rules::{run_rules_check, run_rules_schema};
pub use validate::{ValidateCommandInput, run_validate};
