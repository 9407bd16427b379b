//! # paramcheck-app
//!
//! Application use cases: validating a batch of user-supplied values against
//! a rule set, and checking a single value against one criterion.
//! This crate depends on `config`, `criteria`, `domain`, and `shared`.

pub mod check_criterion;
pub mod report;
pub mod validate_parameters;

/// Returns the app crate version.
#[must_use]
pub const fn app_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub use check_criterion::{CheckCriterionInput, check_criterion};
pub use report::{
    CriterionOutcome, ParameterReport, ParameterStatus, UnknownInput, ValidationReport,
};
pub use validate_parameters::{SuppliedValue, validate_parameters};
