//! # paramcheck-domain
//!
//! Domain model for parameter validation:
//!
//! - **Primitives** - `ParameterName`, `ParameterType`
//! - **Parameters** - `Parameter`, `ParameterSet`, `NumericValue`
//! - **Literals** - syntax checks for integer and decimal input
//! - **Outcome** - `ValidationResult`
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use paramcheck_shared::shared_crate_version;

pub mod literals;
pub mod outcome;
pub mod parameter;
pub mod primitives;

pub use literals::{is_decimal_literal, is_integer_literal};
pub use outcome::ValidationResult;
pub use parameter::{NumericValue, Parameter, ParameterError, ParameterSet, UserValue};
pub use primitives::{ParameterName, ParameterType, PrimitiveError};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
