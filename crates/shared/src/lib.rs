//! # paramcheck-shared
//!
//! Shared result types and error handling for the paramcheck workspace.
//!
//! Every fallible boundary outside criterion evaluation (rule files, runtime
//! environment, CLI input) reports failures as an [`ErrorEnvelope`]. Layer-local
//! error enums convert into it with a stable `namespace:code`.
//!
//! This crate only depends on external crates.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod result;

pub use errors::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use result::Result;

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
