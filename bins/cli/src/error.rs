use paramcheck_shared::{ErrorEnvelope, ErrorKind};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Ok = 0,
    Internal = 1,
    InvalidInput = 2,
    Io = 3,
    ValidationFailed = 4,
}

impl ExitCode {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Debug)]
pub enum CliError {
    InvalidInput(String),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Envelope(ErrorEnvelope),
    Internal(String),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidInput(_) => ExitCode::InvalidInput,
            Self::Io(_) => ExitCode::Io,
            Self::Serialization(_) | Self::Internal(_) => ExitCode::Internal,
            Self::Envelope(error) => envelope_exit_code(error),
        }
    }
}

fn envelope_exit_code(error: &ErrorEnvelope) -> ExitCode {
    match (error.kind, error.code.code()) {
        (
            _,
            "rules_file_not_found" | "rules_file_permission_denied" | "rules_file_io" | "io"
            | "not_found" | "permission_denied",
        ) => ExitCode::Io,
        (ErrorKind::Expected, _) => ExitCode::InvalidInput,
        (ErrorKind::Invariant | ErrorKind::Unexpected, _) => ExitCode::Internal,
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(formatter, "invalid input: {message}"),
            Self::Io(error) => write!(formatter, "io error: {error}"),
            Self::Serialization(error) => write!(formatter, "serialization error: {error}"),
            Self::Envelope(error) => {
                write!(formatter, "{}: {}", error.code, error.message)?;
                if let Some(path) = error.metadata_value("path") {
                    write!(formatter, " ({path})")?;
                }
                Ok(())
            },
            Self::Internal(message) => write!(formatter, "internal error: {message}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}

impl From<ErrorEnvelope> for CliError {
    fn from(error: ErrorEnvelope) -> Self {
        Self::Envelope(error)
    }
}
