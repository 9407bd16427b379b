//! Output format helpers for CLI commands.

use clap::{Args, ValueEnum};
use paramcheck_config::OutputPreference;

/// Output format choices for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text output.
    Text,
    /// Machine-friendly JSON output.
    Json,
    /// Line-delimited JSON (NDJSON) output.
    Ndjson,
}

impl From<OutputPreference> for OutputFormat {
    fn from(preference: OutputPreference) -> Self {
        match preference {
            OutputPreference::Text => Self::Text,
            OutputPreference::Json => Self::Json,
            OutputPreference::Ndjson => Self::Ndjson,
        }
    }
}

/// Output-related CLI flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format for command responses (defaults to `PARAMCHECK_OUTPUT`, then text).
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Output mode derived from CLI flags and the environment.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub format: OutputFormat,
}

impl OutputMode {
    /// The flag wins over the environment; text is the fallback.
    #[must_use]
    pub fn resolve(args: &OutputArgs, env_default: Option<OutputPreference>) -> Self {
        let format = args
            .output
            .or_else(|| env_default.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Text);
        Self { format }
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Returns true when NDJSON output is requested.
    #[must_use]
    pub const fn is_ndjson(self) -> bool {
        matches!(self.format, OutputFormat::Ndjson)
    }
}
