//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod logging;

use clap::{Parser, Subcommand};
use commands::{ValidateCommandInput, run_check, run_rules_check, run_rules_schema, run_validate};
use error::{CliError, ExitCode};
use format::{OutputArgs, OutputMode};
use paramcheck_config::{ENV_RULES, RuntimeEnv};
use paramcheck_shared::ErrorEnvelope;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "paramcheck",
    version,
    about = "Validate parameter values against declarative criteria",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate supplied values against a rule file.
    Validate {
        /// Rule file (JSON/TOML/YAML). Defaults to `PARAMCHECK_RULES`.
        #[arg(long)]
        rules: Option<PathBuf>,
        /// Supply a value as `NAME=VALUE` (repeatable).
        #[arg(long = "set", value_name = "NAME=VALUE")]
        assignments: Vec<String>,
        /// JSON object of name/value pairs, applied before `--set` values.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Evaluate one criterion against one value.
    Check {
        /// Criterion as JSON, e.g. `{"kind":"inRange","min":0,"max":9}`.
        #[arg(long)]
        criterion: String,
        /// Declared type of the value (string, integer, float, boolean).
        #[arg(long = "type", default_value = "string")]
        kind: String,
        /// Raw value to check.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Rule-file commands.
    Rules {
        #[command(subcommand)]
        command: RulesCommands,
    },
}

#[derive(Debug, Subcommand)]
enum RulesCommands {
    /// Load and validate a rule file.
    Check {
        /// Rule file (JSON/TOML/YAML). Defaults to `PARAMCHECK_RULES`.
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Print the rule-file JSON schema.
    Schema,
}

pub(crate) struct CliOutput {
    stdout: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let env = match RuntimeEnv::from_std_env() {
        Ok(env) => env,
        Err(error) => return exit_with_error(&CliError::from(ErrorEnvelope::from(error))),
    };
    if let Err(error) = logging::init(&env) {
        return exit_with_error(&error);
    }
    let mode = OutputMode::resolve(&cli.output, env.output);

    match run(&cli.command, mode, &env) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    tracing::debug!(exit_code = error.exit_code().as_u8(), "command failed");
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(command: &Commands, mode: OutputMode, env: &RuntimeEnv) -> Result<CliOutput, CliError> {
    match command {
        Commands::Validate {
            rules,
            assignments,
            input,
        } => {
            let rules = resolve_rules_path(rules.as_deref(), env)?;
            run_validate(
                mode,
                &ValidateCommandInput {
                    rules,
                    assignments,
                    input_file: input.as_deref(),
                },
            )
        },
        Commands::Check {
            criterion,
            kind,
            value,
        } => run_check(mode, criterion, kind, value),
        Commands::Rules { command } => match command {
            RulesCommands::Check { rules } => {
                run_rules_check(mode, resolve_rules_path(rules.as_deref(), env)?)
            },
            RulesCommands::Schema => run_rules_schema(mode),
        },
    }
}

/// `--rules` wins over `PARAMCHECK_RULES`; one of them is required.
fn resolve_rules_path<'a>(
    flag: Option<&'a Path>,
    env: &'a RuntimeEnv,
) -> Result<&'a Path, CliError> {
    flag.or(env.rules_path.as_deref()).ok_or_else(|| {
        CliError::InvalidInput(format!("no rule file given; pass --rules or set {ENV_RULES}"))
    })
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
