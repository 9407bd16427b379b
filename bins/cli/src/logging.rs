//! Stderr tracing subscriber.

use crate::error::CliError;
use paramcheck_config::{ENV_LOG, LogFormat, RuntimeEnv};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Logs never go to stdout.
pub fn init(env: &RuntimeEnv) -> Result<(), CliError> {
    let filter = match env.log_filter.as_deref() {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|error| CliError::InvalidInput(format!("{ENV_LOG}: {error}")))?,
        None => EnvFilter::new(DEFAULT_FILTER),
    };
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match env.log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    installed.map_err(|error| CliError::Internal(format!("failed to install logger: {error}")))
}
