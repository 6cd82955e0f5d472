//! Logging utilities

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{SharedError, SharedResult};

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> SharedResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(config.level.trim().to_ascii_lowercase())
        .map_err(|e| SharedError::invalid("logging.level", e.to_string()))
}

/// Initialize the global subscriber. Writes to stderr so stdout stays
/// reserved for report output.
pub fn init_logger(config: &LoggingConfig) -> SharedResult<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };

    installed.map_err(|e| SharedError::Logger(e.to_string()))
}
