//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured level so a single process can be
//! turned up without touching the rest of the environment.

use anyhow::anyhow;
use rh_shared::config::LogFormat;
use rh_shared::LoggingConfig;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.level)?),
    }
}

/// Install the global subscriber on stdout. Fails if one is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    init_tracing_with_writer(config, std::io::stdout)
}

/// Same as [`init_tracing`], writing events to `writer` instead. Command-line
/// tools pass `std::io::stderr` to keep stdout for their output.
pub fn init_tracing_with_writer<W>(config: &LoggingConfig, writer: W) -> anyhow::Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(writer)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
