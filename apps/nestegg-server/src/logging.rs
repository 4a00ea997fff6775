use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Filter directive for the given `-v` count, if any.
#[must_use]
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Resolves the active filter: `-v` flags, then `RUST_LOG`, then the configured level.
///
/// # Errors
/// Returns an error if the chosen directive does not parse.
pub fn build_filter(config: &LoggingConfig, verbose: u8) -> anyhow::Result<EnvFilter> {
    if let Some(directive) = verbosity_directive(verbose) {
        return EnvFilter::try_new(directive).context("invalid verbosity directive");
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid logging.level: {}", config.level)),
    }
}

/// Installs the global subscriber. Output goes to stderr so stdout stays clean
/// for `check` and `--print-config`.
///
/// # Errors
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let filter = build_filter(config, verbose)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}
