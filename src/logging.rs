//! Diagnostic logging setup
//!
//! Diagnostics always go to stderr so stdout carries nothing but
//! timestamps. The level comes from `-v` alone; the environment is not
//! consulted.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;
use crate::errors::{Result, TickError};

/// Map the `-v` count to a level
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(verbose: u8, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .parse_lossy("");

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| TickError::Logging(e.to_string()))
}
