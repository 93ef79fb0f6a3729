//! Tracing configuration for the pickers-demo binary.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger
//! from setting its own subscriber.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use pickers_dioxus::config::LoggingConfig;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber from `LoggingConfig`.
///
/// Filters via `RUST_LOG` (defaulting to the configured level) and
/// writes to the configured log file, falling back to stderr.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let log_file = config
        .log_file
        .as_ref()
        .and_then(|path| File::create(path).ok());

    if let Some(file) = log_file {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    } else {
        let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}
