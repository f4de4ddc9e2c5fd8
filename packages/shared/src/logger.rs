//! Logging setup utilities for the wordgames binaries.

use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Log lines are written to stderr: stdout is reserved for the data the
/// binaries relay. Colors are only used when stderr is a terminal. The log
/// level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `crate_name` - The crate whose targets should be logged (e.g., "wordgames-client")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use wordgames_shared::logger::setup_logger;
///
/// setup_logger(env!("CARGO_PKG_NAME"), "info");
/// ```
pub fn setup_logger(crate_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(crate_name, default_log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

/// Build the filter directive used when `RUST_LOG` is not set.
fn default_directive(crate_name: &str, default_log_level: &str) -> String {
    format!("{}={}", crate_name.replace('-', "_"), default_log_level)
}
