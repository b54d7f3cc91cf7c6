//! Tracing setup shared by the library consumers and the `measure` binary.

use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging at INFO; `RUST_LOG` takes precedence.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with the level from a loaded configuration
pub fn init_from_config(config: &LoggingConfig) {
    init_with_level(&config.level)
}

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (trace, debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
/// Output goes to stderr so command output on stdout stays machine-readable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A host application may already own the global subscriber
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .ok();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    // Shared by every test in the binary; only the first call installs it
    tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("trace"))
        .try_init()
        .ok();
}
