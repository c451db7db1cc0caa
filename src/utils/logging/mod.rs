//! Logging setup
//!
//! Library code only emits `tracing` events. Binaries call [`init_logging`]
//! once at startup to install a subscriber.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Build the filter for a logging config; `RUST_LOG` wins when it is set
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed, which happens in
/// tests and when a host embeds the library.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = build_env_filter(config);

    let result = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init()
    };

    result.is_ok()
}
