//! Logging setup shared by criteria binaries.

pub use self::tracing::{DEFAULT_FILTER, LogConfig};

/// Initialize process-wide tracing for `config.service`.
///
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init(config: &LogConfig) -> bool {
    tracing::init(config)
}

/// Tracing configuration (filters, formatter).
pub mod tracing;
