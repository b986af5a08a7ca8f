//! JSON log output for criteria services.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

/// Filter used when `RUST_LOG` is unset, blank or unparseable.
pub const DEFAULT_FILTER: &str = "info";

/// Per-binary logging settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Reported once at startup so mixed log streams can be told apart.
    pub service: &'static str,
    pub version: &'static str,
    pub default_filter: String,
    /// Include the emitting module (`criteria_filter::pipeline`, ...) in each line.
    pub with_target: bool,
}

impl LogConfig {
    pub fn new(service: &'static str, version: &'static str) -> Self {
        Self {
            service,
            version,
            default_filter: DEFAULT_FILTER.to_string(),
            with_target: true,
        }
    }
}

/// Resolve the active filter: `raw` when it parses, `fallback` otherwise.
pub fn env_filter(raw: Option<&str>, fallback: &str) -> EnvFilter {
    raw.map(str::trim)
        .filter(|r| !r.is_empty())
        .and_then(|r| EnvFilter::try_new(r).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Install the global JSON subscriber.
///
/// Returns `false` when a subscriber was already installed; repeated calls
/// leave the first one in place.
pub fn init(config: &LogConfig) -> bool {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(raw.as_deref(), &config.default_filter))
        .json()
        .flatten_event(true)
        .with_timer(SystemTime)
        .with_target(config.with_target)
        .try_init()
        .is_ok();

    if installed {
        ::tracing::info!(service = config.service, version = config.version, "logging initialised");
    }
    installed
}
