//! Environment-driven server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use criteria_filter::{PipelineOptions, ZeroPagination};

use crate::source::{JsonFileSource, ProductSource, RemoteSource, StaticSource};

pub const ENV_BIND_ADDR: &str = "CRITERIA_BIND_ADDR";
pub const ENV_PRODUCTS_PATH: &str = "CRITERIA_PRODUCTS_PATH";
pub const ENV_SOURCE_URL: &str = "CRITERIA_SOURCE_URL";
pub const ENV_FETCH_LIMIT: &str = "CRITERIA_FETCH_LIMIT";
pub const ENV_ZERO_PAGINATION: &str = "CRITERIA_ZERO_PAGINATION";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_FETCH_LIMIT: usize = 15;

/// Where the catalog is loaded from. A remote URL wins over a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Remote { url: String, limit: usize },
    File(PathBuf),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub source: SourceConfig,
    pub pipeline: PipelineOptions,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup(ENV_BIND_ADDR)
            .and_then(|raw| {
                raw.parse().ok().or_else(|| {
                    tracing::warn!(value = %raw, "invalid {ENV_BIND_ADDR}; using default");
                    None
                })
            })
            .unwrap_or_else(default_bind_addr);

        let limit = lookup(ENV_FETCH_LIMIT)
            .and_then(|raw| {
                raw.trim().parse().ok().or_else(|| {
                    tracing::warn!(value = %raw, "invalid {ENV_FETCH_LIMIT}; using default");
                    None
                })
            })
            .unwrap_or(DEFAULT_FETCH_LIMIT);

        let source = match (lookup(ENV_SOURCE_URL), lookup(ENV_PRODUCTS_PATH)) {
            (Some(url), _) if !url.trim().is_empty() => SourceConfig::Remote { url, limit },
            (_, Some(path)) if !path.trim().is_empty() => SourceConfig::File(PathBuf::from(path)),
            _ => {
                tracing::warn!("no product source configured; catalog will be empty");
                SourceConfig::Empty
            }
        };

        let zero_pagination = lookup(ENV_ZERO_PAGINATION)
            .and_then(|raw| {
                ZeroPagination::parse(&raw).or_else(|| {
                    tracing::warn!(value = %raw, "invalid {ENV_ZERO_PAGINATION}; using default");
                    None
                })
            })
            .unwrap_or_default();

        Self {
            bind_addr,
            source,
            pipeline: PipelineOptions { zero_pagination },
        }
    }

    pub fn product_source(&self) -> Box<dyn ProductSource> {
        match &self.source {
            SourceConfig::Remote { url, limit } => Box::new(RemoteSource::new(url.clone(), *limit)),
            SourceConfig::File(path) => Box::new(JsonFileSource::new(path.clone())),
            SourceConfig::Empty => Box::new(StaticSource::default()),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
