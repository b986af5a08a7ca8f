//! Product sources: where the catalog comes from at startup.
//!
//! The catalog is loaded once and then served read-only; sources are never
//! consulted per request.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use criteria_core::Record;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid product json from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("remote fetch failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Something that can produce the product list.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Vec<Record>, SourceError>;
}

/// Fixed, in-memory records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }

    async fn load(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.clone())
    }
}

/// A JSON file holding an array of flat records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn load(&self) -> Result<Vec<Record>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| SourceError::Decode {
            origin: self.describe(),
            source,
        })
    }
}

/// Product shape served by fake-store style catalog APIs.
#[derive(Debug, Deserialize)]
struct RemoteProduct {
    id: i64,
    title: String,
    #[serde(default)]
    description: String,
    price: f64,
}

impl From<RemoteProduct> for Record {
    fn from(p: RemoteProduct) -> Self {
        Record::new()
            .with("code", p.id)
            .with("name", p.title)
            .with("description", p.description)
            .with("price", p.price)
    }
}

/// Remote product list fetched over HTTP, capped at `limit` entries.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    url: String,
    limit: usize,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, limit: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            limit,
        }
    }
}

#[async_trait]
impl ProductSource for RemoteSource {
    fn describe(&self) -> String {
        format!("remote {}", self.url)
    }

    async fn load(&self) -> Result<Vec<Record>, SourceError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let products: Vec<RemoteProduct> = serde_json::from_slice(&body).map_err(|source| SourceError::Decode {
            origin: self.describe(),
            source,
        })?;

        Ok(products.into_iter().take(self.limit).map(Record::from).collect())
    }
}
