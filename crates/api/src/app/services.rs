use std::sync::Arc;

use criteria_core::Record;
use criteria_filter::PipelineOptions;

use crate::source::{ProductSource, SourceError};

/// Shared, read-only state for request handlers.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: Arc<[Record]>,
    options: PipelineOptions,
}

impl AppServices {
    pub fn new(catalog: Vec<Record>, options: PipelineOptions) -> Self {
        Self {
            catalog: catalog.into(),
            options,
        }
    }

    /// A private copy of the catalog for one pipeline run.
    pub fn catalog_snapshot(&self) -> Vec<Record> {
        self.catalog.to_vec()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn options(&self) -> PipelineOptions {
        self.options
    }
}

/// Load the catalog once from `source`.
pub async fn build_services(source: &dyn ProductSource, options: PipelineOptions) -> Result<AppServices, SourceError> {
    let origin = source.describe();
    let services = AppServices::new(source.load().await?, options);
    tracing::info!(%origin, products = services.catalog_len(), "product catalog loaded");
    Ok(services)
}
