//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the loaded catalog and pipeline options shared by handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query-string mapping into the raw parameter shape
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: services::AppServices) -> Router {
    let services = Arc::new(services);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
