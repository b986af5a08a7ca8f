//! HTTP API: configuration, catalog sources, and the axum application.

pub mod app;
pub mod config;
pub mod source;
