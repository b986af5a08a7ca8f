use anyhow::Context;

use criteria_api::app::{build_app, services};
use criteria_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    criteria_observability::init(&criteria_observability::LogConfig::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ));

    let config = ApiConfig::from_env();
    let source = config.product_source();
    let services = services::build_services(source.as_ref(), config.pipeline)
        .await
        .with_context(|| format!("failed to load product catalog from {}", source.describe()))?;

    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
