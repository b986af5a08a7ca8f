use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use criteria_filter::{search_with, SearchResponse};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_products))
}

/// `GET /products?query[orderBy]=price&query[order]=desc&...`
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let raw = dto::raw_params(&pairs);

    match search_with(services.catalog_snapshot(), &raw, services.options()) {
        Ok(data) => (StatusCode::OK, Json(SearchResponse::success(data))).into_response(),
        Err(e) => errors::search_error_to_response(&e),
    }
}
