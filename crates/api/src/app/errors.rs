use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use criteria_core::CriteriaError;
use criteria_filter::SearchResponse;

/// Map a search failure to an error envelope with a matching HTTP status.
pub fn search_error_to_response(err: &CriteriaError) -> axum::response::Response {
    let status = match err {
        CriteriaError::EmptyData => StatusCode::SERVICE_UNAVAILABLE,
        CriteriaError::EmptyParameters => StatusCode::BAD_REQUEST,
    };
    tracing::warn!(code = err.code(), "search request failed");
    (status, Json(SearchResponse::error(err))).into_response()
}
