use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers;

// Validation payloads are small form models
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Build the axum router. All routes live under `/api`.
pub fn build_router() -> Router {
    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/statuses", get(handlers::statuses::list))
        .route("/view-models", post(handlers::view_models::submit))
        .route("/responses/{kind}", post(handlers::responses::respond))
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
        .layer(TraceLayer::new_for_http());

    Router::new().nest("/api", api)
}

async fn health_handler() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "OK")
}

async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::not_found(format!("no route for {}", uri.path()))
}
