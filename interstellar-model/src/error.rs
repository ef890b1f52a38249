use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Failure while turning a model into a response body.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("failed to serialize response model: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
