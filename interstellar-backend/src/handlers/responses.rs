use axum::{
    extract::{Path, Query},
    Json,
};
use interstellar_model::{JsonResponse, Response, ValidationStatus};
use serde_json::Value;

use super::MessageQuery;
use crate::error::ApiError;

/// Maps the `{kind}` path segment to a status. `success` is an alias for `valid`.
pub fn parse_kind(kind: &str) -> Result<ValidationStatus, ApiError> {
    match kind {
        "success" => Ok(ValidationStatus::Valid),
        other => other.parse().map_err(|_| {
            ApiError::bad_request(format!(
                "unknown response kind '{other}', expected one of success, valid, warning, error"
            ))
        }),
    }
}

/// Echoes an arbitrary JSON model through the response builder entry point named by `kind`.
pub async fn respond(
    Path(kind): Path<String>,
    Query(query): Query<MessageQuery>,
    Json(model): Json<Value>,
) -> Result<JsonResponse, ApiError> {
    let status = parse_kind(&kind)?;
    Ok(Response::for_status(&model, status, query.message())?)
}
