use axum::{extract::Query, Json};
use interstellar_model::{JsonResponse, Response, ViewModel};
use serde_json::Value;

use super::MessageQuery;
use crate::error::ApiError;

/// Accepts a view model reported by the client and responds with it, using
/// the worst field status to pick the status code.
pub async fn submit(
    Query(query): Query<MessageQuery>,
    Json(view_model): Json<ViewModel<Value>>,
) -> Result<JsonResponse, ApiError> {
    tracing::info!(
        fields = view_model.validated_fields().len(),
        overall = %view_model.overall_status(),
        "responding with view model"
    );
    Ok(Response::view_model(&view_model, query.message())?)
}
