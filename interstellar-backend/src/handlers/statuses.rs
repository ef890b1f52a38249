use axum::Json;
use interstellar_model::ValidationStatus;

/// Lists the labels a client may send or receive in `validatedFields[].status`.
pub async fn list() -> Json<Vec<&'static str>> {
    Json(
        ValidationStatus::ALL
            .iter()
            .map(ValidationStatus::label)
            .collect(),
    )
}
