use axum::{
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
};
use serde::Serialize;

use crate::error::ResponseError;
use crate::status::ValidationStatus;
use crate::view_model::ViewModel;

/// A serialized JSON body paired with the status code it should be sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonResponse {
    status: StatusCode,
    body: String,
}

impl JsonResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            self.body,
        )
            .into_response()
    }
}

/// Creates responses for RESTful validation requests.
///
/// Every entry point serializes `model` as-is; only the status code differs.
/// `message` is not part of the body, it is attached to the log event.
pub struct Response;

impl Response {
    pub fn success<M>(model: &M, message: impl AsRef<str>) -> Result<JsonResponse, ResponseError>
    where
        M: Serialize + ?Sized,
    {
        Self::create(model, StatusCode::OK, message.as_ref())
    }

    /// Same status code as [`Response::success`]; the caller marks the result as "ok with caveats".
    pub fn warning<M>(model: &M, message: impl AsRef<str>) -> Result<JsonResponse, ResponseError>
    where
        M: Serialize + ?Sized,
    {
        Self::create(model, StatusCode::OK, message.as_ref())
    }

    pub fn error<M>(model: &M, message: impl AsRef<str>) -> Result<JsonResponse, ResponseError>
    where
        M: Serialize + ?Sized,
    {
        Self::create(model, StatusCode::BAD_REQUEST, message.as_ref())
    }

    /// Picks the entry point matching `status`.
    pub fn for_status<M>(
        model: &M,
        status: ValidationStatus,
        message: impl AsRef<str>,
    ) -> Result<JsonResponse, ResponseError>
    where
        M: Serialize + ?Sized,
    {
        match status {
            ValidationStatus::Valid => Self::success(model, message),
            ValidationStatus::Warning => Self::warning(model, message),
            ValidationStatus::Error => Self::error(model, message),
        }
    }

    /// Responds with the view model, choosing the entry point from its overall status.
    pub fn view_model<T>(
        view_model: &ViewModel<T>,
        message: impl AsRef<str>,
    ) -> Result<JsonResponse, ResponseError>
    where
        T: Serialize,
    {
        Self::for_status(view_model, view_model.overall_status(), message)
    }

    fn create<M>(
        model: &M,
        status: StatusCode,
        message: &str,
    ) -> Result<JsonResponse, ResponseError>
    where
        M: Serialize + ?Sized,
    {
        let body = serde_json::to_string(model).map_err(|e| {
            tracing::error!(
                %e,
                status = status.as_u16(),
                response_message = message,
                "failed to serialize response model"
            );
            ResponseError::from(e)
        })?;
        tracing::debug!(
            status = status.as_u16(),
            response_message = message,
            body_len = body.len(),
            "built validation response"
        );
        Ok(JsonResponse { status, body })
    }
}
