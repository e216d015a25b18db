use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tidy_core::NormalizeError;

/// Application-level error type for HTTP handlers and extractors.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The body could not be decoded into the target type.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// A decoded or outgoing value could not take its normalized form.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// A response payload could not be encoded.
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidBody(rejection) => {
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }

            // A required field that normalized to absent is the payload's
            // fault; an unwritable field is ours.
            AppError::Normalize(err @ NormalizeError::Unrepresentable { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NORMALIZATION_FAILED",
                err.to_string(),
            ),
            AppError::Normalize(err @ NormalizeError::Inaccessible { .. }) => {
                tracing::error!(
                    error = %err,
                    owner = err.owner(),
                    field = err.field(),
                    "Normalization target not writable"
                );
                internal()
            }

            AppError::Encode(err) => {
                tracing::error!(error = %err, "Response encoding failed");
                internal()
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
