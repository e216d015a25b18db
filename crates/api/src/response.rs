//! Shared response types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope per project conventions.
//! [`NormalizedJson`] is the outbound counterpart of the normalizing
//! extractors: it rewrites the payload's string fields right before encoding.

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tidy_core::{FieldVisitor, Normalizable, NormalizeError, OutboundAdapter, RuleSet};

use crate::error::AppError;

/// Standard `{ "data": T }` response envelope.
///
/// Forwards the payload's declaration and fields, so wrapping a declared type
/// in the envelope keeps it normalizable.
///
/// # Example
///
/// ```ignore
/// Ok(NormalizedJson(DataResponse { data: profile }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize + Normalizable> Normalizable for DataResponse<T> {
    const DECLARED_RULES: Option<RuleSet> = T::DECLARED_RULES;

    fn visit_string_fields(&mut self, visitor: &mut FieldVisitor<'_>) -> Result<(), NormalizeError> {
        self.data.visit_string_fields(visitor)
    }
}

/// JSON response whose payload is normalized with its type-level declaration
/// before it is serialized. Undeclared payloads are encoded as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedJson<T>(pub T);

impl<T> IntoResponse for NormalizedJson<T>
where
    T: Serialize + Normalizable,
{
    fn into_response(self) -> Response {
        let Self(mut payload) = self;
        let encoded = OutboundAdapter::before_write(&mut payload, |value| {
            serde_json::to_vec(value).map_err(AppError::from)
        });

        match encoded {
            Ok(bytes) => (
                [(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                bytes,
            )
                .into_response(),
            Err(err) => err.into_response(),
        }
    }
}
