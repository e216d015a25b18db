//! User registration: type-level declaration with default rules.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tidy_core::Normalize;

use crate::error::AppResult;
use crate::extract::Normalized;
use crate::response::DataResponse;

/// Payload for `POST /api/v1/users`.
///
/// `"  John  "` arrives as `"John"`, a blank email arrives as `null`, and a
/// blank name is rejected since the field cannot be absent.
#[derive(Debug, Clone, Deserialize, Serialize, Normalize)]
#[normalize]
pub struct CreateUser {
    pub name: String,
    pub email: Option<String>,
    pub age: Option<u32>,
}

/// POST /api/v1/users
pub async fn create_user(Normalized(input): Normalized<CreateUser>) -> AppResult<impl IntoResponse> {
    tracing::info!(
        name = %input.name,
        has_email = input.email.is_some(),
        "User registration received"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: input })))
}
