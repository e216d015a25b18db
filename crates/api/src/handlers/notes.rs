//! Notes: fields reached through an embedded parent, and a call-site
//! declaration overriding the type's.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tidy_core::{Normalize, Rules};

use crate::error::AppResult;
use crate::extract::{Normalized, NormalizedWith};
use crate::response::DataResponse;

/// Fields shared by every authored record. Not declared on its own.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Normalize)]
pub struct Authorship {
    pub author: Option<String>,
    pub source: Option<String>,
}

/// Payload for the `/api/v1/notes` endpoints.
#[derive(Debug, Clone, Deserialize, Serialize, Normalize)]
#[normalize]
pub struct CreateNote {
    pub title: String,
    pub body: Option<String>,
    pub pinned: Option<bool>,
    #[serde(flatten)]
    #[normalize(flatten)]
    pub authorship: Authorship,
}

/// POST /api/v1/notes
///
/// Uses the rules `CreateNote` declares.
pub async fn create_note(Normalized(input): Normalized<CreateNote>) -> AppResult<impl IntoResponse> {
    tracing::info!(title = %input.title, author = ?input.authorship.author, "Note received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: input })))
}

/// POST /api/v1/notes/collapsed
///
/// Same payload, but this endpoint also collapses whitespace runs.
pub async fn create_collapsed_note(
    NormalizedWith(input, _): NormalizedWith<CreateNote, Rules<true, true, true>>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(title = %input.title, "Collapsed note received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: input })))
}
