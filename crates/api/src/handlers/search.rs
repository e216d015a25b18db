//! Search: type-level declaration that also collapses whitespace runs.

use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tidy_core::Normalize;

use crate::error::{AppError, AppResult};
use crate::extract::Normalized;
use crate::response::DataResponse;

/// Payload for `POST /api/v1/search`.
#[derive(Debug, Clone, Deserialize, Serialize, Normalize)]
#[normalize(collapse_spaces = true)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

/// Default page size when `limit` is omitted.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// What the search would run with after normalization.
#[derive(Debug, Serialize)]
pub struct SearchPlan {
    pub query: String,
    pub category: Option<String>,
    pub limit: u32,
}

/// POST /api/v1/search
///
/// A query that normalizes to nothing is rejected.
pub async fn search(Normalized(input): Normalized<SearchRequest>) -> AppResult<impl IntoResponse> {
    let query = input
        .query
        .ok_or_else(|| AppError::BadRequest("Search query must not be blank".into()))?;

    let plan = SearchPlan {
        query,
        category: input.category,
        limit: input.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
    };
    tracing::debug!(query = %plan.query, limit = plan.limit, "Search planned");

    Ok(Json(DataResponse { data: plan }))
}
