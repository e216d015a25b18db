//! Profile preview: normalization on the way out instead of on the way in.

use axum::Json;
use serde::{Deserialize, Serialize};
use tidy_core::Normalize;

use crate::response::{DataResponse, NormalizedJson};

#[derive(Debug, Clone, Deserialize, Serialize, Normalize)]
#[normalize(collapse_spaces = true)]
pub struct Profile {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub followers: u64,
}

/// POST /api/v1/profiles/preview
///
/// Accepts the profile as sent and returns it the way it would be stored.
pub async fn preview_profile(Json(profile): Json<Profile>) -> NormalizedJson<DataResponse<Profile>> {
    tracing::debug!(followers = profile.followers, "Previewing profile");

    NormalizedJson(DataResponse { data: profile })
}
