pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                 register (POST, type-level rules)
/// /search                search (POST, type-level rules with collapsing)
/// /notes                 create (POST, fields reached through a parent)
/// /notes/collapsed       create (POST, call-site rules override the type's)
/// /profiles/preview      preview (POST, normalized on the way out)
/// ```
pub fn api_routes() -> Router {
    Router::new()
        .route("/users", post(handlers::users::create_user))
        .route("/search", post(handlers::search::search))
        .route("/notes", post(handlers::notes::create_note))
        .route("/notes/collapsed", post(handlers::notes::create_collapsed_note))
        .route("/profiles/preview", post(handlers::profiles::preview_profile))
}
