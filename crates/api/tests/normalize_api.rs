//! End-to-end tests for request and response normalization through the
//! full router.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};

// ---------------------------------------------------------------------------
// Test: type-level default rules trim and null blank values
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_user_trims_and_nulls_blank_fields() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/users",
        r#"{"name":"  John  ","email":"   ","age":41}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "John");
    assert!(json["data"]["email"].is_null());
    assert_eq!(json["data"]["age"], 41);
}

#[tokio::test]
async fn create_user_keeps_inner_whitespace_without_collapsing() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/users", r#"{"name":" hello    world "}"#).await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "hello    world");
}

// ---------------------------------------------------------------------------
// Test: a required field that normalizes to absent is rejected with 422
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_user_with_blank_name_returns_422() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/users", r#"{"name":"    "}"#).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NORMALIZATION_FAILED");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("`name`"), "message should name the field: {message}");
    assert!(message.contains("`CreateUser`"), "message should name the type: {message}");
}

// ---------------------------------------------------------------------------
// Test: decoding failures are reported before normalization runs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_400_invalid_body() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/users", r#"{"name":"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_BODY");
}

#[tokio::test]
async fn missing_required_field_returns_422_invalid_body() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/users", r#"{"email":"a@b.com"}"#).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_BODY");
}

// ---------------------------------------------------------------------------
// Test: collapse_spaces declared on the type
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_collapses_whitespace_runs() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/search",
        r#"{"query":"  hello    world  ","category":"   "}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["query"], "hello world");
    assert!(json["data"]["category"].is_null());
    assert_eq!(json["data"]["limit"], 20);
}

#[tokio::test]
async fn search_with_blank_query_returns_400() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/search", r#"{"query":" \t "}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: fields of the embedded parent are normalized too
// ---------------------------------------------------------------------------

const NOTE: &str =
    r#"{"title":"  Groceries ","body":"  milk   eggs ","author":"  ann  ","source":"  "}"#;

#[tokio::test]
async fn create_note_normalizes_parent_fields() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/notes", NOTE).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Groceries");
    assert_eq!(json["data"]["body"], "milk   eggs");
    assert_eq!(json["data"]["author"], "ann");
    assert!(json["data"]["source"].is_null());
}

// ---------------------------------------------------------------------------
// Test: call-site rules take precedence over the type's declaration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn call_site_rules_override_type_declaration() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/notes/collapsed", NOTE).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    // `CreateNote` does not collapse; the endpoint's rules do.
    assert_eq!(json["data"]["body"], "milk eggs");
    assert_eq!(json["data"]["title"], "Groceries");
    assert_eq!(json["data"]["author"], "ann");
}

// ---------------------------------------------------------------------------
// Test: response payloads are normalized before encoding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profile_preview_normalizes_response() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/profiles/preview",
        r#"{"display_name":"  Ada    Lovelace ","bio":"   ","followers":3}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    let json = body_json(response).await;
    assert_eq!(json["data"]["display_name"], "Ada Lovelace");
    assert!(json["data"]["bio"].is_null());
    assert_eq!(json["data"]["followers"], 3);
}
