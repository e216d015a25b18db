//! Tidy API server library.
//!
//! Hooks `tidy_core` normalization into axum: extractors that normalize a
//! JSON body after it is decoded, a response type that normalizes before it
//! is encoded, and the error mapping shared by both. The router, config and
//! demo handlers are exposed so integration tests and the binary entrypoint
//! build the same app.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
