//! Client-side string normalization for outgoing request bodies and
//! incoming response bodies, on top of [`reqwest`].

pub mod client;
pub mod config;
pub mod error;
pub mod ext;

pub use client::NormalizingClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use ext::{read_normalized, RequestBuilderExt};
