//! JSON client that normalizes what it sends and what it receives.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tidy_core::Normalizable;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::ext::{ensure_success, read_normalized, RequestBuilderExt};

/// HTTP client bound to one base URL.
///
/// Request bodies go through the outbound adapter before encoding; response
/// bodies through it after decoding. Types without a declaration pass
/// through both directions untouched.
#[derive(Debug, Clone)]
pub struct NormalizingClient {
    client: reqwest::Client,
    base_url: String,
}

impl NormalizingClient {
    /// Create a client for `base_url`, e.g. `http://host:3000/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build a client with the configured base URL and timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST {path}` with a normalized JSON body; the response is decoded
    /// and normalized.
    pub async fn post_json<B, R>(&self, path: &str, body: &mut B) -> Result<R, ClientError>
    where
        B: Serialize + Normalizable,
        R: DeserializeOwned + Normalizable,
    {
        self.exchange(Method::POST, path, body).await
    }

    /// `PUT {path}` with a normalized JSON body; the response is decoded
    /// and normalized.
    pub async fn put_json<B, R>(&self, path: &str, body: &mut B) -> Result<R, ClientError>
    where
        B: Serialize + Normalizable,
        R: DeserializeOwned + Normalizable,
    {
        self.exchange(Method::PUT, path, body).await
    }

    /// Send a normalized JSON body and only check the status.
    pub async fn send_json<B>(&self, method: Method, path: &str, body: &mut B) -> Result<(), ClientError>
    where
        B: Serialize + Normalizable,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, "Sending normalized body");

        let response = self
            .client
            .request(method, url)
            .normalized_json(body)?
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    /// `GET {path}`; the response is decoded and normalized.
    pub async fn get_json<R>(&self, path: &str) -> Result<R, ClientError>
    where
        R: DeserializeOwned + Normalizable,
    {
        let url = self.url(path);
        tracing::debug!(%url, "Fetching");

        let response = self.client.get(url).send().await?;
        read_normalized(response).await
    }

    // ---- private helpers ----

    async fn exchange<B, R>(&self, method: Method, path: &str, body: &mut B) -> Result<R, ClientError>
    where
        B: Serialize + Normalizable,
        R: DeserializeOwned + Normalizable,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, "Sending normalized body");

        let response = self
            .client
            .request(method, url)
            .normalized_json(body)?
            .send()
            .await?;

        read_normalized(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
