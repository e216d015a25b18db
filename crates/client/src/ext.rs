//! Normalization hooks for plain `reqwest` builders and responses.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tidy_core::{Normalizable, OutboundAdapter};

use crate::error::ClientError;

/// Adds a normalizing JSON body setter to [`reqwest::RequestBuilder`].
pub trait RequestBuilderExt: Sized {
    /// Normalize `body` with its type-level declaration, then encode it as
    /// the JSON request body.
    ///
    /// The caller's value is rewritten in place. If normalization fails the
    /// body is never encoded.
    fn normalized_json<T>(self, body: &mut T) -> Result<Self, ClientError>
    where
        T: Serialize + Normalizable;
}

impl RequestBuilderExt for reqwest::RequestBuilder {
    fn normalized_json<T>(self, body: &mut T) -> Result<Self, ClientError>
    where
        T: Serialize + Normalizable,
    {
        let bytes = OutboundAdapter::before_write(body, |value| {
            serde_json::to_vec(value).map_err(ClientError::from)
        })?;

        Ok(self.header(CONTENT_TYPE, "application/json").body(bytes))
    }
}

/// Check the status, decode the JSON body and normalize it with `T`'s
/// type-level declaration.
pub async fn read_normalized<T>(response: reqwest::Response) -> Result<T, ClientError>
where
    T: DeserializeOwned + Normalizable,
{
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    let body: T = serde_json::from_slice(&bytes)?;
    Ok(OutboundAdapter::after_read(body)?)
}

/// Return the response unchanged on success, or a
/// [`ClientError::ApiError`] with the status and body text.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        tracing::debug!(status = status.as_u16(), "Request rejected by server");
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
