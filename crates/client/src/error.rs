use tidy_core::NormalizeError;

/// Errors from the normalizing HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A request body could not be encoded, or a response body decoded.
    #[error("JSON error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A body could not take its normalized form. Nothing was sent.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidConfig {
        var: &'static str,
        value: String,
    },

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_status_and_body() {
        let err = ClientError::ApiError {
            status: 503,
            body: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error (503): Service Unavailable");
    }

    #[test]
    fn normalize_error_is_transparent() {
        let err = ClientError::from(NormalizeError::Unrepresentable {
            owner: "Signup",
            field: "name",
        });
        assert_eq!(
            err.to_string(),
            "Field `name` of `Signup` cannot hold an absent value after normalization"
        );
    }
}
