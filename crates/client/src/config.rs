use crate::error::ClientError;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL requests are resolved against (default: `http://127.0.0.1:3000`).
    pub base_url: String,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default                 |
    /// |---------------------|-------------------------|
    /// | `API_BASE_URL`      | `http://127.0.0.1:3000` |
    /// | `HTTP_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let defaults = Self::default();

        let base_url = lookup("API_BASE_URL").unwrap_or(defaults.base_url);

        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| ClientError::InvalidConfig {
                var: "HTTP_TIMEOUT_SECS",
                value: raw,
            })?,
            None => defaults.timeout_secs,
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".into(),
            timeout_secs: 10,
        }
    }
}
