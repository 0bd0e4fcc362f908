use thiserror::Error;

/// Errors that can occur while searching the image provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// The search URL could not be assembled from the configured base URL.
    #[error("Invalid search URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// No API key was configured.
    #[error("Giphy API key is not configured")]
    MissingApiKey,

    /// Blank queries are rejected before any network I/O.
    #[error("Search query is empty")]
    EmptyQuery,

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("Request to image provider failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("Image provider returned HTTP {status}")]
    Status { status: u16 },

    /// The body is not JSON or does not match the expected shape.
    #[error("Malformed provider response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but a record is unusable.
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

impl ProviderError {
    /// Short label for logs and the status line.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::ClientBuild { .. } => "client_build",
            ProviderError::InvalidUrl { .. } => "invalid_url",
            ProviderError::MissingApiKey => "missing_api_key",
            ProviderError::EmptyQuery => "empty_query",
            ProviderError::Transport { .. } => "transport",
            ProviderError::Status { .. } => "status",
            ProviderError::Decode { .. } => "decode",
            ProviderError::InvalidRecord { .. } => "invalid_record",
        }
    }
}
