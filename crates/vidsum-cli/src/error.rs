use thiserror::Error;

/// Errors returned by [`crate::VideosClient`].
///
/// Every variant is a transport-level failure from the caller's point of
/// view. Non-2xx API responses are not errors; they arrive as
/// [`crate::ApiReply::Failed`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A 2xx response body did not match the expected envelope.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
