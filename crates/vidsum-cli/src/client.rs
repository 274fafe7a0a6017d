//! HTTP client for the `/api/latest-videos` endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use vidsum_core::TopicResult;

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// A non-2xx answer from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: StatusCode,
    /// The body's `message` field, if the body was JSON and carried one.
    pub message: Option<String>,
}

impl ApiFailure {
    /// Text to show the user: the body message, else the status reason
    /// phrase, else the bare status code.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| self.status.as_u16().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply {
    Found(TopicResult),
    Failed(ApiFailure),
}

#[derive(Debug, Deserialize)]
struct FailureBody {
    message: Option<String>,
}

pub struct VideosClient {
    client: Client,
    base_url: Url,
}

impl VideosClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(concat!("vidsum-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Exactly one trailing slash, so `join` appends rather than replaces
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    fn latest_videos_url(&self, topic: &str) -> Result<Url, ClientError> {
        let mut url =
            self.base_url
                .join("api/latest-videos")
                .map_err(|e| ClientError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                    reason: e.to_string(),
                })?;
        url.query_pairs_mut().append_pair("topic", topic);
        Ok(url)
    }

    /// Fetches the digests for `topic`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] if the server cannot be reached or the body
    ///   cannot be read.
    /// - [`ClientError::Deserialize`] if a 2xx body is not a valid envelope.
    pub async fn latest_videos(&self, topic: &str) -> Result<ApiReply, ClientError> {
        let url = self.latest_videos_url(topic)?;
        tracing::debug!(%url, "requesting latest videos");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let result: TopicResult =
                serde_json::from_slice(&body).map_err(|e| ClientError::Deserialize {
                    context: format!("latest-videos(topic={topic})"),
                    source: e,
                })?;
            return Ok(ApiReply::Found(result));
        }

        let message = serde_json::from_slice::<FailureBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty());

        Ok(ApiReply::Failed(ApiFailure { status, message }))
    }
}
