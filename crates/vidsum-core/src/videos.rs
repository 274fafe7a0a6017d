use serde::{Deserialize, Serialize};

/// One video digest card: what the video is, where to watch it, and the
/// bullet-point summary shown under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub title: String,
    pub link: String,
    /// `YYYY-MM-DD` as produced by the topic catalogue.
    pub upload_date: String,
    /// Bullet points in display order. May be empty, never absent.
    pub summary: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

/// Success envelope for `GET /api/latest-videos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResult {
    /// The requested topic, echoed back as received.
    pub topic: String,
    /// Server-local date in `zh-TW` short form, computed per request.
    pub date: String,
    pub data: Vec<VideoSummary>,
}

/// Body of every non-2xx API response.
///
/// `error` and `message` always carry the same text so that readers of
/// either key get the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            error: text.clone(),
            message: text,
        }
    }
}
