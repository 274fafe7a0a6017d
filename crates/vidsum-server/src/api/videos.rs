//! `GET /api/latest-videos?topic=`: digest lookup by topic.

use axum::{
    extract::{rejection::QueryRejection, Query},
    Extension, Json,
};
use serde::Deserialize;
use vidsum_core::{
    dates::{local_today, zh_tw_date},
    TopicResult,
};

use crate::middleware::RequestId;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub(super) struct LatestVideosQuery {
    pub topic: Option<String>,
}

pub(super) async fn latest_videos(
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<LatestVideosQuery>, QueryRejection>,
) -> Result<Json<TopicResult>, ApiError> {
    // A query string that is present but not a single `topic` value (e.g. a
    // repeated key) names no catalogue entry.
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!(request_id = %req_id.0, error = %rejection, "unreadable topic query");
        ApiError::NotFound
    })?;

    let Some(topic) = query.topic.filter(|t| !t.is_empty()) else {
        tracing::warn!(request_id = %req_id.0, "latest-videos request without topic");
        return Err(ApiError::MissingTopic);
    };

    tracing::info!(request_id = %req_id.0, topic = %topic, "received topic request");

    let data = vidsum_core::lookup_today(&topic);
    if data.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(TopicResult {
        topic,
        date: zh_tw_date(local_today()),
        data,
    }))
}
