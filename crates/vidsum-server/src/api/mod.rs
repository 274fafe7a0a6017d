mod page;
mod videos;

use std::any::Any;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use vidsum_core::ErrorBody;

use crate::middleware::{request_id, REQUEST_ID_HEADER};

pub const MISSING_TOPIC_MESSAGE: &str = "請提供查詢主題 (topic)！";
pub const NOT_FOUND_MESSAGE: &str = "查無相關最新影片。";
pub const INTERNAL_ERROR_MESSAGE: &str = "後端處理資料時發生錯誤。";

/// Failure outcomes of the JSON API, each with a fixed status and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    MissingTopic,
    NotFound,
    Internal,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::MissingTopic => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::MissingTopic => MISSING_TOPIC_MESSAGE,
            ApiError::NotFound => NOT_FOUND_MESSAGE,
            ApiError::Internal => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.message()))).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

/// Converts a caught handler panic into the generic 500 JSON body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "request handler panicked");
    ApiError::Internal.into_response()
}

/// Wraps a router in the layers every route shares.
///
/// Layer order, outermost first: request id, trace span, CORS, panic boundary.
fn with_common_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(request_id))
            .layer(TraceLayer::new_for_http())
            .layer(build_cors())
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

pub fn build_app() -> Router {
    let routes = Router::new()
        .route("/", get(page::index))
        .route("/app.js", get(page::script))
        .route("/styles.css", get(page::stylesheet))
        .route("/health", get(health))
        .route("/api/latest-videos", get(videos::latest_videos));

    with_common_layers(routes)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}
