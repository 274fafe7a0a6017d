//! Shared model, topic catalogue, and markup rendering for the video digest.

pub mod app_config;
pub mod config;
pub mod dates;
pub mod render;
pub mod topics;
pub mod videos;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use topics::{is_known_topic, lookup, lookup_today, TOPIC_KEYS};
pub use videos::{ErrorBody, TopicResult, VideoSummary};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
