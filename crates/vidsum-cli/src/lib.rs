//! Client side of the video digest: fetches a topic from the server and
//! renders the result into a view.

pub mod client;
pub mod controller;
pub mod error;
pub mod view;

pub use client::{ApiFailure, ApiReply, VideosClient};
pub use controller::{Controller, Outcome, ResultsView, NO_TOPIC_ALERT};
pub use error::ClientError;
pub use view::DocumentView;
