//! Drives one "fetch" activation: validate the selection, call the API,
//! and push the rendered markup into a [`ResultsView`].

use vidsum_core::render::{render_error, render_header, render_results, CONNECTION_ERROR_HTML};

use crate::client::{ApiReply, VideosClient};

pub const NO_TOPIC_ALERT: &str = "請選擇一個主題！";

/// The display surface the controller writes to.
///
/// `show_header` and `show_results` replace the whole region each time.
pub trait ResultsView {
    fn alert(&mut self, message: &str);
    fn set_loading(&mut self, loading: bool);
    fn clear(&mut self);
    fn show_header(&mut self, html: &str);
    fn show_results(&mut self, html: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No topic was selected; nothing was requested.
    Aborted,
    Rendered { count: usize },
    ApiError { status: u16, message: String },
    ConnectionFailed,
}

pub struct Controller<V> {
    client: VideosClient,
    view: V,
}

impl<V: ResultsView> Controller<V> {
    pub fn new(client: VideosClient, view: V) -> Self {
        Self { client, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Runs one activation for the selected topic.
    ///
    /// Once loading starts, the view always leaves the loading state before
    /// this returns, whatever the outcome. Taking `&mut self` keeps a single
    /// controller from having two activations in flight.
    pub async fn activate(&mut self, topic: Option<&str>) -> Outcome {
        let Some(topic) = topic.filter(|t| !t.is_empty()) else {
            self.view.alert(NO_TOPIC_ALERT);
            return Outcome::Aborted;
        };

        self.view.set_loading(true);
        self.view.clear();

        let outcome = self.load(topic).await;

        self.view.set_loading(false);
        outcome
    }

    async fn load(&mut self, topic: &str) -> Outcome {
        match self.client.latest_videos(topic).await {
            Ok(ApiReply::Found(result)) => {
                self.view.show_header(&render_header(&result));
                self.view.show_results(&render_results(&result.data));
                Outcome::Rendered {
                    count: result.data.len(),
                }
            }
            Ok(ApiReply::Failed(failure)) => {
                let message = failure.display_message();
                tracing::info!(status = %failure.status, %message, "api returned an error");
                self.view.show_results(&render_error(&message));
                Outcome::ApiError {
                    status: failure.status.as_u16(),
                    message,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, topic, "failed to fetch latest videos");
                self.view.show_results(CONNECTION_ERROR_HTML);
                Outcome::ConnectionFailed
            }
        }
    }
}
