//! Client-side contract against the dashboard backend.
//!
//! This module defines the interface every backend client must implement,
//! along with the error taxonomy shared by all widgets.

use async_trait::async_trait;

pub mod http;
pub mod models;

pub use http::HttpApi;
pub use models::{Article, Event, NewTask, Task, TaskId, WeatherSnapshot};

/// Errors produced while talking to the backend.
///
/// All three kinds collapse to the same `Failed` state in a widget; the
/// distinction only matters for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Network unreachable, connection reset, timeout.
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// The backend answered with a non-2xx status.
    #[error("unexpected status {status} from {url}: {body}")]
    Response { url: String, status: u16, body: String },

    /// The body was not the JSON shape we expected.
    #[error("malformed response from {url}: {message}")]
    Shape { url: String, message: String },
}

impl ApiError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Response { url, .. } | Self::Shape { url, .. } => url,
        }
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Backend seam used by the dashboard shell.
///
/// Every call is independent: no ordering is guaranteed between them and the
/// shell never waits on one to issue another.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /api/tasks`
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// `GET /api/events`
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError>;

    /// `GET /api/weather`
    async fn fetch_weather(&self) -> Result<WeatherSnapshot, ApiError>;

    /// `GET /api/news`
    async fn fetch_news(&self) -> Result<Vec<Article>, ApiError>;

    /// `POST /api/todoist/remove/{id}`; the response body is ignored.
    async fn complete_task(&self, id: &TaskId) -> Result<(), ApiError>;

    /// `DELETE /api/todoist/delete/{id}`; the response body is ignored.
    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError>;

    /// `POST /api/todoist/add`
    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError>;
}
