//! reqwest-backed implementation of [`DashboardApi`].

use super::{ApiError, Article, DashboardApi, Event, NewTask, Task, TaskId, WeatherSnapshot};
use crate::config::ApiConfig;
use crate::constants::{
    ADD_TASK_PATH, BODY_PREVIEW_LIMIT, COMPLETE_TASK_PATH, DELETE_TASK_PATH, EVENTS_PATH, NEWS_PATH, TASKS_PATH,
    WEATHER_PATH,
};
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;

impl ApiError {
    fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_decode() {
            Self::Shape {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            let message = if err.is_timeout() {
                format!("request timed out: {}", err)
            } else {
                err.to_string()
            };
            Self::Transport {
                url: url.to_string(),
                message,
            }
        }
    }
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    let mut out: String = trimmed.chars().take(BODY_PREVIEW_LIMIT).collect();
    if trimmed.chars().count() > BODY_PREVIEW_LIMIT {
        out.push_str("...");
    }
    out
}

/// Client for the dashboard backend.
#[derive(Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client rooted at `base_url`. `None` disables the request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        Self::new(&config.base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ApiError::from_reqwest(err, &url))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|err| ApiError::from_reqwest(err, &url))?;

        if !status.is_success() {
            return Err(ApiError::Response {
                url,
                status: status.as_u16(),
                body: preview_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|err| ApiError::Shape {
            message: format!("{} | body={}", err, preview_body(&body)),
            url,
        })
    }

    /// `path` followed by `id` as a single, percent-encoded path segment.
    fn task_url(&self, path: &str, id: &TaskId) -> Result<String, ApiError> {
        let base = self.url(path);
        let mut url = reqwest::Url::parse(&base).map_err(|err| ApiError::Transport {
            url: base.clone(),
            message: err.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport {
                url: base.clone(),
                message: "base URL cannot take a path".to_string(),
            })?
            .push(id.as_str());
        Ok(url.into())
    }

    /// Fire a body-less request and only check the status.
    async fn send_empty(&self, method: Method, url: String) -> Result<(), ApiError> {
        log::debug!("{} {}", method, url);

        let resp = self
            .http
            .request(method, &url)
            .send()
            .await
            .map_err(|err| ApiError::from_reqwest(err, &url))?;
        ensure_success(resp, url).await
    }
}

async fn ensure_success(resp: reqwest::Response, url: String) -> Result<(), ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Response {
        url,
        status: status.as_u16(),
        body: preview_body(&body),
    })
}

#[async_trait]
impl DashboardApi for HttpApi {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json(TASKS_PATH).await
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json(EVENTS_PATH).await
    }

    async fn fetch_weather(&self) -> Result<WeatherSnapshot, ApiError> {
        self.get_json(WEATHER_PATH).await
    }

    async fn fetch_news(&self) -> Result<Vec<Article>, ApiError> {
        self.get_json(NEWS_PATH).await
    }

    async fn complete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let url = self.task_url(COMPLETE_TASK_PATH, id)?;
        self.send_empty(Method::POST, url).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let url = self.task_url(DELETE_TASK_PATH, id)?;
        self.send_empty(Method::DELETE, url).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        let url = self.url(ADD_TASK_PATH);
        log::debug!("POST {} ({:?})", url, task.content);

        let resp = self
            .http
            .post(&url)
            .json(task)
            .send()
            .await
            .map_err(|err| ApiError::from_reqwest(err, &url))?;
        ensure_success(resp, url).await
    }
}
