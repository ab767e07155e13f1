//! Wire models served by the dashboard backend.

use crate::utils::datetime;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque, stable task identifier.
///
/// The backend sends integers; Todoist itself uses strings. Both are accepted
/// and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Unsigned(u64),
            Signed(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// A single entry of the task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(alias = "task", alias = "content")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// 1 (normal) to 4 (urgent); display only.
    pub priority: u8,
    #[serde(default, deserialize_with = "deserialize_due")]
    pub due: Option<NaiveDate>,
}

fn deserialize_due<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDue {
        Text(String),
        Object { date: String },
    }

    let raw = Option::<RawDue>::deserialize(deserializer)?;
    let text = match raw {
        None => return Ok(None),
        Some(RawDue::Text(s)) | Some(RawDue::Object { date: s }) => s,
    };

    datetime::parse_due(&text)
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("invalid due date '{}'", text)))
}

/// Payload for creating a task.
///
/// Ids are assigned by the backend, so the placeholder fields it validates
/// are sent as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub content: String,
    pub priority: u8,
}

impl Serialize for NewTask {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            id: u64,
            task: &'a str,
            priority: u8,
            project_id: u64,
        }

        Body {
            id: 0,
            task: &self.content,
            priority: self.priority,
            project_id: 0,
        }
        .serialize(serializer)
    }
}

/// A calendar entry shown by the notes widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub event_name: String,
    pub event_date: String,
    pub description: String,
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub date: String,
    pub text_content: String,
    pub link: String,
}

/// Current conditions plus clothing suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub todays_suggestion: String,
    pub tomorrows_suggestion: String,
}

impl WeatherSnapshot {
    pub fn unit_or_default(&self) -> &str {
        self.unit.as_deref().unwrap_or("°C")
    }
}
