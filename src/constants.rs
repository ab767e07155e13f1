//! Constants used throughout the application
//!
//! This module centralizes endpoint paths, UI text, and other constant values
//! to improve maintainability and consistency.

// Backend endpoints
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const TASKS_PATH: &str = "/api/tasks";
pub const COMPLETE_TASK_PATH: &str = "/api/todoist/remove";
pub const DELETE_TASK_PATH: &str = "/api/todoist/delete";
pub const ADD_TASK_PATH: &str = "/api/todoist/add";
pub const EVENTS_PATH: &str = "/api/events";
pub const WEATHER_PATH: &str = "/api/weather";
pub const NEWS_PATH: &str = "/api/news";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "DASHTERM_API_URL";

// Widget titles
pub const TITLE_TASKS: &str = "Tasks";
pub const TITLE_NOTES: &str = "Notes";
pub const TITLE_WEATHER: &str = "Weather";
pub const TITLE_NEWS: &str = "News";

// Placeholder shown while loading and after a failed fetch
pub const PLACEHOLDER_LOADING: &str = "Loading...";

// Success Messages
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created";

// Error Messages
pub const ERROR_TASK_COMPLETION_FAILED: &str = "❌ Failed to complete task, change reverted";
pub const ERROR_TASK_DELETE_FAILED: &str = "❌ Failed to delete task, task restored";
pub const ERROR_TASK_CREATE_FAILED: &str = "❌ Failed to create task";

// UI Messages
pub const STATUS_HINTS: &str = "Tab: focus • r: refresh • R: refresh all • t: theme • G: logs • q: quit";
pub const TASKS_HINTS: &str = "Space: complete • d: delete • a: add";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Diagnostic Logs - Press 'Esc' or 'G' to close";
pub const DIALOG_TITLE_NEW_TASK: &str = "📝 New Task";

// Limits
/// Maximum characters of a response body kept in an error message
pub const BODY_PREVIEW_LIMIT: usize = 512;
/// Maximum entries kept by the in-memory diagnostic logger
pub const MAX_LOG_ENTRIES: usize = 500;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const MAX_AUTO_REFRESH_MINUTES: u64 = 1440;
pub const NEWS_PREVIEW_MIN_CHARS: usize = 20;
pub const NEWS_PREVIEW_MAX_CHARS: usize = 2000;
