//! Logging for the dashboard.
//!
//! Library code logs through the `log` facade. When file logging is enabled
//! those records go to a file through `fern`; the terminal itself is owned by
//! the UI, so nothing is ever written to stdout. [`Logger`] additionally keeps
//! a bounded in-memory history that the logs dialog displays.

use crate::config::LoggingConfig;
use crate::constants::MAX_LOG_ENTRIES;
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared in-memory diagnostic log
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Add a log entry, dropping the oldest once the buffer is full
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f");
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == MAX_LOG_ENTRIES {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        match self.logs.lock() {
            Ok(logs) => logs.iter().rev().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve where the log file lives
pub fn log_file_path(config: &LoggingConfig) -> Result<PathBuf> {
    if let Some(path) = &config.file {
        return Ok(path.clone());
    }
    dirs::cache_dir()
        .map(|dir| dir.join("dashterm").join("dashterm.log"))
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
}

/// Route `log` records to the configured file.
///
/// Returns the file path when logging was installed, `None` when disabled.
pub fn init_file_logging(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = log_file_path(config)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .level_for("dashterm", log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("A global logger is already installed")?;

    Ok(Some(path))
}
