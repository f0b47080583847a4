use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Style class the panel colors the entry with.
    pub fn class(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Model of the on-page scrolling log panel: a bounded list of timestamped,
/// level-tagged lines. When full, the oldest line is dropped so the newest
/// is always present and last, which is what keeps the panel pinned to the
/// latest entry.
#[derive(Clone, Debug)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, now: DateTime<Local>, level: LogLevel, message: &str) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            timestamp: now.format("%H:%M:%S").to_string(),
            level,
            message: message.to_string(),
        });
    }

    /// Runs a UI action and logs its outcome. A failing action becomes an
    /// error-styled line; it never propagates out of the panel.
    pub fn report<F>(&mut self, now: DateTime<Local>, action: F)
    where
        F: FnOnce() -> Result<String, AppError>,
    {
        match action() {
            Ok(message) => self.append(now, LogLevel::Success, &message),
            Err(err) => self.append(now, LogLevel::Error, &err.to_string()),
        }
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
