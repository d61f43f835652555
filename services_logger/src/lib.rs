//! # Logger Service
//!
//! Structured logging for the polling services.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! Entries are values kept in a bounded [`LogBuffer`] that the owner drains
//! or inspects; nothing is written to a console behind the caller's back.

use poll_types::TimerId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Timer the entry is about (if any)
    pub source: Option<TimerId>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            source: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the source timer
    pub fn with_source(mut self, source: TimerId) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Looks up a field value by key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Bounded in-memory log
///
/// Entries below `min_level` are discarded on arrival. When full, the
/// oldest entry is dropped to make room and counted in
/// [`dropped`](LogBuffer::dropped).
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    min_level: LogLevel,
    dropped: u64,
}

impl LogBuffer {
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Creates a buffer holding at most `capacity` entries, keeping all levels
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            min_level: LogLevel::Debug,
            dropped: 0,
        }
    }

    /// Sets the lowest level that will be kept
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Records an entry
    pub fn log(&mut self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
            self.dropped += 1;
        }
        self.entries.push_back(entry);
    }

    /// Entries currently held, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Removes and returns every held entry
    pub fn drain(&mut self) -> Vec<LogEntry> {
        self.entries.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries lost to overflow since creation
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
