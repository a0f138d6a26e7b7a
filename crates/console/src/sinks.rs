//! Built-in sink implementations.

use crate::{DiagnosticSink, LogLevel};
use log::{error, info, warn};
use std::sync::Mutex;

/// A [`DiagnosticSink`] that routes to the `log` crate. This is the default
/// backend for a running host; a `[host]` prefix keeps hosted output
/// distinguishable from engine logging.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    #[inline]
    fn write(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace | LogLevel::Debug | LogLevel::Info => info!("[host]: {message}"),
            LogLevel::Warn => warn!("[host]: {message}"),
            LogLevel::Error => error!("[host]: {message}"),
        }
    }
}

/// A [`DiagnosticSink`] that records every line in memory. Used by tests to
/// assert on exactly what reached the channel, and by embedders that want to
/// surface hosted output in their own UI.
#[derive(Default)]
pub struct BufferSink {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl BufferSink {
    /// Snapshot of every recorded line, in arrival order.
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Number of recorded lines whose message equals `message` exactly.
    pub fn count_matching(&self, message: &str) -> usize {
        self.lines
            .lock()
            .map(|guard| guard.iter().filter(|(_, line)| line == message).count())
            .unwrap_or(0)
    }

    /// Whether any recorded line equals `message` exactly.
    pub fn contains(&self, message: &str) -> bool {
        self.count_matching(message) > 0
    }

    /// Total number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Whether no line has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for BufferSink {
    fn write(&self, level: LogLevel, message: &str) {
        if let Ok(mut guard) = self.lines.lock() {
            guard.push((level, String::from(message)));
        }
    }
}
