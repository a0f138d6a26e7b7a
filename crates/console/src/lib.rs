//! Developer-facing diagnostic console for the page host.
//!
//! This crate centralizes output emitted by page-hosted code and the host
//! itself. Lines are routed through a pluggable [`DiagnosticSink`] so the
//! backend can be swapped without touching callers; the default sink prints
//! using the `log` crate.

use std::sync::Arc;

pub mod sinks;
pub use sinks::{BufferSink, LogSink};

/// Severity of a diagnostic line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Destination for diagnostic lines.
///
/// The console never interprets messages; it hands them to the sink verbatim
/// together with their level. Implementations decide formatting and routing.
pub trait DiagnosticSink: Send + Sync {
    /// Write a single diagnostic line.
    fn write(&self, level: LogLevel, message: &str);
}

/// Fixed line emitted once the host document is ready, signaling that script
/// execution capability is present.
#[inline]
pub const fn scripting_enabled_banner() -> &'static str {
    "This user has JavaScript enabled!"
}

/// Console provides helper functions to print messages emitted by page-hosted
/// code and the host itself. This keeps output routing in one place so it can
/// be redirected (e.g., captured in tests) by constructing it over a
/// different sink.
#[derive(Clone)]
pub struct Console {
    sink: Arc<dyn DiagnosticSink>,
}

impl Console {
    /// Create a console over an explicit sink.
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Create a console backed by the `log` crate.
    pub fn log_backed() -> Self {
        Self::new(Arc::new(LogSink))
    }

    /// Print a generic log line.
    #[inline]
    pub fn log<M: AsRef<str>>(&self, message: M) {
        self.sink.write(LogLevel::Info, message.as_ref());
    }

    /// Print an informational line.
    #[inline]
    pub fn info<M: AsRef<str>>(&self, message: M) {
        self.sink.write(LogLevel::Info, message.as_ref());
    }

    /// Print a warning line.
    #[inline]
    pub fn warn<M: AsRef<str>>(&self, message: M) {
        self.sink.write(LogLevel::Warn, message.as_ref());
    }

    /// Print an error line.
    #[inline]
    pub fn error<M: AsRef<str>>(&self, message: M) {
        self.sink.write(LogLevel::Error, message.as_ref());
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::log_backed()
    }
}

#[cfg(test)]
mod tests {
    use super::{BufferSink, Console, DiagnosticSink, LogLevel, scripting_enabled_banner};
    use std::sync::Arc;

    #[test]
    fn banner_is_the_fixed_literal() {
        assert_eq!(scripting_enabled_banner(), "This user has JavaScript enabled!");
    }

    #[test]
    fn console_routes_lines_to_sink_verbatim() {
        let sink = Arc::new(BufferSink::default());
        let console = Console::new(Arc::clone(&sink) as Arc<dyn DiagnosticSink>);

        console.log("hello");
        console.warn("careful");
        console.error("broken");

        let lines = sink.lines();
        assert_eq!(
            lines,
            vec![
                (LogLevel::Info, String::from("hello")),
                (LogLevel::Warn, String::from("careful")),
                (LogLevel::Error, String::from("broken")),
            ]
        );
    }

    #[test]
    fn cloned_consoles_share_one_sink() {
        let sink = Arc::new(BufferSink::default());
        let console = Console::new(Arc::clone(&sink) as Arc<dyn DiagnosticSink>);
        let other = console.clone();

        console.log("one");
        other.log("two");

        assert_eq!(sink.count_matching("one"), 1);
        assert_eq!(sink.count_matching("two"), 1);
    }
}
