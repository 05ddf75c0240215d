//! Console-style diagnostic output.
//!
//! The client reports the missing-credential warning and echoes
//! [`echo_send`](crate::LogglyClient::echo_send) messages through a
//! [`DiagnosticSink`]. The default [`LogSink`] forwards to the `log` facade so
//! the host application's logger decides where the lines end up.

use std::io::{self, Write};

use parking_lot::Mutex;

/// Target used for records emitted by [`LogSink`].
pub const LOG_TARGET: &str = "loggly_rs";

/// Receiver for client diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Report a non-fatal problem.
    fn warn(&self, message: &str);
    /// Echo a message that has just been sent.
    fn echo(&self, level: &str, message: &str);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!(target: LOG_TARGET, "{message}");
    }

    fn echo(&self, level: &str, message: &str) {
        log::info!(target: LOG_TARGET, "{level} {message}");
    }
}

/// Writes diagnostics straight to standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&self, message: &str) {
        // Nothing useful can be done if stderr is closed.
        let _ = writeln!(io::stderr().lock(), "WARNING: {message}");
    }

    fn echo(&self, level: &str, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{level} {message}");
    }
}

/// A single call recorded by [`MemorySink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    Warning(String),
    Echo { level: String, message: String },
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded diagnostics, oldest first.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter_map(|entry| match entry {
                Diagnostic::Warning(msg) => Some(msg.clone()),
                Diagnostic::Echo { .. } => None,
            })
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.entries
            .lock()
            .push(Diagnostic::Warning(message.to_owned()));
    }

    fn echo(&self, level: &str, message: &str) {
        self.entries.lock().push(Diagnostic::Echo {
            level: level.to_owned(),
            message: message.to_owned(),
        });
    }
}

/// Emits diagnostics as `tracing` events.
#[cfg(feature = "tracing-compat")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing-compat")]
impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: LOG_TARGET, "{message}");
    }

    fn echo(&self, level: &str, message: &str) {
        tracing::info!(target: LOG_TARGET, severity = level, "{message}");
    }
}
