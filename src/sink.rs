//! Diagnostic sinks for parse-time output.
//!
//! The parse pipeline never writes to a process-wide logger directly; it
//! emits through a [`DiagnosticSink`] supplied by the caller. Production
//! callers pass [`TracingSink`]; tests and GUI embedders that surface
//! diagnostics themselves pass [`MemorySink`].

use std::cell::RefCell;

/// Receiver for the informational, warning and error channels used while
/// parsing an invocation. A single writer appends sequentially; no
/// coordination is required.
pub trait DiagnosticSink {
    /// Records an informational message.
    fn info(&self, message: &str);

    /// Records a warning.
    fn warn(&self, message: &str);

    /// Records an error.
    fn error(&self, message: &str);
}

/// Severity of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Informational output, including the help text.
    Info,
    /// Recoverable problems, such as an unparseable `--matching-type` value.
    Warn,
    /// Terminal failures.
    Error,
}

/// A single recorded diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Channel the message was emitted on.
    pub level: Level,
    /// Rendered message text.
    pub message: String,
}

/// Sink that forwards each message to the ambient `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Sink that records diagnostics in emission order.
///
/// Intended for deterministic capture in tests and for embedders that render
/// parse diagnostics in their own surface. Parsing is single-threaded, so a
/// `RefCell` suffices.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<Diagnostic>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every recorded diagnostic, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    /// Returns the recorded messages at `level`, oldest first.
    #[must_use]
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    fn record(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push(Diagnostic {
            level,
            message: message.to_owned(),
        });
    }
}

impl DiagnosticSink for MemorySink {
    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}
