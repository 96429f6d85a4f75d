//! Diagnostic sink for conversion runs
//!
//! The engine reports everything it notices (skipped files, duplicate keys,
//! identifier collisions) through a [`DiagnosticSink`]. Recording a diagnostic
//! never changes what the engine does next.

use std::fmt;

/// Severity of a recorded diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "info"),
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// A single recorded event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

/// Receiver for info/warning/error events raised during a run
pub trait DiagnosticSink {
    fn record(&mut self, level: Level, message: String);

    fn info(&mut self, message: String) {
        self.record(Level::Info, message);
    }

    fn warn(&mut self, message: String) {
        self.record(Level::Warning, message);
    }

    fn error(&mut self, message: String) {
        self.record(Level::Error, message);
    }
}

fn emit(level: Level, message: &str) {
    match level {
        Level::Info => tracing::info!("{}", message),
        Level::Warning => tracing::warn!("{}", message),
        Level::Error => tracing::error!("{}", message),
    }
}

/// Sink that keeps every record in memory and also forwards it to `tracing`
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics in the order they were recorded
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of diagnostics at the given level
    pub fn count(&self, level: Level) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    /// Messages of every warning, in order
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Warning)
            .map(|d| d.message.as_str())
    }

    pub fn has_errors(&self) -> bool {
        self.count(Level::Error) > 0
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn record(&mut self, level: Level, message: String) {
        emit(level, &message);
        self.diagnostics.push(Diagnostic { level, message });
    }
}
