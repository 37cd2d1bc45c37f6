//! Console output sink.
//!
//! Handlers append human-readable lines tagged with a short source
//! label (`status`, `list`, `dump`, ...). The host decides where lines
//! go: an on-screen console, a log, or a buffer in tests.

use tracing::info;

/// Receiver of console output lines.
pub trait ConsoleSink {
    /// Append one line attributed to a source label.
    fn line(&mut self, text: &str, source: &str);
}

/// Buffering sink for tests and capture.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<SinkLine>,
}

/// One captured output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkLine {
    pub text: String,
    pub source: String,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in order.
    pub fn lines(&self) -> &[SinkLine] {
        &self.lines
    }

    /// Just the line texts, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Drop everything captured so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl ConsoleSink for MemorySink {
    fn line(&mut self, text: &str, source: &str) {
        self.lines.push(SinkLine {
            text: text.to_string(),
            source: source.to_string(),
        });
    }
}

/// Sink that forwards lines to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ConsoleSink for TracingSink {
    fn line(&mut self, text: &str, source: &str) {
        info!(source, "{text}");
    }
}
