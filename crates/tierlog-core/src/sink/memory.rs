//! In-memory capture sink

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use super::traits::Sink;

/// A sink that keeps lines in memory
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and inspect the other.
///
/// # Example
///
/// ```
/// use tierlog_core::{Logger, MemorySink};
///
/// let capture = MemorySink::new();
/// let logger = Logger::with_sink(capture.clone());
/// logger.info("hello", &[]);
/// assert!(capture.contents().contains("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
    terminal: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capture that claims to be a terminal, so `ColorMode::Auto` styles it
    pub fn terminal() -> Self {
        Self {
            terminal: true,
            ..Self::default()
        }
    }

    /// Snapshot of captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All captured lines joined with newlines
    pub fn contents(&self) -> String {
        self.lines.lock().join("\n")
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}
