//! No-op sink implementation

use std::io;

use super::traits::Sink;

/// A sink that discards everything
///
/// Useful for silencing a logger's console output in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn name(&self) -> &str {
        "noop"
    }

    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}
