//! Sink trait definition

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

/// A destination for formatted log lines
///
/// Sinks receive fully rendered lines without the trailing newline; level
/// filtering and formatting happen before a line gets here.
pub trait Sink: Send {
    /// Short name for diagnostics
    fn name(&self) -> &str;

    /// Write one line
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Flush buffered output
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Whether the sink is an interactive terminal (enables ANSI styling
    /// under `ColorMode::Auto`)
    fn is_terminal(&self) -> bool {
        false
    }
}

/// A sink shared between a logger and the children derived from it
pub type SharedSink = Arc<Mutex<dyn Sink>>;

/// Wrap a sink for sharing
pub fn share<S: Sink + 'static>(sink: S) -> SharedSink {
    Arc::new(Mutex::new(sink))
}
