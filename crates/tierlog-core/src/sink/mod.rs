//! Destinations for rendered log lines
//!
//! - `ConsoleSink`: stderr (default) or stdout
//! - `FileSink`: a file opened for appending
//! - `MemorySink`: in-memory capture, mostly for tests
//! - `NoOpSink`: discards everything

mod traits;
mod console;
mod file;
mod memory;
mod noop;

pub use traits::{Sink, SharedSink, share};
pub use console::{ConsoleSink, ConsoleTarget};
pub use file::FileSink;
pub use memory::MemorySink;
pub use noop::NoOpSink;
