//! Console sink implementation

use std::io::{self, IsTerminal, Write};

use super::traits::Sink;

/// Which standard stream a console sink writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
}

/// A sink that writes to stderr or stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    target: ConsoleTarget,
}

impl ConsoleSink {
    /// Console sink on stderr
    pub fn new() -> Self {
        Self::stderr()
    }

    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
        }
    }

    pub fn stdout() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
        }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stderr => "stderr",
            ConsoleTarget::Stdout => "stdout",
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stderr => writeln!(io::stderr().lock(), "{line}"),
            ConsoleTarget::Stdout => writeln!(io::stdout().lock(), "{line}"),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stderr => io::stderr().flush(),
            ConsoleTarget::Stdout => io::stdout().flush(),
        }
    }

    fn is_terminal(&self) -> bool {
        match self.target {
            ConsoleTarget::Stderr => io::stderr().is_terminal(),
            ConsoleTarget::Stdout => io::stdout().is_terminal(),
        }
    }
}
