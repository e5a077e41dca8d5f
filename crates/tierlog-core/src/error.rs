//! Logger error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::level::ParseLevelError;

/// Errors that can occur while configuring a logger
///
/// The façade methods on [`crate::Logger`] report these through the logger
/// itself and carry on; the `try_` variants hand them back to the caller.
#[derive(Error, Debug)]
pub enum LogError {
    /// Log file could not be created or opened for appending
    #[error("Failed to open log file '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Flushing the log file on detach failed
    #[error("Failed to close log file: {0}")]
    FileClose(#[source] io::Error),

    /// Level name did not match any known level
    #[error("Invalid log level '{}': {0}", rejected_name(.0))]
    UnknownLevel(#[from] ParseLevelError),
}

impl LogError {
    /// Create a file open error
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }
}

fn rejected_name(err: &ParseLevelError) -> &str {
    &err.0
}

pub type LogResult<T> = Result<T, LogError>;
