//! Tierlog Core
//!
//! Leveled logging with styled console output, an optional mirrored log
//! file and child loggers.
//!
//! Seven levels, from `Debug` up to `Fatal`, with `Notice` and `Critical`
//! between the usual ones. Each [`Logger`] writes to its console sink and,
//! once [`Logger::set_log_file`] has been called, appends the same lines
//! (without ANSI styling) to the file. Each sink filters on its own
//! threshold.
//!
//! ```rust,no_run
//! use tierlog_core::{fields, Level, Logger};
//!
//! let logger = Logger::new();
//! logger.set_log_level("debug");
//! logger.set_log_file("app.log");
//!
//! logger.info("listening", fields!["port" => 8080]);
//!
//! let db = logger.with_prefix("db");
//! db.warn("slow query", fields!["ms" => 812]);
//!
//! // cascades to `db`
//! logger.set_level(Level::Warn);
//! logger.close_log_file();
//! ```
//!
//! The [`global`] module wraps a process-wide default logger for code that
//! does not want to pass one around. [`global::init`] also installs it as
//! the `log` crate's logger, so `log::info!` and friends end up in the same
//! sinks.

#[macro_use]
mod macros;

mod bridge;
mod channel;
mod error;
mod level;
mod logger;
mod record;
mod style;

pub mod config;
pub mod global;
pub mod sink;

pub use channel::{Channel, ChannelOptions, ColorMode};
pub use error::{LogError, LogResult};
pub use level::{Level, ParseLevelError};
pub use logger::{ExitHook, Logger};
pub use record::{format_timestamp, is_valid_time_format, render_line, Field, Record, DEFAULT_TIME_FORMAT};
pub use style::{default_styles, Style, Styles};

pub use config::{ConfigError, ConfigFormat, ConfigResult, LoggerConfig};
pub use global::default_logger;
pub use sink::{ConsoleSink, FileSink, MemorySink, NoOpSink, Sink};
