//! Channels: a sink plus the options that govern it
//!
//! A logger owns one channel per sink. The channel decides whether a record
//! passes its threshold and renders it for its sink.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::record::{render_line, Field, Record, DEFAULT_TIME_FORMAT};
use crate::sink::SharedSink;
use crate::style::{default_styles, Styles};

/// When to emit ANSI styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when the sink is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "force" => Ok(ColorMode::Always),
            "never" | "off" => Ok(ColorMode::Never),
            _ => Err(format!("Unknown color mode: {s}. Use 'auto', 'always' or 'never'")),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

/// Per-channel configuration
#[derive(Debug, Clone)]
pub struct ChannelOptions {
    /// Threshold
    pub level: Level,
    pub prefix: String,
    /// strftime template for timestamps
    pub time_format: String,
    pub report_timestamp: bool,
    pub report_caller: bool,
    /// Fields bound with `Logger::with`
    pub fields: Vec<Field>,
    pub styles: Arc<Styles>,
    pub color: ColorMode,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            level: Level::Info,
            prefix: String::new(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            report_timestamp: true,
            report_caller: false,
            fields: Vec::new(),
            styles: Arc::new(default_styles()),
            color: ColorMode::Auto,
        }
    }
}

/// A sink with its options
#[derive(Clone)]
pub struct Channel {
    sink: SharedSink,
    options: ChannelOptions,
}

impl Channel {
    pub fn new(sink: SharedSink, options: ChannelOptions) -> Self {
        Self { sink, options }
    }

    pub fn options(&self) -> &ChannelOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ChannelOptions {
        &mut self.options
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Whether a message at `level` passes this channel's threshold
    pub fn enabled(&self, level: Level) -> bool {
        level.enabled(self.options.level)
    }

    /// Whether lines on this channel get ANSI styling
    pub fn ansi(&self) -> bool {
        match self.options.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => env::var_os("NO_COLOR").is_none() && self.sink.lock().is_terminal(),
        }
    }

    /// Render and write `record` if `filter` passes the threshold.
    ///
    /// `filter` is usually `record.level`; the Fatal mirror on file channels
    /// filters as Fatal while labelling itself Critical.
    pub fn log(&self, filter: Level, record: &Record<'_>) -> bool {
        if !self.enabled(filter) {
            return false;
        }
        let line = render_line(&self.options, record, self.ansi());
        let mut sink = self.sink.lock();
        // Write failures have nowhere better to go than the sink that failed.
        let _ = sink.write_line(&line);
        true
    }

    /// Same sink, same options plus extra bound fields
    pub fn with_fields(&self, fields: &[Field]) -> Self {
        let mut child = self.clone();
        child.options.fields.extend_from_slice(fields);
        child
    }

    /// Same sink, same options, different prefix
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.options.prefix = prefix.into();
        child
    }

    pub fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("sink", &self.sink.lock().name())
            .field("options", &self.options)
            .finish()
    }
}
