//! Log records and their text rendering
//!
//! A line looks like
//!
//! ```text
//! 15:04:05 INFO <logger/mod.rs:42> sub: message key=value other="two words"
//! ```
//!
//! with each element styled from the channel's [`Styles`](crate::Styles).

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::channel::ChannelOptions;
use crate::level::Level;

/// Time format used when none is configured or the configured one is invalid
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// A key/value pair attached to a log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub value: String,
}

impl Field {
    /// Create a field, rendering `value` with its `Display` impl
    pub fn new(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

impl<K: Into<String>, V: fmt::Display> From<(K, V)> for Field {
    fn from((key, value): (K, V)) -> Self {
        Field::new(key, value)
    }
}

/// One log call, as seen by a channel
#[derive(Debug, Clone)]
pub struct Record<'a> {
    /// Level shown in the label
    pub level: Level,
    pub message: &'a str,
    /// Per-call fields, rendered after the channel's bound fields
    pub fields: &'a [Field],
    pub caller: Option<&'static Location<'static>>,
    pub time: DateTime<Local>,
}

impl<'a> Record<'a> {
    pub fn new(level: Level, message: &'a str, fields: &'a [Field]) -> Self {
        Self {
            level,
            message,
            fields,
            caller: None,
            time: Local::now(),
        }
    }

    pub fn with_caller(mut self, caller: &'static Location<'static>) -> Self {
        self.caller = Some(caller);
        self
    }
}

/// Render a record as a single line, without the trailing newline
pub fn render_line(options: &ChannelOptions, record: &Record<'_>, ansi: bool) -> String {
    let styles = &options.styles;
    let mut parts: Vec<String> = Vec::with_capacity(6 + record.fields.len());

    if options.report_timestamp {
        let ts = format_timestamp(&record.time, &options.time_format);
        parts.push(styles.timestamp.render(&ts, ansi));
    }

    let label = match styles.level(record.level) {
        Some(style) => style.render_text(record.level.upper_name(), ansi),
        None => record.level.upper_name().to_string(),
    };
    if !label.is_empty() {
        parts.push(label);
    }

    if options.report_caller {
        if let Some(caller) = record.caller {
            let location = format!("<{}>", short_caller(caller));
            parts.push(styles.caller.render(&location, ansi));
        }
    }

    if !options.prefix.is_empty() {
        parts.push(styles.prefix.render(&format!("{}:", options.prefix), ansi));
    }

    if !record.message.is_empty() {
        parts.push(styles.message.render(&escape_line_breaks(record.message), ansi));
    }

    for field in options.fields.iter().chain(record.fields) {
        let key = styles.key_style(&field.key).render(&field.key, ansi);
        let separator = styles.separator.render("=", ansi);
        let value = styles
            .value_style(&field.key)
            .render(&quote_value(&field.value), ansi);
        parts.push(format!("{key}{separator}{value}"));
    }

    parts.join(" ")
}

/// Format `time` with a strftime template, falling back to
/// [`DEFAULT_TIME_FORMAT`] when the template does not parse
pub fn format_timestamp(time: &DateTime<Local>, format: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return time.format(DEFAULT_TIME_FORMAT).to_string();
    }
    time.format_with_items(items.iter()).to_string()
}

/// Whether a time format template parses
pub fn is_valid_time_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Keep a message on one line: `\n` and `\r` are written as escapes
fn escape_line_breaks(message: &str) -> Cow<'_, str> {
    if !message.contains(['\n', '\r']) {
        return Cow::Borrowed(message);
    }
    let mut escaped = String::with_capacity(message.len() + 2);
    for c in message.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn quote_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '=' || c == '"' || c.is_control());
    if needs_quotes {
        format!("{value:?}")
    } else {
        value.to_string()
    }
}

/// Last two path segments and the line number
fn short_caller(caller: &Location<'_>) -> String {
    let file = caller.file().replace('\\', "/");
    let mut segments = file.rsplitn(3, '/');
    let name = segments.next().unwrap_or_default();
    let short = match segments.next() {
        Some(dir) => format!("{dir}/{name}"),
        None => name.to_string(),
    };
    format!("{short}:{}", caller.line())
}
