//! Style set handed to the renderer
//!
//! A [`Style`] is plain data (colors are 256-color palette indices) and is
//! turned into ANSI escapes by `crossterm` at render time. Sinks that do not
//! want escapes (files, captures) get the same text with styling skipped.

use std::collections::HashMap;

use crossterm::style::{Attribute, Color, ContentStyle};
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Text style for one element of a log line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Replacement text, used for level labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Foreground color (ANSI 256 palette index)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<u8>,
    /// Background color (ANSI 256 palette index)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<u8>,
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    /// Truncate rendered text to this many characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn foreground(mut self, color: u8) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: u8) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    fn is_plain(&self) -> bool {
        self.foreground.is_none()
            && self.background.is_none()
            && !(self.bold || self.faint || self.italic || self.underline)
    }

    /// Render `text`, cut to `max_width`, with ANSI styling when `ansi` is set
    pub fn render(&self, text: &str, ansi: bool) -> String {
        let content: String = match self.max_width {
            Some(width) => text.chars().take(width).collect(),
            None => text.to_string(),
        };
        if !ansi || self.is_plain() || content.is_empty() {
            return content;
        }

        let mut style = ContentStyle::new();
        style.foreground_color = self.foreground.map(Color::AnsiValue);
        style.background_color = self.background.map(Color::AnsiValue);
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.faint {
            style.attributes.set(Attribute::Dim);
        }
        if self.italic {
            style.attributes.set(Attribute::Italic);
        }
        if self.underline {
            style.attributes.set(Attribute::Underlined);
        }
        style.apply(content).to_string()
    }

    /// Render this style's own text, falling back to `fallback`
    pub fn render_text(&self, fallback: &str, ansi: bool) -> String {
        self.render(self.text.as_deref().unwrap_or(fallback), ansi)
    }
}

/// Styles for every element of a rendered line
///
/// Deserialized styles start from [`Styles::bare`], so a config file only
/// carries what it changes; layer it over the defaults with [`Styles::merge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "Styles::bare")]
pub struct Styles {
    pub timestamp: Style,
    pub caller: Style,
    pub prefix: Style,
    pub message: Style,
    pub key: Style,
    pub value: Style,
    pub separator: Style,
    /// Label style per level
    pub levels: HashMap<Level, Style>,
    /// Overrides of `key` for specific field names
    pub keys: HashMap<String, Style>,
    /// Overrides of `value` for specific field names
    pub values: HashMap<String, Style>,
}

impl Default for Styles {
    fn default() -> Self {
        default_styles()
    }
}

impl Styles {
    /// Style for a level label; levels without an entry render unstyled
    pub fn level(&self, level: Level) -> Option<&Style> {
        self.levels.get(&level)
    }

    /// Style for a field key, honouring per-key overrides
    pub fn key_style(&self, key: &str) -> &Style {
        self.keys.get(key).unwrap_or(&self.key)
    }

    /// Style for a field value, honouring per-key overrides
    pub fn value_style(&self, key: &str) -> &Style {
        self.values.get(key).unwrap_or(&self.value)
    }

    /// Layer `other` on top of these styles. Map entries are merged,
    /// element styles are replaced when `other` sets them.
    pub fn merge(&mut self, other: Styles) {
        let base = Styles::bare();
        for (slot, incoming, empty) in [
            (&mut self.timestamp, other.timestamp, &base.timestamp),
            (&mut self.caller, other.caller, &base.caller),
            (&mut self.prefix, other.prefix, &base.prefix),
            (&mut self.message, other.message, &base.message),
            (&mut self.key, other.key, &base.key),
            (&mut self.value, other.value, &base.value),
            (&mut self.separator, other.separator, &base.separator),
        ] {
            if &incoming != empty {
                *slot = incoming;
            }
        }
        self.levels.extend(other.levels);
        self.keys.extend(other.keys);
        self.values.extend(other.values);
    }

    /// Styles with nothing set
    pub fn bare() -> Self {
        Self {
            timestamp: Style::new(),
            caller: Style::new(),
            prefix: Style::new(),
            message: Style::new(),
            key: Style::new(),
            value: Style::new(),
            separator: Style::new(),
            levels: HashMap::new(),
            keys: HashMap::new(),
            values: HashMap::new(),
        }
    }
}

/// The default style set
///
/// Four-character bold level labels, with Notice in green and Critical in
/// magenta, and an `err` field highlighted.
pub fn default_styles() -> Styles {
    let label = |text: &str, color: u8| {
        Style::new()
            .with_text(text)
            .bold()
            .max_width(4)
            .foreground(color)
    };

    let mut levels = HashMap::new();
    levels.insert(Level::Debug, label("DEBUG", 63));
    levels.insert(Level::Info, label("INFO", 86));
    levels.insert(Level::Notice, label("NOTICE", 40));
    levels.insert(Level::Warn, label("WARN", 192));
    levels.insert(Level::Error, label("ERROR", 204));
    levels.insert(Level::Critical, label("CRITICAL", 201));
    levels.insert(Level::Fatal, label("FATAL", 134));

    let mut keys = HashMap::new();
    keys.insert("err".to_string(), Style::new().foreground(204));
    let mut values = HashMap::new();
    values.insert("err".to_string(), Style::new().bold());

    Styles {
        timestamp: Style::new(),
        caller: Style::new().faint(),
        prefix: Style::new().bold().faint(),
        message: Style::new(),
        key: Style::new().faint(),
        value: Style::new(),
        separator: Style::new().faint(),
        levels,
        keys,
        values,
    }
}
