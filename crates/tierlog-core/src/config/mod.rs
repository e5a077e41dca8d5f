//! Logger configuration
//!
//! Sources, in increasing priority:
//! - YAML or JSON file (`~/.config/tierlog/config.yaml` by default)
//! - `TIERLOG_*` environment variables
//!
//! A [`LoggerConfig`] only carries what a source sets; apply it with
//! [`Logger::apply_config`](crate::Logger::apply_config).

mod env;
mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::channel::ColorMode;
use crate::style::Styles;

pub use env::{
    ENV_COLOR, ENV_FILE, ENV_LEVEL, ENV_PREFIX, ENV_TIME_FORMAT,
};
pub use file::ConfigFormat;

/// Logger settings from a config file or the environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Level name; unknown names are reported when applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// strftime template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_timestamp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_caller: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMode>,
    /// Log file to mirror to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Styles layered over the defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Styles>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Overlay `other` on top of `self`; settings present in `other` win
    pub fn merge(&mut self, other: LoggerConfig) {
        if other.level.is_some() {
            self.level = other.level;
        }
        if other.prefix.is_some() {
            self.prefix = other.prefix;
        }
        if other.time_format.is_some() {
            self.time_format = other.time_format;
        }
        if other.report_timestamp.is_some() {
            self.report_timestamp = other.report_timestamp;
        }
        if other.report_caller.is_some() {
            self.report_caller = other.report_caller;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.file.is_some() {
            self.file = other.file;
        }
        match (self.styles.as_mut(), other.styles) {
            (Some(mine), Some(theirs)) => mine.merge(theirs),
            (None, Some(theirs)) => self.styles = Some(theirs),
            _ => {}
        }
    }

    /// User config file overlaid with the environment
    ///
    /// A missing user config file is not an error.
    pub fn discover() -> ConfigResult<Self> {
        Self::layered(&Self::user_path(), |key| std::env::var(key).ok())
    }

    /// Config file at `path` (if it exists) overlaid with variables from
    /// `lookup`
    pub fn layered(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        config.merge(Self::from_lookup(lookup));
        Ok(config)
    }
}

/// Errors that can occur while loading or saving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
