//! Severity levels
//!
//! Seven ordered levels. `Notice` and `Critical` sit between the standard
//! ones, so the numeric values leave gaps for them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Log levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(i8)]
pub enum Level {
    Debug = -4,
    Info = 0,
    Notice = 2,
    Warn = 4,
    Error = 8,
    Critical = 10,
    Fatal = 12,
}

impl Level {
    /// All levels in ascending order
    pub const ALL: [Level; 7] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warn,
        Level::Error,
        Level::Critical,
        Level::Fatal,
    ];

    /// Lowercase name, as accepted by [`Level::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Notice => "notice",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Critical => "critical",
            Level::Fatal => "fatal",
        }
    }

    /// Full uppercase name. The rendered label is this, cut to the level
    /// style's max width.
    pub fn upper_name(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Fatal => "FATAL",
        }
    }

    /// Numeric severity
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Whether a message at this level passes a sink whose threshold is `threshold`
    pub fn enabled(&self, threshold: Level) -> bool {
        *self >= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "notice" => Ok(Level::Notice),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "critical" => Ok(Level::Critical),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, ParseLevelError> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Notice);
        assert!(Level::Notice < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Critical);
        assert!(Level::Critical < Level::Fatal);

        let mut sorted = Level::ALL;
        sorted.sort();
        assert_eq!(sorted, Level::ALL);
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(Level::Debug.value(), -4);
        assert_eq!(Level::Notice.value(), 2);
        assert_eq!(Level::Critical.value(), 10);
        assert_eq!(Level::Fatal.value(), 12);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("NOTICE".parse::<Level>().unwrap(), Level::Notice);
        assert_eq!("Critical".parse::<Level>().unwrap(), Level::Critical);
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogus".parse::<Level>().unwrap_err();
        assert_eq!(err, ParseLevelError("bogus".to_string()));
        assert_eq!(err.to_string(), "invalid level: \"bogus\"");
        assert!("warning".parse::<Level>().is_err());
    }

    #[test]
    fn test_enabled() {
        for threshold in Level::ALL {
            for level in Level::ALL {
                assert_eq!(level.enabled(threshold), level >= threshold);
            }
        }
        assert!(!Level::Debug.enabled(Level::Info));
        assert!(Level::Info.enabled(Level::Info));
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Level::Notice).unwrap();
        assert_eq!(json, "\"notice\"");
        let level: Level = serde_json::from_str("\"WARN\"").unwrap();
        assert_eq!(level, Level::Warn);
        assert!(serde_json::from_str::<Level>("\"loud\"").is_err());
    }
}
