//! Environment overrides

use std::env;

use super::LoggerConfig;

pub const ENV_LEVEL: &str = "TIERLOG_LEVEL";
pub const ENV_FILE: &str = "TIERLOG_FILE";
pub const ENV_TIME_FORMAT: &str = "TIERLOG_TIME_FORMAT";
pub const ENV_PREFIX: &str = "TIERLOG_PREFIX";
pub const ENV_COLOR: &str = "TIERLOG_COLOR";

impl LoggerConfig {
    /// Settings from `TIERLOG_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Settings from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. An unparseable `TIERLOG_COLOR` is
    /// ignored; a bad level name is kept so it gets reported when applied.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            level: get(ENV_LEVEL),
            prefix: get(ENV_PREFIX),
            time_format: get(ENV_TIME_FORMAT),
            color: get(ENV_COLOR).and_then(|v| v.parse().ok()),
            file: get(ENV_FILE).map(Into::into),
            ..Self::default()
        }
    }
}
