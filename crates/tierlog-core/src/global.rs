//! Process-wide default logger
//!
//! Libraries and small programs can log without threading a [`Logger`]
//! around. The default logger writes to stderr and is configured on first
//! use from the user config file, overlaid with the `TIERLOG_*` environment
//! variables. Everything here forwards to [`default_logger`].
//!
//! Call [`init`] once at startup to also route the `log` crate's macros
//! through the default logger.

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::config::LoggerConfig;
use crate::level::Level;
use crate::logger::Logger;
use crate::record::Field;
use crate::style::Styles;

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(build_default);

fn build_default() -> Logger {
    match LoggerConfig::discover() {
        Ok(config) => Logger::from_config(&config),
        Err(err) => {
            let logger = Logger::from_config(&LoggerConfig::from_env());
            let path = LoggerConfig::user_path();
            logger.error(
                format!("Failed to load config: {err}"),
                &[Field::new("path", path.display())],
            );
            logger
        }
    }
}

/// The process-wide logger
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Install the default logger as the `log` crate's logger.
///
/// The `log` max level follows the default logger's threshold, here and on
/// every later [`set_level`] or [`set_log_level`].
///
/// # Errors
///
/// Fails if a `log` logger has already been installed.
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(default_logger())?;
    sync_max_level();
    Ok(())
}

fn sync_max_level() {
    log::set_max_level(DEFAULT_LOGGER.level().log_filter());
}

#[track_caller]
pub fn debug(msg: impl fmt::Display, fields: &[Field]) {
    DEFAULT_LOGGER.debug(msg, fields);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.debugf(args);
}

#[track_caller]
pub fn info(msg: impl fmt::Display, fields: &[Field]) {
    DEFAULT_LOGGER.info(msg, fields);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.infof(args);
}

#[track_caller]
pub fn notice(msg: impl fmt::Display, fields: &[Field]) {
    DEFAULT_LOGGER.notice(msg, fields);
}

#[track_caller]
pub fn noticef(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.noticef(args);
}

#[track_caller]
pub fn warn(msg: impl fmt::Display, fields: &[Field]) {
    DEFAULT_LOGGER.warn(msg, fields);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.warnf(args);
}

#[track_caller]
pub fn error(msg: impl fmt::Display, fields: &[Field]) {
    DEFAULT_LOGGER.error(msg, fields);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.errorf(args);
}

#[track_caller]
pub fn critical(msg: impl fmt::Display, fields: &[Field]) {
    DEFAULT_LOGGER.critical(msg, fields);
}

#[track_caller]
pub fn criticalf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.criticalf(args);
}

#[track_caller]
pub fn fatal(msg: impl fmt::Display, fields: &[Field]) {
    DEFAULT_LOGGER.fatal(msg, fields);
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.fatalf(args);
}

pub fn with(fields: &[Field]) -> Logger {
    DEFAULT_LOGGER.with(fields)
}

pub fn with_prefix(prefix: impl Into<String>) -> Logger {
    DEFAULT_LOGGER.with_prefix(prefix)
}

pub fn prefix() -> String {
    DEFAULT_LOGGER.prefix()
}

pub fn set_prefix(prefix: impl Into<String>) {
    DEFAULT_LOGGER.set_prefix(prefix);
}

pub fn level() -> Level {
    DEFAULT_LOGGER.level()
}

pub fn set_level(level: Level) {
    DEFAULT_LOGGER.set_level(level);
    sync_max_level();
}

#[track_caller]
pub fn set_log_level(name: &str) {
    DEFAULT_LOGGER.set_log_level(name);
    sync_max_level();
}

pub fn set_time_format(format: impl Into<String>) {
    DEFAULT_LOGGER.set_time_format(format);
}

pub fn set_styles(styles: Styles) {
    DEFAULT_LOGGER.set_styles(styles);
}

pub fn default_styles() -> Styles {
    DEFAULT_LOGGER.default_styles()
}

#[track_caller]
pub fn set_log_file(path: impl AsRef<Path>) {
    DEFAULT_LOGGER.set_log_file(path);
}

#[track_caller]
pub fn close_log_file() {
    DEFAULT_LOGGER.close_log_file();
}
