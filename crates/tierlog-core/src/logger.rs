//! The leveled logger
//!
//! A [`Logger`] writes every call to its console channel and, while a log
//! file is attached, mirrors it to a file channel. Each channel filters on
//! its own threshold.
//!
//! Children made with [`Logger::with`] and [`Logger::with_prefix`] share the
//! parent's sinks and copy its options at creation time. The parent keeps a
//! weak handle to each child so that [`Logger::set_level`] reaches every
//! live descendant. Nothing else flows from parent to child after creation,
//! and nothing flows upward.
//!
//! # Example
//!
//! ```
//! use tierlog_core::{fields, Level, Logger, MemorySink};
//!
//! let console = MemorySink::new();
//! let logger = Logger::with_sink(console.clone());
//! logger.set_report_timestamp(false);
//!
//! logger.debug("hidden", &[]);
//! logger.info("Info message", fields!["test" => 500]);
//!
//! let sub = logger.with_prefix("sub");
//! logger.set_level(Level::Warn);
//! assert_eq!(sub.level(), Level::Warn);
//!
//! assert_eq!(console.lines(), vec!["INFO Info message test=500"]);
//! ```

use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::channel::{Channel, ChannelOptions, ColorMode};
use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::level::Level;
use crate::record::{Field, Record};
use crate::sink::{share, ConsoleSink, FileSink, SharedSink, Sink};
use crate::style::{default_styles, Styles};

/// Called with exit code 1 after a Fatal message has been written
pub type ExitHook = fn(i32);

fn exit_process(code: i32) {
    std::process::exit(code)
}

struct LoggerInner {
    console: Channel,
    mirror: Option<Channel>,
    /// File opened by this logger. Children share the mirror channel but
    /// never own the file.
    file: Option<Arc<Mutex<FileSink>>>,
    children: Vec<Weak<Mutex<LoggerInner>>>,
    exit_hook: ExitHook,
}

impl LoggerInner {
    /// Apply `f` to the console channel options and the mirror's, if any
    fn update(&mut self, mut f: impl FnMut(&mut ChannelOptions)) {
        f(self.console.options_mut());
        if let Some(mirror) = self.mirror.as_mut() {
            f(mirror.options_mut());
        }
    }

    fn live_children(&mut self) -> Vec<Arc<Mutex<LoggerInner>>> {
        self.children.retain(|child| child.strong_count() > 0);
        self.children.iter().filter_map(Weak::upgrade).collect()
    }
}

/// Leveled logger with a console sink and an optional mirrored log file
///
/// `Logger` is a handle: clones refer to the same logger. Use
/// [`Logger::with`] or [`Logger::with_prefix`] for a child with its own
/// configuration.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Mutex<LoggerInner>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger writing to stderr at Info with the default styles
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink::new())
    }

    /// Logger writing to `sink` instead of the console
    pub fn with_sink<S: Sink + 'static>(sink: S) -> Self {
        Self::with_options(share(sink), ChannelOptions::default())
    }

    /// Logger over a shared sink with explicit options
    pub fn with_options(sink: SharedSink, options: ChannelOptions) -> Self {
        Self::from_inner(LoggerInner {
            console: Channel::new(sink, options),
            mirror: None,
            file: None,
            children: Vec::new(),
            exit_hook: exit_process,
        })
    }

    /// Logger on stderr configured from `config`
    pub fn from_config(config: &LoggerConfig) -> Self {
        let logger = Self::new();
        logger.apply_config(config);
        logger
    }

    fn from_inner(inner: LoggerInner) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Apply every setting present in `config`.
    ///
    /// An unknown level name or an unopenable file is reported like any
    /// other configuration error and skipped.
    #[track_caller]
    pub fn apply_config(&self, config: &LoggerConfig) {
        if let Some(styles) = &config.styles {
            let mut merged = self.styles();
            merged.merge(styles.clone());
            self.set_styles(merged);
        }
        if let Some(format) = &config.time_format {
            self.set_time_format(format.clone());
        }
        if let Some(prefix) = &config.prefix {
            self.set_prefix(prefix.clone());
        }
        if let Some(report) = config.report_timestamp {
            self.set_report_timestamp(report);
        }
        if let Some(color) = config.color {
            self.set_color(color);
        }
        if let Some(level) = &config.level {
            self.set_log_level(level);
        }
        if let Some(report) = config.report_caller {
            self.set_report_caller(report);
        }
        if let Some(path) = &config.file {
            self.set_log_file(path);
        }
    }

    // --- level -----------------------------------------------------------

    /// Current console threshold
    pub fn level(&self) -> Level {
        self.inner.lock().console.options().level
    }

    /// Set the threshold on both channels and on every live descendant.
    ///
    /// Caller locations are reported while the threshold is Debug.
    pub fn set_level(&self, level: Level) {
        let children = {
            let mut inner = self.inner.lock();
            inner.update(|opts| {
                opts.level = level;
                opts.report_caller = level <= Level::Debug;
            });
            inner.live_children()
        };
        for child in children {
            Logger { inner: child }.set_level(level);
        }
    }

    /// Set the threshold by name, reporting unknown names at Error level
    #[track_caller]
    pub fn set_log_level(&self, name: &str) {
        if let Err(err) = self.try_set_log_level(name) {
            self.report(err);
        }
    }

    /// Set the threshold by case-insensitive name
    ///
    /// # Errors
    ///
    /// Returns [`LogError::UnknownLevel`] and leaves the threshold alone if
    /// `name` is not a level name.
    pub fn try_set_log_level(&self, name: &str) -> LogResult<Level> {
        let level: Level = name.parse()?;
        self.set_level(level);
        Ok(level)
    }

    // --- formatting options ----------------------------------------------

    pub fn prefix(&self) -> String {
        self.inner.lock().console.options().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.inner.lock().update(|opts| opts.prefix = prefix.clone());
    }

    pub fn time_format(&self) -> String {
        self.inner.lock().console.options().time_format.clone()
    }

    /// Set the strftime template for timestamps on both channels
    pub fn set_time_format(&self, format: impl Into<String>) {
        let format = format.into();
        self.inner
            .lock()
            .update(|opts| opts.time_format = format.clone());
    }

    pub fn set_report_timestamp(&self, report: bool) {
        self.inner.lock().update(|opts| opts.report_timestamp = report);
    }

    pub fn set_report_caller(&self, report: bool) {
        self.inner.lock().update(|opts| opts.report_caller = report);
    }

    /// Color mode of the console channel. The file mirror never gets ANSI
    /// styling.
    pub fn set_color(&self, color: ColorMode) {
        self.inner.lock().console.options_mut().color = color;
    }

    /// Styles currently used by the console channel
    pub fn styles(&self) -> Styles {
        Styles::clone(&self.inner.lock().console.options().styles)
    }

    pub fn set_styles(&self, styles: Styles) {
        let styles = Arc::new(styles);
        self.inner
            .lock()
            .update(|opts| opts.styles = Arc::clone(&styles));
    }

    /// The built-in style set, a starting point for [`Logger::set_styles`]
    pub fn default_styles(&self) -> Styles {
        default_styles()
    }

    /// Replace the console sink. Existing children keep writing to the old one.
    pub fn set_console<S: Sink + 'static>(&self, sink: S) {
        let mut inner = self.inner.lock();
        let options = inner.console.options().clone();
        inner.console = Channel::new(share(sink), options);
    }

    /// Replace the hook run after a Fatal message
    pub fn set_exit_hook(&self, hook: ExitHook) {
        self.inner.lock().exit_hook = hook;
    }

    // --- log file --------------------------------------------------------

    /// Mirror output to `path`, reporting failures at Error level.
    ///
    /// An empty path does nothing.
    #[track_caller]
    pub fn set_log_file(&self, path: impl AsRef<Path>) {
        if let Err(err) = self.try_set_log_file(path) {
            self.report(err);
        }
    }

    /// Mirror output to `path`, opened for appending and created if absent.
    ///
    /// Any file this logger already has open is closed first. The mirror
    /// starts with the console channel's current options.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::FileOpen`] if the file cannot be opened; the
    /// logger is then left without a log file.
    #[track_caller]
    pub fn try_set_log_file(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        self.close_log_file();

        let file = FileSink::open(path).map_err(|err| LogError::file_open(path, err))?;
        let file = Arc::new(Mutex::new(file));
        let shared: SharedSink = file.clone();

        let mut inner = self.inner.lock();
        let mut options = inner.console.options().clone();
        options.color = ColorMode::Never;
        inner.mirror = Some(Channel::new(shared, options));
        inner.file = Some(file);
        Ok(())
    }

    /// Detach and close this logger's log file, reporting flush failures
    #[track_caller]
    pub fn close_log_file(&self) {
        if let Err(err) = self.try_close_log_file() {
            self.report(err);
        }
    }

    /// Detach and close this logger's log file.
    ///
    /// A child that only inherited its parent's mirror has nothing to close
    /// and keeps mirroring.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::FileClose`] if syncing the file failed. The file
    /// is detached either way.
    pub fn try_close_log_file(&self) -> LogResult<()> {
        let file = {
            let mut inner = self.inner.lock();
            match inner.file.take() {
                Some(file) => {
                    inner.mirror = None;
                    file
                }
                None => return Ok(()),
            }
        };
        let result = file.lock().close();
        result.map_err(LogError::FileClose)
    }

    /// Path of the log file this logger opened itself
    pub fn log_file(&self) -> Option<PathBuf> {
        let inner = self.inner.lock();
        let file = inner.file.as_ref()?;
        let path = file.lock().path().to_path_buf();
        Some(path)
    }

    /// Whether calls are currently mirrored to a file
    pub fn has_mirror(&self) -> bool {
        self.inner.lock().mirror.is_some()
    }

    /// Whether a message at `level` would reach the console or the file
    pub fn enabled(&self, level: Level) -> bool {
        let inner = self.inner.lock();
        inner.console.enabled(level) || inner.mirror.as_ref().is_some_and(|m| m.enabled(level))
    }

    /// Flush the console and the file mirror
    pub fn flush(&self) {
        let inner = self.inner.lock();
        if let Some(mirror) = &inner.mirror {
            mirror.flush();
        }
        inner.console.flush();
    }

    // --- children --------------------------------------------------------

    /// Child logger with extra bound fields
    pub fn with(&self, fields: &[Field]) -> Logger {
        self.derive(|chan| chan.with_fields(fields))
    }

    /// Child logger with a different prefix
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Logger {
        let prefix = prefix.into();
        self.derive(|chan| chan.with_prefix(prefix.clone()))
    }

    fn derive(&self, f: impl Fn(&Channel) -> Channel) -> Logger {
        let mut inner = self.inner.lock();
        let child = Logger::from_inner(LoggerInner {
            console: f(&inner.console),
            mirror: inner.mirror.as_ref().map(&f),
            file: None,
            children: Vec::new(),
            exit_hook: inner.exit_hook,
        });
        // Drop handles of children that are already gone before registering.
        inner.children.retain(|c| c.strong_count() > 0);
        inner.children.push(Arc::downgrade(&child.inner));
        child
    }

    /// Number of live children registered with this logger
    pub fn child_count(&self) -> usize {
        self.inner.lock().live_children().len()
    }

    // --- logging ---------------------------------------------------------

    /// Log `msg` at `level`. Fatal terminates the process after writing.
    #[track_caller]
    pub fn log(&self, level: Level, msg: impl fmt::Display, fields: &[Field]) {
        let caller = Location::caller();
        let message = msg.to_string();
        if level == Level::Fatal {
            self.emit_fatal(&message, fields, caller);
        } else {
            self.emit(level, &message, fields, Some(caller));
        }
    }

    /// Log pre-formatted arguments at `level`
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log(level, args, &[]);
    }

    /// Write one non-Fatal record to the mirror, then the console
    pub(crate) fn emit(
        &self,
        level: Level,
        message: &str,
        fields: &[Field],
        caller: Option<&'static Location<'static>>,
    ) {
        let mut record = Record::new(level, message, fields);
        record.caller = caller;
        let inner = self.inner.lock();
        if let Some(mirror) = &inner.mirror {
            mirror.log(level, &record);
        }
        inner.console.log(level, &record);
    }

    fn emit_fatal(&self, message: &str, fields: &[Field], caller: &'static Location<'static>) {
        let hook = {
            let inner = self.inner.lock();
            if let Some(mirror) = &inner.mirror {
                let text = format!("FATAL: {message}");
                let record = Record::new(Level::Critical, &text, fields).with_caller(caller);
                mirror.log(Level::Fatal, &record);
                mirror.flush();
            }
            let record = Record::new(Level::Fatal, message, fields).with_caller(caller);
            inner.console.log(Level::Fatal, &record);
            inner.console.flush();
            inner.exit_hook
        };
        hook(1);
    }

    #[track_caller]
    fn report(&self, err: LogError) {
        self.log(Level::Error, err, &[]);
    }

    #[track_caller]
    pub fn debug(&self, msg: impl fmt::Display, fields: &[Field]) {
        self.log(Level::Debug, msg, fields);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, msg: impl fmt::Display, fields: &[Field]) {
        self.log(Level::Info, msg, fields);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    #[track_caller]
    pub fn notice(&self, msg: impl fmt::Display, fields: &[Field]) {
        self.log(Level::Notice, msg, fields);
    }

    #[track_caller]
    pub fn noticef(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Notice, args);
    }

    #[track_caller]
    pub fn warn(&self, msg: impl fmt::Display, fields: &[Field]) {
        self.log(Level::Warn, msg, fields);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    #[track_caller]
    pub fn error(&self, msg: impl fmt::Display, fields: &[Field]) {
        self.log(Level::Error, msg, fields);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    #[track_caller]
    pub fn critical(&self, msg: impl fmt::Display, fields: &[Field]) {
        self.log(Level::Critical, msg, fields);
    }

    #[track_caller]
    pub fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Critical, args);
    }

    /// Log at Fatal, then run the exit hook (`std::process::exit(1)` by default)
    #[track_caller]
    pub fn fatal(&self, msg: impl fmt::Display, fields: &[Field]) {
        self.log(Level::Fatal, msg, fields);
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Fatal, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Logger")
            .field("level", &inner.console.options().level)
            .field("prefix", &inner.console.options().prefix)
            .field("mirror", &inner.mirror.is_some())
            .field("owns_file", &inner.file.is_some())
            .field("children", &inner.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, NoOpSink};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    fn capture() -> (Logger, MemorySink) {
        let console = MemorySink::new();
        let logger = Logger::with_sink(console.clone());
        logger.set_report_timestamp(false);
        (logger, console)
    }

    fn file_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_threshold_controls_console_output() {
        for threshold in Level::ALL.into_iter().filter(|l| *l != Level::Fatal) {
            let (logger, console) = capture();
            logger.set_level(threshold);
            for level in Level::ALL.into_iter().filter(|l| *l != Level::Fatal) {
                console.clear();
                logger.log(level, "m", &[]);
                assert_eq!(console.len(), usize::from(level >= threshold), "{level} at {threshold}");
            }
        }
    }

    #[test]
    fn test_info_threshold_example() {
        let (logger, console) = capture();
        logger.set_level(Level::Info);
        logger.debug("x", &[]);
        assert!(console.is_empty());
        logger.info("y", &[]);
        assert_eq!(console.len(), 1);
        assert!(console.contents().contains('y'));
    }

    #[test]
    fn test_file_mirror_receives_messages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");
        let (logger, console) = capture();

        logger.set_log_file(&path);
        assert!(logger.has_mirror());
        assert_eq!(logger.log_file().as_deref(), Some(path.as_path()));
        logger.error("z", &[]);
        logger.close_log_file();

        assert!(console.contents().contains('z'));
        let lines = file_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains('z'));
        assert!(!lines[0].contains('\u{1b}'));
    }

    #[test]
    fn test_n_messages_append_n_lines_across_reattach() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("append.log");
        let (logger, _console) = capture();

        logger.set_log_file(&path);
        for i in 0..3 {
            logger.info(format!("first {i}"), &[]);
        }
        logger.close_log_file();
        assert!(!logger.has_mirror());
        logger.info("not mirrored", &[]);

        logger.set_log_file(&path);
        for i in 0..2 {
            logger.info(format!("second {i}"), &[]);
        }
        // re-attaching while attached closes the old handle first
        logger.set_log_file(&path);
        logger.info("third", &[]);
        logger.close_log_file();

        let lines = file_lines(&path);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with("first 0"));
        assert!(lines[4].ends_with("second 1"));
        assert!(lines[5].ends_with("third"));
    }

    #[test]
    fn test_multiline_message_is_one_file_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("multiline.log");
        let (logger, _console) = capture();

        logger.set_log_file(&path);
        logger.info("first\nsecond", &[]);
        logger.warn("third", &[]);
        logger.close_log_file();

        assert_eq!(file_lines(&path), vec![r"INFO first\nsecond", "WARN third"]);
    }

    #[test]
    fn test_empty_path_is_noop() {
        let (logger, console) = capture();
        logger.set_log_file("");
        assert!(!logger.has_mirror());
        assert!(console.is_empty());
    }

    #[test]
    fn test_unopenable_file_reports_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("test.log");
        let (logger, console) = capture();

        logger.set_log_file(&path);
        assert!(!logger.has_mirror());
        let lines = console.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ERRO Failed to open log file"));

        let err = logger.try_set_log_file(&path).unwrap_err();
        assert!(matches!(err, LogError::FileOpen { .. }));
    }

    #[test]
    fn test_unknown_level_name() {
        let (logger, console) = capture();
        logger.set_level(Level::Warn);

        logger.set_log_level("bogus");
        assert_eq!(logger.level(), Level::Warn);
        assert_eq!(
            console.lines(),
            vec!["ERRO Invalid log level 'bogus': invalid level: \"bogus\""]
        );

        assert!(matches!(
            logger.try_set_log_level("loud"),
            Err(LogError::UnknownLevel(_))
        ));
        assert_eq!(logger.try_set_log_level("NOTICE").unwrap(), Level::Notice);
        assert_eq!(logger.level(), Level::Notice);
    }

    #[test]
    fn test_debug_level_reports_caller() {
        let (logger, console) = capture();
        logger.set_log_level("debug");
        logger.debug("where", &[]);
        logger.set_level(Level::Info);
        logger.info("plain", &[]);

        let lines = console.lines();
        assert!(lines[0].starts_with("DEBU <src/logger.rs:"), "{}", lines[0]);
        assert_eq!(lines[1], "INFO plain");
    }

    #[test]
    fn test_set_level_cascades_to_descendants() {
        let (logger, _console) = capture();
        let child = logger.with_prefix("child");
        let grandchild = child.with(fields!["depth" => 2]);

        logger.set_level(Level::Error);
        assert_eq!(child.level(), Level::Error);
        assert_eq!(grandchild.level(), Level::Error);

        child.set_level(Level::Debug);
        assert_eq!(logger.level(), Level::Error);
        assert_eq!(grandchild.level(), Level::Debug);
    }

    #[test]
    fn test_dropped_children_are_pruned() {
        let (logger, _console) = capture();
        let kept = logger.with_prefix("kept");
        {
            let _gone = logger.with_prefix("gone");
            assert_eq!(logger.child_count(), 2);
        }
        assert_eq!(logger.child_count(), 1);
        logger.set_level(Level::Critical);
        assert_eq!(kept.level(), Level::Critical);
    }

    #[test]
    fn test_short_lived_children_do_not_accumulate() {
        let (logger, console) = capture();
        for i in 0..1_000 {
            logger.with(fields!["request" => i]).info("handled", &[]);
        }
        assert_eq!(console.len(), 1_000);
        // only the most recent child is still registered, and it is dead
        assert!(logger.inner.lock().children.len() <= 1);
        assert_eq!(logger.child_count(), 0);
    }

    #[test]
    fn test_children_inherit_options_at_creation() {
        let (logger, console) = capture();
        logger.set_level(Level::Debug);
        let sub = logger.with_prefix("sub");
        let tagged = sub.with(fields!["req" => "abc"]);

        logger.set_prefix("root");
        sub.set_time_format("%Y");
        assert_eq!(sub.prefix(), "sub");
        assert_eq!(logger.time_format(), "%H:%M:%S");

        tagged.set_report_caller(false);
        tagged.notice("hello", fields!["n" => 1]);
        assert_eq!(console.lines(), vec!["NOTI sub: hello req=abc n=1"]);
    }

    #[test]
    fn test_prefix_child_inherits_file_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("child.log");
        let (logger, _console) = capture();

        let before = logger.with_prefix("before");
        logger.set_log_file(&path);
        let after = logger.with_prefix("after");
        assert!(!before.has_mirror());
        assert!(after.has_mirror());
        // the child shares the mirror but does not own the file
        assert_eq!(after.log_file(), None);

        before.info("only console", &[]);
        after.info("mirrored", &[]);
        after.close_log_file();
        after.info("still mirrored", &[]);
        logger.close_log_file();
        after.info("parent closed", &[]);

        let lines = file_lines(&path);
        assert_eq!(lines, vec!["INFO after: mirrored", "INFO after: still mirrored"]);
    }

    #[test]
    fn test_child_can_attach_own_file() {
        let dir = tempdir().unwrap();
        let parent_path = dir.path().join("parent.log");
        let child_path = dir.path().join("child.log");
        let (logger, _console) = capture();

        logger.set_log_file(&parent_path);
        let child = logger.with_prefix("c");
        child.set_log_file(&child_path);
        child.info("to child file", &[]);
        logger.info("to parent file", &[]);
        child.close_log_file();
        logger.close_log_file();

        assert_eq!(file_lines(&child_path), vec!["INFO c: to child file"]);
        assert_eq!(file_lines(&parent_path), vec!["INFO to parent file"]);
    }

    #[test]
    fn test_mirror_threshold_follows_set_level() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("levels.log");
        let (logger, console) = capture();

        logger.set_log_file(&path);
        logger.set_level(Level::Warn);
        logger.info("dropped", &[]);
        logger.warn("kept", &[]);
        logger.close_log_file();

        assert_eq!(file_lines(&path), vec!["WARN kept"]);
        assert_eq!(console.lines(), vec!["WARN kept"]);
    }

    static EXITS: AtomicUsize = AtomicUsize::new(0);

    fn record_exit(code: i32) {
        assert_eq!(code, 1);
        EXITS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_fatal_mirrors_as_critical_and_exits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fatal.log");
        let (logger, console) = capture();
        logger.set_exit_hook(record_exit);
        logger.set_log_file(&path);
        let child = logger.with_prefix("worker");

        let before = EXITS.load(Ordering::SeqCst);
        logger.fatal("boom", fields!["code" => 3]);
        child.fatalf(format_args!("failed {}", 42));
        assert_eq!(EXITS.load(Ordering::SeqCst), before + 2);
        logger.close_log_file();

        assert_eq!(
            console.lines(),
            vec!["FATA boom code=3", "FATA worker: failed 42"]
        );
        assert_eq!(
            file_lines(&path),
            vec!["CRIT FATAL: boom code=3", "CRIT worker: FATAL: failed 42"]
        );
    }

    #[test]
    fn test_formatted_variants() {
        let (logger, console) = capture();
        logger.set_level(Level::Debug);
        logger.set_report_caller(false);
        logger.debugf(format_args!("d{}", 1));
        logger.infof(format_args!("i{}", 2));
        logger.noticef(format_args!("n{}", 3));
        logger.warnf(format_args!("w{}", 4));
        logger.errorf(format_args!("e{}", 5));
        logger.criticalf(format_args!("c{}", 6));

        assert_eq!(
            console.lines(),
            vec!["DEBU d1", "INFO i2", "NOTI n3", "WARN w4", "ERRO e5", "CRIT c6"]
        );
    }

    #[test]
    fn test_styles_apply_to_both_channels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("styles.log");
        let (logger, console) = capture();
        logger.set_log_file(&path);

        let mut styles = logger.default_styles();
        styles
            .levels
            .insert(Level::Info, crate::Style::new().with_text("INFORMATION").max_width(3));
        logger.set_styles(styles);
        logger.info("styled", &[]);
        logger.close_log_file();

        assert_eq!(console.lines(), vec!["INF styled"]);
        assert_eq!(file_lines(&path), vec!["INF styled"]);
    }

    #[test]
    fn test_set_console_redirects() {
        let (logger, first) = capture();
        let second = MemorySink::new();
        logger.set_console(second.clone());
        logger.info("moved", &[]);
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);

        logger.set_console(NoOpSink::new());
        logger.info("gone", &[]);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_apply_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.log");
        let (logger, console) = capture();

        let config = LoggerConfig {
            level: Some("warn".to_string()),
            prefix: Some("app".to_string()),
            time_format: Some("%Y".to_string()),
            file: Some(path.clone()),
            ..LoggerConfig::default()
        };
        logger.apply_config(&config);
        assert_eq!(logger.level(), Level::Warn);
        assert_eq!(logger.prefix(), "app");
        assert_eq!(logger.time_format(), "%Y");
        assert!(logger.has_mirror());

        logger.warn("configured", &[]);
        logger.close_log_file();
        assert_eq!(console.lines(), vec!["WARN app: configured"]);
        assert_eq!(file_lines(&path), vec!["WARN app: configured"]);
    }

    #[test]
    fn test_apply_config_with_bad_level_reports() {
        let (logger, console) = capture();
        let config = LoggerConfig {
            level: Some("chatty".to_string()),
            ..LoggerConfig::default()
        };
        logger.apply_config(&config);
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(console.len(), 1);
    }
}
