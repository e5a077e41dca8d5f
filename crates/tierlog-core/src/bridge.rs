//! Bridge from the `log` crate
//!
//! A [`Logger`] implements [`log::Log`], so records from `log::info!` and
//! friends (in this crate's users or their dependencies) go through the same
//! channels as direct calls. `log` has no Notice, Critical or Fatal;
//! `Trace` folds into Debug.

use log::{LevelFilter, Metadata};

use crate::level::Level;
use crate::logger::Logger;
use crate::record::Field;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

impl Level {
    /// Most verbose `log` level that can pass a threshold of `self`
    pub fn log_filter(&self) -> LevelFilter {
        match self {
            Level::Debug => LevelFilter::Trace,
            Level::Info => LevelFilter::Info,
            Level::Notice | Level::Warn => LevelFilter::Warn,
            Level::Error => LevelFilter::Error,
            Level::Critical | Level::Fatal => LevelFilter::Off,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = Level::from(record.level());
        if !Logger::enabled(self, level) {
            return;
        }
        let message = record.args().to_string();
        let fields = [Field::new("target", record.target())];
        self.emit(level, &message, &fields, None);
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use log::Log;

    fn capture() -> (Logger, MemorySink) {
        let console = MemorySink::new();
        let logger = Logger::with_sink(console.clone());
        logger.set_report_timestamp(false);
        (logger, console)
    }

    fn send(logger: &Logger, level: log::Level, message: &str) {
        Log::log(
            logger,
            &log::Record::builder()
                .level(level)
                .target("deps::net")
                .args(format_args!("{message}"))
                .build(),
        );
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
        assert_eq!(Level::from(log::Level::Error), Level::Error);
    }

    #[test]
    fn test_log_filter_matches_threshold() {
        for threshold in Level::ALL {
            for level in [
                log::Level::Error,
                log::Level::Warn,
                log::Level::Info,
                log::Level::Debug,
                log::Level::Trace,
            ] {
                assert_eq!(
                    level <= threshold.log_filter(),
                    Level::from(level) >= threshold,
                    "{level} at {threshold}"
                );
            }
        }
    }

    #[test]
    fn test_records_reach_the_console() {
        let (logger, console) = capture();
        logger.set_level(Level::Warn);

        send(&logger, log::Level::Info, "dropped");
        send(&logger, log::Level::Warn, "retrying");
        send(&logger, log::Level::Error, "gave up");

        assert_eq!(
            console.lines(),
            vec![
                "WARN retrying target=deps::net",
                "ERRO gave up target=deps::net",
            ]
        );
    }

    #[test]
    fn test_enabled_follows_threshold() {
        let (logger, _console) = capture();
        let warn = Metadata::builder().level(log::Level::Warn).build();
        let trace = Metadata::builder().level(log::Level::Trace).build();
        assert!(Log::enabled(&logger, &warn));
        assert!(!Log::enabled(&logger, &trace));

        logger.set_level(Level::Debug);
        assert!(Log::enabled(&logger, &trace));
    }

    #[test]
    fn test_trace_without_caller_at_debug() {
        let (logger, console) = capture();
        logger.set_level(Level::Debug);
        send(&logger, log::Level::Trace, "fine grained");
        assert_eq!(console.lines(), vec!["DEBU fine grained target=deps::net"]);
    }
}
