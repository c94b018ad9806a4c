//! Bridge from the standard [`log`] facade.
//!
//! Installing the bridge routes every `log::info!`-style call from the rest
//! of the process into a [`Logger`], so third-party crates logging through
//! the facade share the same transports, threshold, and formatting.
//!
//! The five facade levels map onto the seven severities monotonically by
//! priority:
//!
//! | `log::Level` | Severity  |
//! |--------------|-----------|
//! | `Error`      | `error`   |
//! | `Warn`       | `warn`    |
//! | `Info`       | `info`    |
//! | `Debug`      | `verbose` |
//! | `Trace`      | `debug`   |
//!
//! `indiscreet` and `hook` have no facade counterpart and are only reachable
//! through the logger's own methods.

use log::{Level, LevelFilter, Log, Metadata, Record as LogRecord, SetLoggerError};

use crate::logger::Logger;
use crate::severity::Severity;

/// Map a facade level to its severity.
#[must_use]
pub fn severity_for(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warn,
        Level::Info => Severity::Info,
        Level::Debug => Severity::Verbose,
        Level::Trace => Severity::Debug,
    }
}

/// The loosest facade filter that still admits everything the threshold
/// admits.
#[must_use]
pub fn level_filter(threshold: Severity) -> LevelFilter {
    match threshold {
        Severity::Error => LevelFilter::Error,
        Severity::Warn => LevelFilter::Warn,
        Severity::Info | Severity::Indiscreet => LevelFilter::Info,
        Severity::Verbose => LevelFilter::Debug,
        Severity::Debug | Severity::Hook => LevelFilter::Trace,
    }
}

/// A [`log::Log`] implementation forwarding into a [`Logger`].
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    /// Wrap a logger without installing it globally.
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Install the wrapped logger as the global facade backend.
    ///
    /// Returns an error if a global logger has already been set.
    pub fn init(logger: Logger) -> Result<(), SetLoggerError> {
        let filter = level_filter(logger.threshold());
        log::set_boxed_logger(Box::new(Self::new(logger)))?;
        log::set_max_level(filter);
        Ok(())
    }

    /// Install, ignoring the error if a global logger is already set.
    pub fn try_init(logger: Logger) {
        let _ = Self::init(logger);
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        severity_for(metadata.level()).emits_at(self.logger.threshold())
    }

    fn log(&self, record: &LogRecord) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.logger
            .log(severity_for(record.level()), record.args().to_string());
    }

    fn flush(&self) {
        self.logger.flush();
    }
}
