#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
mod indent;
pub mod logger;
pub mod record;
pub mod severity;
pub mod transport;

pub use bridge::LogBridge;
pub use config::Config;
pub use error::ConfigError;
pub use format::{ConsoleFormat, FileFormat, REDACTION_MARKER, RenderFormat};
pub use logger::{Logger, LoggerBuilder};
pub use record::{Message, Record};
pub use severity::Severity;
pub use transport::{CaptureSink, Output, RollingFileSink, Sink, StderrSink};

/// Logs at `error` with printf-style interpolation.
///
/// ```ignore
/// scrawl::log_error!(log, "write failed after {} attempts", attempts);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format!($($arg)*))
    };
}

/// Logs at `warn` with printf-style interpolation.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format!($($arg)*))
    };
}

/// Logs at `info` with printf-style interpolation.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format!($($arg)*))
    };
}

/// Logs at `indiscreet` with printf-style interpolation.
#[macro_export]
macro_rules! log_indiscreet {
    ($logger:expr, $($arg:tt)*) => {
        $logger.indiscreet(format!($($arg)*))
    };
}

/// Logs at `verbose` with printf-style interpolation.
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)*) => {
        $logger.verbose(format!($($arg)*))
    };
}

/// Logs at `debug` with printf-style interpolation.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format!($($arg)*))
    };
}

/// Logs at `hook` with printf-style interpolation.
#[macro_export]
macro_rules! log_hook {
    ($logger:expr, $($arg:tt)*) => {
        $logger.hook(format!($($arg)*))
    };
}
