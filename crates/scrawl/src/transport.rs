//! Output sinks and their pairing with render formatters.
//!
//! A [`Sink`] is an opaque consumer of fully rendered lines. It owns its own
//! buffering and rotation; the core hands it one line per emission plus the
//! original record for any sink-specific metadata. Sink failures are
//! swallowed: logging is a side effect, never a control-flow dependency, so
//! a write error neither retries nor propagates back into the caller.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::error::ConfigError;
use crate::format::RenderFormat;
use crate::record::Record;

/// An output sink consuming rendered log lines.
pub trait Sink: Send + Sync {
    /// Consume one rendered line. Must not panic and must not block the
    /// caller meaningfully; failures stay inside the sink.
    fn write_line(&self, line: &str, record: &Record);

    /// Flush any sink-internal buffering. Default is a no-op.
    fn flush(&self) {}
}

/// Interactive display sink writing styled lines to stderr.
#[derive(Debug, Default)]
pub struct StderrSink;

impl StderrSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write_line(&self, line: &str, _record: &Record) {
        // A broken stderr is not the caller's problem
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().lock().flush();
    }
}

/// Persisted file sink: hourly-rotating files named by date pattern.
///
/// Rotation produces files like `2026-08-08-14.log` in the configured
/// directory. Writes go through a non-blocking worker so a saturated disk
/// stalls the worker thread, not the log call; the worker is drained when
/// the sink (and with it the retained guard) is dropped.
pub struct RollingFileSink {
    writer: NonBlocking,
    _guard: WorkerGuard,
}

impl std::fmt::Debug for RollingFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingFileSink").finish_non_exhaustive()
    }
}

impl RollingFileSink {
    /// Open a rolling sink in `dir`, creating the directory if needed.
    pub fn new(dir: &Path) -> Result<Self, ConfigError> {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::HOURLY)
            .filename_suffix("log")
            .build(dir)
            .map_err(|err| ConfigError::LogDirUnavailable {
                path: dir.display().to_string(),
                reason: err.to_string(),
            })?;

        let (writer, guard) = tracing_appender::non_blocking(appender);
        Ok(Self {
            writer,
            _guard: guard,
        })
    }
}

impl Sink for RollingFileSink {
    fn write_line(&self, line: &str, _record: &Record) {
        // One write per line so concurrent emissions cannot interleave
        let mut writer = self.writer.clone();
        let _ = writer.write_all(format!("{line}\n").as_bytes());
    }

    fn flush(&self) {
        let _ = self.writer.clone().flush();
    }
}

/// In-memory sink recording rendered lines, for tests and assertions.
///
/// Clones share the same buffer, so a capture can be handed to a logger and
/// read afterwards.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines captured so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    /// Number of lines captured so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    /// Whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for CaptureSink {
    fn write_line(&self, line: &str, _record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// A mounted output: one render formatter paired with one sink.
pub struct Output {
    format: RenderFormat,
    sink: Box<dyn Sink>,
}

impl Output {
    /// Pair a formatter with a sink.
    #[must_use]
    pub fn new(format: RenderFormat, sink: impl Sink + 'static) -> Self {
        Self {
            format,
            sink: Box::new(sink),
        }
    }

    /// Render the record and hand the line to the sink.
    pub(crate) fn log(&self, record: &Record, indent: usize) {
        let line = self.format.render(record, indent);
        self.sink.write_line(&line, record);
    }

    pub(crate) fn flush(&self) {
        self.sink.flush();
    }
}
