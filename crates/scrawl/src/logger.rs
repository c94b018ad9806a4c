//! The logger facade.
//!
//! A [`Logger`] composes the severity model, the render formatters, the
//! indentation state, and the mounted outputs into one callable per
//! severity plus `increase()`/`decrease()`. Emission is synchronous: each
//! call builds a record, reads the indent depth once, renders per output,
//! and hands the lines to the sinks before returning.

use std::sync::Arc;

use crate::config::Config;
use crate::error::ConfigError;
use crate::format::{ConsoleFormat, FileFormat, RenderFormat};
use crate::indent::IndentState;
use crate::record::{Message, Record};
use crate::severity::Severity;
use crate::transport::{Output, RollingFileSink, StderrSink};

/// A structured, multi-transport logger.
///
/// # Example
///
/// ```no_run
/// use scrawl::{Config, Logger, Severity};
///
/// let config = Config::new().with_threshold(Severity::Debug);
/// let log = Logger::with_config("svc", config)?;
///
/// log.info("starting up");
/// log.increase();
/// log.debug("loading config");
/// log.decrease();
/// # Ok::<(), scrawl::ConfigError>(())
/// ```
pub struct Logger {
    label: Arc<str>,
    threshold: Severity,
    indent: IndentState,
    outputs: Vec<Output>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("label", &self.label)
            .field("threshold", &self.threshold)
            .field("indent", &self.indent)
            .field("outputs", &self.outputs.len())
            .finish()
    }
}

impl Logger {
    /// Construct from environment configuration (see
    /// [`Config::from_env`]). Fails fast on misconfiguration.
    pub fn new(label: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(label).build()
    }

    /// Construct with an explicit configuration.
    pub fn with_config(label: impl Into<String>, config: Config) -> Result<Self, ConfigError> {
        Self::builder(label).config(config).build()
    }

    /// Start a builder for custom output wiring.
    #[must_use]
    pub fn builder(label: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(label)
    }

    /// The construction-time label carried by every rendered line.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The active minimum severity.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Emit a record at the given severity. Suppressed entirely when the
    /// severity does not pass the threshold.
    pub fn log(&self, severity: Severity, message: impl Into<Message>) {
        if !severity.emits_at(self.threshold) {
            return;
        }

        let record = Record::new(severity, Arc::clone(&self.label), message.into());
        let indent = self.indent.depth();
        for output in &self.outputs {
            output.log(&record, indent);
        }
    }

    /// Log at `error` (rank 0).
    pub fn error(&self, message: impl Into<Message>) {
        self.log(Severity::Error, message);
    }

    /// Log at `warn` (rank 1).
    pub fn warn(&self, message: impl Into<Message>) {
        self.log(Severity::Warn, message);
    }

    /// Log at `info` (rank 2).
    pub fn info(&self, message: impl Into<Message>) {
        self.log(Severity::Info, message);
    }

    /// Log at `indiscreet` (rank 3). The message is redacted from persisted
    /// output but still shown on the console.
    pub fn indiscreet(&self, message: impl Into<Message>) {
        self.log(Severity::Indiscreet, message);
    }

    /// Log at `verbose` (rank 4).
    pub fn verbose(&self, message: impl Into<Message>) {
        self.log(Severity::Verbose, message);
    }

    /// Log at `debug` (rank 5).
    pub fn debug(&self, message: impl Into<Message>) {
        self.log(Severity::Debug, message);
    }

    /// Log at `hook` (rank 6).
    pub fn hook(&self, message: impl Into<Message>) {
        self.log(Severity::Hook, message);
    }

    /// Deepen nesting by one level, saturating at the configured maximum.
    /// Indentation is a property of the logger, shared by all severities
    /// and all outputs.
    pub fn increase(&self) {
        self.indent.increase();
    }

    /// Reduce nesting by one level, saturating at zero.
    pub fn decrease(&self) {
        self.indent.decrease();
    }

    /// Ask every mounted sink to flush its buffering.
    pub fn flush(&self) {
        for output in &self.outputs {
            output.flush();
        }
    }
}

/// Builder for custom logger wiring.
///
/// Without explicit outputs, `build` mounts the standard pair: a styled
/// console output on stderr, plus a rotating file output when the config
/// carries a log directory.
pub struct LoggerBuilder {
    label: String,
    config: Option<Config>,
    outputs: Vec<Output>,
}

impl LoggerBuilder {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            config: None,
            outputs: Vec::new(),
        }
    }

    /// Use an explicit configuration instead of reading the environment.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Mount an output. Providing any output suppresses the standard
    /// console/file pair.
    #[must_use]
    pub fn output(mut self, output: Output) -> Self {
        self.outputs.push(output);
        self
    }

    /// Build the logger, failing fast on configuration errors.
    pub fn build(self) -> Result<Logger, ConfigError> {
        let config = match self.config {
            Some(config) => config,
            None => Config::from_env()?,
        };

        let mut outputs = self.outputs;
        if outputs.is_empty() {
            outputs.push(Output::new(
                RenderFormat::Console(ConsoleFormat::detect(&config.pad_token)),
                StderrSink::new(),
            ));
            if let Some(dir) = &config.log_dir {
                outputs.push(Output::new(
                    RenderFormat::File(FileFormat::new(&config.pad_token)),
                    RollingFileSink::new(dir)?,
                ));
            }
        }

        Ok(Logger {
            label: Arc::from(self.label),
            threshold: config.threshold,
            indent: IndentState::new(config.max_indent),
            outputs,
        })
    }
}
