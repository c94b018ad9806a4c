//! Logger configuration.
//!
//! `Config` is an explicit structure with typed fields and documented
//! defaults, validated once when it is built. Environment-sourced
//! construction fails fast on values it cannot understand instead of
//! degrading silently.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::severity::Severity;

/// Default directory for persisted logs.
pub const DEFAULT_LOG_DIR: &str = "./log";

/// Default pad token prepended once per indent level.
pub const DEFAULT_PAD_TOKEN: &str = "..";

/// Default maximum indent depth.
pub const DEFAULT_MAX_INDENT: usize = 4;

/// Configuration consumed by [`Logger`](crate::Logger) construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum severity that reaches the transports.
    pub threshold: Severity,
    /// Directory for the rotating file sink; `None` disables file output.
    pub log_dir: Option<PathBuf>,
    /// Token repeated once per indent level in front of message bodies.
    pub pad_token: String,
    /// Upper bound for the indent counter.
    pub max_indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            log_dir: Some(PathBuf::from(DEFAULT_LOG_DIR)),
            pad_token: DEFAULT_PAD_TOKEN.to_string(),
            max_indent: DEFAULT_MAX_INDENT,
        }
    }
}

impl Config {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable       | Default | Description                                 |
    /// |----------------|---------|---------------------------------------------|
    /// | `LOG_LEVEL`    | `info`  | Minimum severity name                       |
    /// | `LOG_DIR`      | `./log` | Log directory; empty disables file output   |
    /// | `LOG_TAB_CHAR` | `..`    | Indentation pad token                       |
    /// | `LOG_MAX_TAB`  | `4`     | Maximum indent depth                        |
    ///
    /// An unrecognized `LOG_LEVEL` or a non-numeric `LOG_MAX_TAB` is a
    /// [`ConfigError`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` delegates here; tests
    /// pass a closure over a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("LOG_LEVEL") {
            if !level.is_empty() {
                config.threshold = level.parse()?;
            }
        }

        if let Some(dir) = lookup("LOG_DIR") {
            config.log_dir = if dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            };
        }

        if let Some(token) = lookup("LOG_TAB_CHAR") {
            if !token.is_empty() {
                config.pad_token = token;
            }
        }

        if let Some(raw) = lookup("LOG_MAX_TAB") {
            config.max_indent = raw
                .parse()
                .map_err(|_| ConfigError::InvalidMaxIndent(raw))?;
        }

        Ok(config)
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Set the minimum severity threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the log directory for the file sink.
    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Disable file output entirely.
    #[must_use]
    pub fn without_file_output(mut self) -> Self {
        self.log_dir = None;
        self
    }

    /// Set the indentation pad token.
    #[must_use]
    pub fn with_pad_token(mut self, token: impl Into<String>) -> Self {
        self.pad_token = token.into();
        self
    }

    /// Set the maximum indent depth.
    #[must_use]
    pub fn with_max_indent(mut self, max: usize) -> Self {
        self.max_indent = max;
        self
    }
}
