//! Configuration error types.
//!
//! Logger construction validates its configuration up front and fails fast
//! rather than degrading silently. Everything after construction follows the
//! opposite policy: formatting and sink failures are absorbed so a log call
//! can never disturb the caller's control flow.

/// Errors raised while building a [`Logger`](crate::Logger) or a
/// [`Config`](crate::Config).
#[derive(Debug)]
pub enum ConfigError {
    /// A severity threshold name that is not one of the seven known levels.
    UnknownSeverity(String),
    /// A maximum indent depth that does not parse as an unsigned integer.
    InvalidMaxIndent(String),
    /// The log directory could not be created or opened for the file sink.
    LogDirUnavailable {
        /// Directory the file sink was asked to write into.
        path: String,
        /// Underlying sink initialization failure.
        reason: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownSeverity(name) => {
                write!(f, "unknown severity level: {name:?}")
            }
            ConfigError::InvalidMaxIndent(raw) => {
                write!(f, "invalid maximum indent depth: {raw:?}")
            }
            ConfigError::LogDirUnavailable { path, reason } => {
                write!(f, "log directory {path:?} unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_value() {
        let err = ConfigError::UnknownSeverity("loud".to_string());
        assert!(err.to_string().contains("loud"));

        let err = ConfigError::InvalidMaxIndent("four".to_string());
        assert!(err.to_string().contains("four"));

        let err = ConfigError::LogDirUnavailable {
            path: "/nope".to_string(),
            reason: "permission denied".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("/nope"));
        assert!(text.contains("permission denied"));
    }
}
