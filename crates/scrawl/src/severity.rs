//! Severity model: seven named levels with fixed numeric ranks.
//!
//! Ranks are unique and fixed for the process lifetime; a lower rank means a
//! higher priority. A record is emitted iff its rank is less than or equal to
//! the rank of the configured threshold, so `error` always gets through and
//! `hook` only appears when everything is let through.
//!
//! | Level        | Rank | Meaning                                        |
//! |--------------|------|------------------------------------------------|
//! | `error`      | 0    | Unrecoverable failures                         |
//! | `warn`       | 1    | Recoverable issues needing attention           |
//! | `info`       | 2    | Lifecycle events (default threshold)           |
//! | `indiscreet` | 3    | Secret-bearing output, redacted on disk        |
//! | `verbose`    | 4    | Detailed operational flow                      |
//! | `debug`      | 5    | Diagnostic detail                              |
//! | `hook`       | 6    | Hook/callback tracing                          |

use std::fmt;
use std::str::FromStr;

use console::Style;

use crate::error::ConfigError;

/// A named log level with an associated priority rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Rank 0, highest priority.
    Error,
    /// Rank 1.
    Warn,
    /// Rank 2, the default threshold.
    Info,
    /// Rank 3. Carries secrets; the file formatter redacts it.
    Indiscreet,
    /// Rank 4.
    Verbose,
    /// Rank 5. Rendered dimmed on the console.
    Debug,
    /// Rank 6, lowest priority.
    Hook,
}

impl Severity {
    /// All severities in rank order.
    pub const ALL: [Severity; 7] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Indiscreet,
        Severity::Verbose,
        Severity::Debug,
        Severity::Hook,
    ];

    /// Numeric priority rank. Lower is more important.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warn => 1,
            Severity::Info => 2,
            Severity::Indiscreet => 3,
            Severity::Verbose => 4,
            Severity::Debug => 5,
            Severity::Hook => 6,
        }
    }

    /// Lowercase display token, as it appears in rendered lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Indiscreet => "indiscreet",
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Hook => "hook",
        }
    }

    /// Whether a record at this severity passes the given threshold.
    #[must_use]
    pub fn emits_at(self, threshold: Severity) -> bool {
        self.rank() <= threshold.rank()
    }

    /// Console style for the severity token.
    ///
    /// `info` and `indiscreet` share a style; `debug` has no token style of
    /// its own because the console formatter dims the entire line instead.
    #[must_use]
    pub(crate) fn token_style(self) -> Style {
        match self {
            Severity::Error => Style::new().red(),
            Severity::Warn => Style::new().yellow(),
            Severity::Info | Severity::Indiscreet => Style::new().green(),
            Severity::Verbose => Style::new().magenta(),
            Severity::Debug => Style::new(),
            Severity::Hook => Style::new().blue(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    /// Case-insensitive parse of a severity name. `warning` is accepted as
    /// an alias for `warn`; anything else unrecognized is a hard error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "indiscreet" => Ok(Severity::Indiscreet),
            "verbose" => Ok(Severity::Verbose),
            "debug" => Ok(Severity::Debug),
            "hook" => Ok(Severity::Hook),
            _ => Err(ConfigError::UnknownSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_unique_and_ordered() {
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(severity.rank() as usize, i);
        }
        // Derived ordering follows rank order
        assert!(Severity::Error < Severity::Warn);
        assert!(Severity::Indiscreet < Severity::Verbose);
        assert!(Severity::Debug < Severity::Hook);
    }

    #[test]
    fn emission_against_info_threshold() {
        let threshold = Severity::Info;
        assert!(Severity::Error.emits_at(threshold));
        assert!(Severity::Warn.emits_at(threshold));
        assert!(Severity::Info.emits_at(threshold));
        assert!(!Severity::Indiscreet.emits_at(threshold));
        assert!(!Severity::Verbose.emits_at(threshold));
        assert!(!Severity::Debug.emits_at(threshold));
        assert!(!Severity::Hook.emits_at(threshold));
    }

    #[test]
    fn emission_at_extremes() {
        for severity in Severity::ALL {
            assert!(severity.emits_at(Severity::Hook));
        }
        for severity in Severity::ALL {
            assert_eq!(severity.emits_at(Severity::Error), severity == Severity::Error);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("Warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("indiscreet".parse::<Severity>().unwrap(), Severity::Indiscreet);
        assert_eq!("hook".parse::<Severity>().unwrap(), Severity::Hook);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "silly".parse::<Severity>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSeverity(name) if name == "silly"));
    }

    #[test]
    fn display_matches_token() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string(), severity.as_str());
        }
    }
}
