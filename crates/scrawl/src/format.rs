//! Render formatters for the two output variants.
//!
//! Both variants share one line shape, joined by single spaces:
//!
//! ```text
//! [ <label> ] <severity> : <message>
//! ```
//!
//! The console variant styles the severity token and carries no timestamp;
//! the file variant prefixes a timestamp, never emits styling codes, and
//! redacts `indiscreet` bodies. Formatting never fails and never panics:
//! whatever happens to the payload, the caller's control flow is untouched.

use console::Style;

use crate::record::Record;
use crate::severity::Severity;

/// Marker substituted for `indiscreet` message bodies in persisted output.
pub const REDACTION_MARKER: &str = "Redacted";

/// Timestamp pattern for persisted lines: `year-day-month_hour:minute:second`,
/// 12-hour clock.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%d-%m_%I:%M:%S";

/// Left-pad a message body with `indent` repetitions of the pad token.
fn pad_message(body: &str, token: &str, indent: usize) -> String {
    if indent == 0 {
        return body.to_string();
    }
    let mut padded = token.repeat(indent);
    padded.push_str(body);
    padded
}

/// Formatter for interactive display output.
///
/// Severity tokens are styled per level: red for `error`, yellow for `warn`,
/// green shared by `info` and `indiscreet`, magenta for `verbose`, blue for
/// `hook`. `debug` gets no token style; the entire line is dimmed instead.
#[derive(Debug, Clone)]
pub struct ConsoleFormat {
    styles: [Style; 7],
    line_style: Style,
    pad_token: String,
}

impl ConsoleFormat {
    /// Styled formatter. Styling is forced so rendered output does not
    /// depend on terminal detection at call time.
    #[must_use]
    pub fn styled(pad_token: &str) -> Self {
        Self {
            styles: std::array::from_fn(|rank| {
                Severity::ALL[rank].token_style().force_styling(true)
            }),
            line_style: Style::new().dim().force_styling(true),
            pad_token: pad_token.to_string(),
        }
    }

    /// Plain formatter; no styling codes are ever emitted.
    #[must_use]
    pub fn plain(pad_token: &str) -> Self {
        Self {
            styles: std::array::from_fn(|_| Style::new()),
            line_style: Style::new(),
            pad_token: pad_token.to_string(),
        }
    }

    /// Styled or plain depending on whether the stderr stream supports
    /// colors.
    #[must_use]
    pub fn detect(pad_token: &str) -> Self {
        if console::Term::stderr().features().colors_supported() {
            Self::styled(pad_token)
        } else {
            Self::plain(pad_token)
        }
    }

    /// Render one record as a console line. No timestamp, no redaction: the
    /// interactive display is treated as ephemeral and trusted.
    #[must_use]
    pub fn format(&self, record: &Record, indent: usize) -> String {
        let token =
            self.styles[record.severity.rank() as usize].apply_to(record.severity.as_str());
        let body = pad_message(&record.message.render(), &self.pad_token, indent);
        let line = format!("[ {} ] {} : {}", record.label, token, body);

        match record.severity {
            Severity::Debug => self.line_style.apply_to(line).to_string(),
            _ => line,
        }
    }
}

/// Formatter for persisted file output.
///
/// Every line is prefixed with a [`FILE_TIMESTAMP_FORMAT`] timestamp and is
/// always plain text. `indiscreet` records are redacted here and only here:
/// the file is durable and exposed, while the console is ephemeral, so the
/// console formatter deliberately keeps printing the body. A redacted line
/// still records that a secret-generating operation ran at that time.
#[derive(Debug, Clone)]
pub struct FileFormat {
    pad_token: String,
}

impl FileFormat {
    #[must_use]
    pub fn new(pad_token: &str) -> Self {
        Self {
            pad_token: pad_token.to_string(),
        }
    }

    /// Render one record as a persisted line.
    #[must_use]
    pub fn format(&self, record: &Record, indent: usize) -> String {
        let stamp = record.created_at.format(FILE_TIMESTAMP_FORMAT);

        if record.severity == Severity::Indiscreet {
            return format!(
                "{stamp} [ {} ] {} : {}",
                record.label, record.severity, REDACTION_MARKER
            );
        }

        let body = pad_message(&record.message.render(), &self.pad_token, indent);
        format!("{stamp} [ {} ] {} : {}", record.label, record.severity, body)
    }
}

/// The closed set of render formatters an output can mount.
#[derive(Debug, Clone)]
pub enum RenderFormat {
    /// Interactive display variant.
    Console(ConsoleFormat),
    /// Persisted file variant.
    File(FileFormat),
}

impl RenderFormat {
    /// Render a record through whichever variant this is.
    #[must_use]
    pub fn render(&self, record: &Record, indent: usize) -> String {
        match self {
            RenderFormat::Console(format) => format.format(record, indent),
            RenderFormat::File(format) => format.format(record, indent),
        }
    }
}
