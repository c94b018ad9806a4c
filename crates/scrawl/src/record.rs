//! Log records and message bodies.
//!
//! A [`Record`] is built fresh per log call, handed synchronously to every
//! mounted output, and never retained. Message bodies are either plain text
//! or a structured JSON value; structured bodies serialize to compact JSON
//! when rendered.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::severity::Severity;

/// A message body: plain text or a structured value.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Text passed through unchanged (aside from indentation padding).
    Text(String),
    /// A structured value, rendered as compact JSON.
    Structured(serde_json::Value),
}

impl Message {
    /// Build a structured message from any serializable value.
    ///
    /// A value that cannot be converted to JSON degrades to its `Debug`
    /// rendering instead of failing; a log call never errors because of its
    /// payload.
    pub fn serialize<T: Serialize + fmt::Debug>(value: &T) -> Message {
        match serde_json::to_value(value) {
            Ok(json) => Message::Structured(json),
            Err(_) => Message::Text(format!("{value:?}")),
        }
    }

    /// Render the body to the canonical textual form.
    #[must_use]
    pub(crate) fn render(&self) -> String {
        match self {
            Message::Text(text) => text.clone(),
            Message::Structured(value) => {
                serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
            }
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<serde_json::Value> for Message {
    fn from(value: serde_json::Value) -> Self {
        Message::Structured(value)
    }
}

/// One log emission: severity, owning logger's label, body, creation time.
///
/// The timestamp is captured at creation but only the file formatter renders
/// it; console lines carry no timestamp.
#[derive(Debug, Clone)]
pub struct Record {
    /// Severity the call was made at.
    pub severity: Severity,
    /// Label of the logger instance that produced the record.
    pub label: Arc<str>,
    /// Message body.
    pub message: Message,
    /// Local time the record was created.
    pub created_at: DateTime<Local>,
}

impl Record {
    pub(crate) fn new(severity: Severity, label: Arc<str>, message: Message) -> Self {
        Self {
            severity,
            label,
            message,
            created_at: Local::now(),
        }
    }
}
