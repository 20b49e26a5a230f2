//! Classification and decoding of captured command output.
//!
//! Cloud CLIs answer with JSON for queries (`--query "[].name"`), with a
//! quoted JSON string for scalar queries (`--query id`), and with bare text
//! otherwise. The leading characters of the trimmed output decide which.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::RunError;

/// Terminal color-reset sequence some CLIs append to colorized output.
pub const COLOR_RESET: &str = "\x1b[0m";

/// How trimmed output is turned into a [`CommandResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Returned unchanged.
    PlainText,
    /// Starts and ends with a double quote; one of each is removed.
    /// A lone `"` decodes to empty text.
    QuotedText,
    /// A JSON array.
    List,
    /// A JSON object.
    Mapping,
}

/// The decoded value of a successful command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandResult {
    /// Plain text, trimmed of surrounding whitespace.
    Text(String),
    /// An ordered list of decoded values.
    List(Vec<Value>),
    /// A mapping from string keys to decoded values.
    Mapping(Map<String, Value>),
}

impl CommandResult {
    /// The text, if this result is plain text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The items, if this result is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this result is a mapping.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Whether a list result contains the given string item.
    ///
    /// Handy for membership checks such as "does this resource group exist"
    /// against `az group list --query "[].name"`.
    #[must_use]
    pub fn contains_str(&self, needle: &str) -> bool {
        self.as_list().is_some_and(|items| items.iter().any(|v| v.as_str() == Some(needle)))
    }
}

/// Decides the decode policy from already-trimmed output.
#[must_use]
pub fn classify(trimmed: &str) -> DecodePolicy {
    if trimmed.starts_with('[') {
        DecodePolicy::List
    } else if trimmed.starts_with('{') {
        DecodePolicy::Mapping
    } else if trimmed.starts_with('"') && trimmed.ends_with('"') {
        DecodePolicy::QuotedText
    } else {
        DecodePolicy::PlainText
    }
}

/// Decodes raw standard output into a [`CommandResult`].
///
/// # Errors
///
/// Returns [`RunError::DecodeFailure`] when output starting with `[` or `{`
/// is not valid JSON of that shape.
pub fn decode(stdout: &str) -> Result<CommandResult, RunError> {
    let trimmed = stdout.trim();
    match classify(trimmed) {
        DecodePolicy::PlainText => Ok(CommandResult::Text(trimmed.to_string())),
        DecodePolicy::QuotedText => {
            let inner = trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"'));
            Ok(CommandResult::Text(inner.unwrap_or_default().to_string()))
        }
        DecodePolicy::List => {
            Ok(CommandResult::List(serde_json::from_str(strip_color_reset(trimmed))?))
        }
        DecodePolicy::Mapping => {
            Ok(CommandResult::Mapping(serde_json::from_str(strip_color_reset(trimmed))?))
        }
    }
}

fn strip_color_reset(text: &str) -> &str {
    text.strip_suffix(COLOR_RESET).map_or(text, str::trim_end)
}
