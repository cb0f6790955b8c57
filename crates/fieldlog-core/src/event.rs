//! Structured log events

use crate::level::LogLevel;
use serde::{Deserialize, Serialize};

/// A key/value pair attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    key: String,
    value: String,
}

impl Field {
    /// Create a new field
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a field from raw bytes
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`.
    pub fn from_bytes(key: &[u8], value: &[u8]) -> Self {
        Self {
            key: String::from_utf8_lossy(key).into_owned(),
            value: String::from_utf8_lossy(value).into_owned(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Field {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// One log occurrence
///
/// Events are immutable: the field sequence is fixed at construction, keeps
/// insertion order and retains duplicate keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    level: LogLevel,
    message: String,
    fields: Box<[Field]>,
}

impl Event {
    /// Create an event without fields
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: Box::default(),
        }
    }

    /// Create an event with an ordered field sequence
    pub fn with_fields(
        level: LogLevel,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            fields: fields.into_iter().collect(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Values of every field with the given key, in order
    pub fn values_of<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.key == key)
            .map(|f| f.value.as_str())
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<5} {}", self.level, self.message)?;
        for field in self.fields.iter() {
            write!(f, " {}={}", field.key, field.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "event/event_tests.rs"]
mod event_tests;
