//! Token payloads.
//!
//! A payload is either a structured record or an opaque string. Records
//! travel as compact JSON objects; on the way back, plaintext that parses
//! as a JSON object becomes a record again and everything else stays a
//! raw string.

use std::fmt;

use serde_json::Value;

use crate::core::types::Record;
use crate::error::{Result, TokenError};

/// Plaintext carried inside a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Key/value record, serialized as a JSON object.
    Record(Record),
    /// Opaque string, carried verbatim.
    Raw(String),
}

impl Payload {
    /// Build a single-entry record, e.g. `{"role": "provider"}`.
    pub fn pair(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut record = Record::new();
        record.insert(key.into(), value.into());
        Self::Record(record)
    }

    /// Serialize to plaintext for encryption.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Payload` if the record cannot be serialized.
    pub fn to_plaintext(&self) -> Result<String> {
        match self {
            Self::Record(record) => Ok(serde_json::to_string(record).map_err(TokenError::from)?),
            Self::Raw(s) => Ok(s.clone()),
        }
    }

    /// Interpret decrypted plaintext.
    ///
    /// JSON objects become records. Anything else, including JSON scalars
    /// and arrays, is kept as the raw string so that `"42"` stays `"42"`.
    pub fn from_plaintext(plaintext: String) -> Self {
        match serde_json::from_str::<Value>(&plaintext) {
            Ok(Value::Object(record)) => Self::Record(record),
            _ => Self::Raw(plaintext),
        }
    }

    /// Look up a field in a record payload.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Record(record) => record.get(key),
            Self::Raw(_) => None,
        }
    }

    /// Look up a string field in a record payload.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            Self::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(s) => Some(s),
            Self::Record(_) => None,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<Record> for Payload {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(record) => match serde_json::to_string(record) {
                Ok(json) => f.write_str(&json),
                Err(_) => Err(fmt::Error),
            },
            Self::Raw(s) => f.write_str(s),
        }
    }
}
