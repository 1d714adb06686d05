//! JSON representation of a string table
//!
//! ```json
//! {
//!   "RMAG": "RST",
//!   "version": "5",
//!   "config": "optional",
//!   "entries": {
//!     "game_title": "League of Legends",
//!     "1a2b3c": "text keyed by a raw hash"
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Serialize,
};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

const VERSION: &str = "version";
const ENTRIES: &str = "entries";
const CONFIG: &str = "config";

/// A JSON document being converted to RST
///
/// Top-level field names are matched case-insensitively and unknown fields are skipped.
/// When a field appears more than once the first occurrence wins.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    version: Option<Value>,
    entries: Option<Value>,
    config: Option<Value>,
}

impl Document {
    /// Parse a document from raw JSON
    pub fn from_slice(data: &[u8]) -> serde_json::Result<Document> {
        serde_json::from_slice(data)
    }

    /// The declared version as a byte, if the document carries a usable one.
    ///
    /// Both `"5"` and `5` are accepted.
    pub fn declared_version(&self) -> Option<u8> {
        let value = self.version.as_ref()?;
        let byte = match value {
            Value::String(s) => s.trim().parse::<u8>().ok(),
            Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
            _ => None,
        };

        if byte.is_none() {
            warn!("ignoring version {} that is not a byte", value);
        }
        byte
    }

    /// Entries in declaration order, empty when `entries` is missing or not an object
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        let map = match &self.entries {
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                debug!("ignoring entries field of type {}", value_kind(other));
                None
            }
            None => None,
        };

        map.into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// The config blob, only when it is a string
    pub fn config(&self) -> Option<&str> {
        match &self.config {
            Some(Value::String(config)) => Some(config.as_str()),
            Some(other) => {
                debug!("ignoring config field of type {}", value_kind(other));
                None
            }
            None => None,
        }
    }
}

/// Text of an entry value. Strings are taken as-is, `null` is empty and
/// anything else keeps its JSON spelling, numbers exactly as written.
pub fn entry_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct DocumentVisitor {}

impl DocumentVisitor {
    fn new() -> Self {
        DocumentVisitor {}
    }
}

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string table object")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut document = Document::default();

        while let Some(key) = access.next_key::<String>()? {
            let slot = match key.to_ascii_lowercase().as_str() {
                VERSION => &mut document.version,
                ENTRIES => &mut document.entries,
                CONFIG => &mut document.config,
                _ => {
                    access.next_value::<IgnoredAny>()?;
                    continue;
                }
            };

            if slot.is_some() {
                access.next_value::<IgnoredAny>()?;
            } else {
                *slot = Some(access.next_value::<Value>()?);
            }
        }

        Ok(document)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DocumentVisitor::new())
    }
}

/// A JSON document produced from a RST file
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DecodedDocument<'a> {
    /// Identifies the source format
    #[serde(rename = "RMAG")]
    pub magic: &'a str,
    /// Version as decimal text
    pub version: String,
    /// Config blob, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<&'a str>,
    /// Entry names (or hex hashes) to text
    pub entries: IndexMap<String, &'a str>,
}
