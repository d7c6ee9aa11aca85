//! Top-level shape of a Figma file export (`GET /v1/files/:key` saved to disk).

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{FigsumError, Result};

/// A parsed Figma export.
///
/// Only `document` is required. `name` and `lastModified` are kept as raw JSON so the
/// report can tell an absent key apart from an explicit `null`.
#[derive(Debug, Clone)]
pub struct FigmaExport {
    pub name: Option<Value>,
    pub last_modified: Option<Value>,
    pub document: Value,
}

/// Header fields, deserialized leniently: any JSON type is accepted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportHeader {
    #[serde(default, deserialize_with = "present")]
    name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    last_modified: Option<Value>,
}

/// Maps a present key to `Some`, including `null`; only an absent key becomes `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl FigmaExport {
    /// Parse an export with no nesting limit. Deep trees grow the stack on the heap
    /// while parsing instead of overflowing the thread stack.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(raw);
        de.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let mut root: Map<String, Value> = match value {
            Value::Object(map) => map,
            _ => return Err(FigsumError::MissingDocument),
        };
        let document = root.remove("document").ok_or(FigsumError::MissingDocument)?;
        let header: ExportHeader = serde_json::from_value(Value::Object(root))?;

        Ok(Self {
            name: header.name,
            last_modified: header.last_modified,
            document,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| FigsumError::read(path, e))?;
        log::debug!("Read {} bytes from {}", raw.len(), path.display());
        Self::from_json_str(&raw)
    }
}
