//! Format detection and record decoding shared by the loaders.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::error::{LoadError, Result};

/// Supported on-disk encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Format::Json),
            Some("yml") | Some("yaml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Read a file holding either a single record or a list of records.
pub(super) fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let format = Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_records(&content, format).map_err(|e| e.at(path))
}

/// Decode `content`; a top-level sequence yields many records, anything else one.
fn decode_records<T: DeserializeOwned>(
    content: &str,
    format: Format,
) -> std::result::Result<Vec<T>, DecodeError> {
    match format {
        Format::Json => {
            let value: serde_json::Value = serde_json::from_str(content).map_err(DecodeError::Json)?;
            match value {
                serde_json::Value::Array(items) => items
                    .into_iter()
                    .map(|v| serde_json::from_value(v).map_err(DecodeError::Json))
                    .collect(),
                other => Ok(vec![serde_json::from_value(other).map_err(DecodeError::Json)?]),
            }
        }
        Format::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(DecodeError::Yaml)?;
            match value {
                // Empty document.
                serde_yaml::Value::Null => Ok(Vec::new()),
                serde_yaml::Value::Sequence(items) => items
                    .into_iter()
                    .map(|v| serde_yaml::from_value(v).map_err(DecodeError::Yaml))
                    .collect(),
                other => Ok(vec![serde_yaml::from_value(other).map_err(DecodeError::Yaml)?]),
            }
        }
    }
}

enum DecodeError {
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl DecodeError {
    fn at(self, path: &Path) -> LoadError {
        let path = path.to_path_buf();
        match self {
            DecodeError::Json(source) => LoadError::Json { path, source },
            DecodeError::Yaml(source) => LoadError::Yaml { path, source },
        }
    }
}
