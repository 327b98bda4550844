//! Error types for the rule and flight loaders.

use std::path::PathBuf;

/// Errors that can occur while reading rule or flight files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Filesystem I/O error.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse/deserialization error.
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parse/deserialization error.
    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// File extension is neither JSON nor YAML.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Two rule documents share an id.
    #[error("Duplicate rule id '{id}' in {path}")]
    DuplicateRule { id: String, path: PathBuf },

    /// No flight with the requested id.
    #[error("Flight not found: {0}")]
    FlightNotFound(String),
}

/// Result alias for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;
