use thiserror::Error;

/// A stored timestamp that could not be read as RFC 3339 / ISO-8601.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid timestamp {value:?}: {source}")]
pub struct TimestampError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}
