// Domain errors - Error types for the domain layer

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Domain-specific error types
///
/// Every variant carries a human-readable detail. Details never include
/// paths from a job's scratch directory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed timestamp
    #[error("Invalid timestamp '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// Cut whose start is not strictly before its end
    #[error("Invalid cut range: {0}")]
    InvalidCutRange(String),

    /// Source could not be retrieved
    #[error("Failed to fetch source: {0}")]
    Fetch(String),

    /// Duration of the source is unknown
    #[error("Failed to probe media duration: {0}")]
    Probe(String),

    /// One keep segment could not be extracted
    #[error("Segment extraction failed: {0}")]
    Extraction(String),

    /// Final merge of the extracted segments failed
    #[error("Concatenation failed: {0}")]
    Concatenation(String),

    /// The cut list removes the whole timeline
    #[error("Nothing left to keep: {0}")]
    EmptyResult(String),

    /// Working storage failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Machine-checkable error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ParseError,
    InvalidCutRange,
    FetchError,
    ProbeError,
    ExtractionError,
    ConcatenationError,
    EmptyResultError,
    IoError,
    ConfigError,
}

impl DomainError {
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Parse { .. } => ErrorKind::ParseError,
            DomainError::InvalidCutRange(_) => ErrorKind::InvalidCutRange,
            DomainError::Fetch(_) => ErrorKind::FetchError,
            DomainError::Probe(_) => ErrorKind::ProbeError,
            DomainError::Extraction(_) => ErrorKind::ExtractionError,
            DomainError::Concatenation(_) => ErrorKind::ConcatenationError,
            DomainError::EmptyResult(_) => ErrorKind::EmptyResultError,
            DomainError::Io(_) => ErrorKind::IoError,
            DomainError::Config(_) => ErrorKind::ConfigError,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::ParseError => "parse_error",
            ErrorKind::InvalidCutRange => "invalid_cut_range",
            ErrorKind::FetchError => "fetch_error",
            ErrorKind::ProbeError => "probe_error",
            ErrorKind::ExtractionError => "extraction_error",
            ErrorKind::ConcatenationError => "concatenation_error",
            ErrorKind::EmptyResultError => "empty_result_error",
            ErrorKind::IoError => "io_error",
            ErrorKind::ConfigError => "config_error",
        };
        f.write_str(name)
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(DomainError::parse("x", "bad").kind(), ErrorKind::ParseError);
        assert_eq!(
            DomainError::EmptyResult("all cut".to_string()).kind(),
            ErrorKind::EmptyResultError
        );
        assert_eq!(
            DomainError::Extraction("segment 2".to_string()).kind(),
            ErrorKind::ExtractionError
        );
    }

    #[test]
    fn test_kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&ErrorKind::ConcatenationError).unwrap();
        assert_eq!(json, "\"concatenation_error\"");
        assert_eq!(ErrorKind::ConcatenationError.to_string(), "concatenation_error");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: DomainError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.kind(), ErrorKind::IoError);
    }
}
