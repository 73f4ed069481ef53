//! Error types for the scanline frames services.

use thiserror::Error;

/// Result type alias using FramesError.
pub type FramesResult<T> = Result<T, FramesError>;

/// Primary error type for ingestion, storage, rendering and queries.
#[derive(Debug, Error)]
pub enum FramesError {
    // === Build Errors ===
    #[error("Row {row} has {actual} pixels, expected {expected}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read source: {0}")]
    Source(String),

    // === Query Errors ===
    #[error("Invalid depth range: {0}")]
    InvalidRange(String),

    #[error("Invalid depth: {0}")]
    InvalidDepth(String),

    #[error("No data found: {0}")]
    NotFound(String),

    // === Infrastructure Errors ===
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Rendering failed: {0}")]
    Render(String),
}

impl FramesError {
    /// Whether the caller supplied bad input (never retried).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FramesError::InvalidRange(_) | FramesError::InvalidDepth(_)
        )
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            FramesError::InvalidRange(_) | FramesError::InvalidDepth(_) => 400,

            FramesError::NotFound(_) => 404,

            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(FramesError::InvalidRange("x".into()).http_status_code(), 400);
        assert_eq!(FramesError::InvalidDepth("x".into()).http_status_code(), 400);
        assert_eq!(FramesError::NotFound("x".into()).http_status_code(), 404);
        assert_eq!(FramesError::Storage("x".into()).http_status_code(), 500);
        assert_eq!(
            FramesError::SchemaMismatch { row: 0, expected: 200, actual: 199 }.http_status_code(),
            500
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(FramesError::InvalidRange("x".into()).is_client_error());
        assert!(!FramesError::NotFound("x".into()).is_client_error());
        assert!(!FramesError::Render("x".into()).is_client_error());
    }

    #[test]
    fn test_schema_mismatch_message() {
        let err = FramesError::SchemaMismatch { row: 3, expected: 200, actual: 199 };
        assert_eq!(err.to_string(), "Row 3 has 199 pixels, expected 200");
    }
}
