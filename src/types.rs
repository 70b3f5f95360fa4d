//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Processing endpoint response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// Success response from the processing endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Name of the generated output file, served under `/download/{name}`.
    pub output_file: String,
}

/// Failure response body from the processing endpoint.
///
/// The server is not guaranteed to include a reason, so `error` is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason, when the server provides one.
    pub error: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Reading the selected file failed.
    FileRead(String),
    /// The request could not be sent or the connection failed.
    Network(String),
    /// The server answered with a non-success HTTP status.
    Server { status: u16, message: String },
    /// The response body did not match the documented schema.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FileRead(msg) => write!(f, "file read failed: {}", msg),
            AppError::Network(msg) => write!(f, "network error: {}", msg),
            // Server-provided reasons are surfaced verbatim.
            AppError::Server { message, .. } => write!(f, "{}", message),
            AppError::Decode(msg) => write!(f, "invalid server response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_response_deserialization() {
        let json = r#"{"output_file": "result.csv"}"#;
        let response: ProcessResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.output_file, "result.csv");
    }

    #[test]
    fn test_error_body_with_and_without_reason() {
        let with: ErrorBody = serde_json::from_str(r#"{"error": "bad column"}"#).unwrap();
        assert_eq!(with.error.as_deref(), Some("bad column"));

        let without: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(without.error, None);
    }

    #[test]
    fn test_server_error_displays_message_verbatim() {
        let err = AppError::Server {
            status: 400,
            message: "bad column".to_string(),
        };
        assert_eq!(err.to_string(), "bad column");
    }

    #[test]
    fn test_decode_error_is_distinct_from_server_error() {
        let decode = AppError::Decode("missing field `output_file`".to_string());
        let server = AppError::Server {
            status: 500,
            message: "missing field `output_file`".to_string(),
        };
        assert_ne!(decode, server);
        assert!(decode.to_string().starts_with("invalid server response"));
    }
}
