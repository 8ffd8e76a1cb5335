//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in shopcart                               │
//! │                                                                         │
//! │  input line ──► parse_command ──► execute ──► view                      │
//! │                      │               │                                  │
//! │                      ▼               ▼                                  │
//! │            ValidationError    CoreError::ProductNotFound                │
//! │                      │               │                                  │
//! │                      └──────┬────────┘                                  │
//! │                             ▼                                           │
//! │                    ApiError { code, message }                           │
//! │                             │                                           │
//! │            printed, logged, session continues                          │
//! │                                                                         │
//! │  io::Error / serde_json::Error / ConfigError ──► ApiError ──► exit 1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopcart_core::CoreError;

use crate::state::ConfigError;

/// Error reported by a command or by the session itself.
///
/// ## Serialization
/// In JSON output mode a failed command prints:
/// ```json
/// { "kind": "error", "code": "NOT_FOUND", "message": "Product not found: 9" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id not in the catalog
    NotFound,

    /// Unparseable command line or invalid value
    ValidationError,

    /// Bad environment configuration
    ConfigError,

    /// Reading input or writing output failed
    IoError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// The serialized name, for the text view.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<shopcart_core::ValidationError> for ApiError {
    fn from(err: shopcart_core::ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Failed to serialize response: {}", err);
        ApiError::internal("Failed to serialize response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::{ProductId, ValidationError};

    #[test]
    fn test_core_error_conversion() {
        let err: ApiError = CoreError::ProductNotFound(ProductId::new(9)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 9");

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "product id".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "product id is required");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ApiError = ConfigError::InvalidValue("SHOPCART_OUTPUT".to_string()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.to_string(), "[CONFIG_ERROR] Invalid value for SHOPCART_OUTPUT");
    }

    #[test]
    fn test_serialized_code_matches_as_str() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::ValidationError,
            ErrorCode::ConfigError,
            ErrorCode::IoError,
            ErrorCode::Internal,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, code.as_str());
        }
    }
}
