//! # API Error Type
//!
//! Unified error type for storefront commands, plus the process-level error
//! returned from [`run`](crate::run).
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  shell line ──► ShellCommand::parse ── bad verb ──► UNKNOWN_COMMAND ─┐  │
//! │                       │                                              │  │
//! │                       ▼                                              │  │
//! │                 commands::* ── CoreError::ProductNotFound ─► NOT_FOUND │
//! │                       │       CoreError::UnknownView ──► VALIDATION_..│  │
//! │                       ▼                                              ▼  │
//! │                 Screen / Response                          ApiError   │
//! │                                                    printed, session    │
//! │                                                    keeps going         │
//! │                                                                         │
//! │  I/O failure on stdin/stdout ──► StorefrontError ──► process exits     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use beesy_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Error returned from a storefront command.
///
/// ## Serialization
/// In `--json` mode this is what a failed command prints:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: cactus"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product id
    NotFound,

    /// Malformed argument (unknown view, missing id)
    ValidationError,

    /// Shell verb not recognised
    UnknownCommand,

    /// A reply could not be encoded
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unknown_command(verb: &str) -> Self {
        ApiError::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command: {} (type `help`)", verb),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// A reply that fails to encode is reported instead of ending the session.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("Could not encode reply: {}", err))
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::UnknownView(name) => ApiError::validation(format!(
                "Unknown view: {} (expected landing, products or cart)",
                name
            )),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Failures that end the storefront process.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode response: {0}")]
    Json(#[from] serde_json::Error),
}
