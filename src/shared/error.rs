//! Shared Error Types
//!
//! Errors raised while checking client payloads before they reach a store.
//! The backend converts these into `400 Bad Request` responses.
//!
//! # Usage
//!
//! ```rust
//! use snippet_organizer::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title is required");
//! assert!(error.to_string().contains("title"));
//! ```
use thiserror::Error;

/// Payload validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message intended for the client, without the field prefix
    pub fn client_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
