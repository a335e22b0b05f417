/**
 * Backend Error Types
 *
 * Every failure that reaches an HTTP response is a `BackendError`.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - `ValidationError` - missing or malformed input (400)
 * - `Unauthenticated` - missing/invalid token or bad credentials (401)
 * - `NotFound` - resource absent or owned by another user (404)
 * - `Conflict` - uniqueness violation, e.g. a taken username (409)
 *
 * ## Server errors
 *
 * - `Hashing`, `Signing`, `Store`, `Internal` (500)
 *
 * Server errors never expose their cause to the client; the cause is logged
 * when the error is turned into a response.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::auth::password::HashError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message sent for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use snippet_organizer::backend::error::BackendError;
///
/// let err = BackendError::validation("Invalid snippet ID");
/// assert_eq!(err.status_code().as_u16(), 400);
///
/// let err = BackendError::unauthenticated("Invalid token");
/// assert_eq!(err.status_code().as_u16(), 401);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or missing input
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message
        message: String,
    },

    /// Request could not be bound to a user
    ///
    /// The message is chosen by the caller and must not reveal why
    /// validation failed beyond the public category.
    #[error("Unauthenticated: {message}")]
    Unauthenticated {
        /// Public message
        message: String,
    },

    /// Resource does not exist for this caller
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Uniqueness violation
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Payload rejected by shared validation
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Password hashing failed
    #[error("Hashing error: {0}")]
    Hashing(#[from] HashError),

    /// Token signing failed
    #[error("Signing error: {0}")]
    Signing(#[from] TokenError),

    /// Store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Any other server-side failure
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message (logged, never sent)
        message: String,
    },
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a new unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationError`, `SharedError` - 400 Bad Request
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } | Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Hashing(_) | Self::Signing(_) | Self::Store(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error is a server fault
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the message sent to the client
    ///
    /// Server faults collapse to [`INTERNAL_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message }
            | Self::Unauthenticated { message }
            | Self::NotFound { message }
            | Self::Conflict { message } => message.clone(),
            Self::SharedError(err) => err.client_message().to_string(),
            Self::Hashing(_) | Self::Signing(_) | Self::Store(_) | Self::Internal { .. } => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}
