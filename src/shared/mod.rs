//! Shared Module
//!
//! Types that cross the HTTP boundary: the snippet model, the payloads
//! clients send, the success envelopes, and the validation error raised when
//! a payload is rejected.

/// Snippet model and request payloads
pub mod snippet;

/// Success response envelopes
pub mod response;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use snippet::{SearchQuery, Snippet, SnippetDraft};
pub use response::{DataResponse, MessageResponse};
pub use error::SharedError;
