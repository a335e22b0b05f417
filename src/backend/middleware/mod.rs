//! Middleware Module
//!
//! HTTP middleware that runs before handlers.
//!
//! - **`auth`** - the authentication gate for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use snippet_organizer::backend::middleware::auth_middleware;
//!
//! let protected = protected.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser};
