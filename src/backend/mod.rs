//! Backend Module
//!
//! The Axum HTTP server: authentication, the request gate, snippet handlers,
//! stores and server bootstrap.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Password hashing, tokens, users, auth handlers
//! - **`middleware`** - The authentication gate
//! - **`snippets`** - Snippet store seam and handlers
//! - **`store`** - Store errors and the in-memory store
//! - **`error`** - `BackendError` and its JSON envelope
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── snippets/       - Snippet handlers and Postgres store
//! ├── store/          - In-memory store, store errors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the user store, snippet store, password hasher and
//! token service. It is built once per process and cloned into handlers;
//! stores sit behind `Arc<dyn ...>` so Postgres and in-memory backends are
//! interchangeable.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Client errors keep their
//! message; server errors are logged and answered with a generic message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Snippet handlers and persistence
pub mod snippets;

/// Store errors and the in-memory store
pub mod store;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
