//! Snippet Organizer - Main Library
//!
//! A multi-user HTTP service for storing, updating and searching short code
//! snippets. Users register with a username and password, log in to receive
//! a signed bearer token, and every snippet operation is scoped to the
//! identity carried by that token.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and payload validation
//!   - Snippet model, create/update drafts, search filters
//!   - `SharedError` for rejected payloads
//!
//! - **`backend`** - The Axum server
//!   - Password hashing and JWT sessions (`backend::auth`)
//!   - Authentication gate (`backend::middleware`)
//!   - Snippet handlers and stores (`backend::snippets`, `backend::store`)
//!   - Server configuration and bootstrap (`backend::server`)
//!
//! # Usage
//!
//! ```rust,no_run
//! use snippet_organizer::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation
//! - `backend::BackendError` for everything that reaches an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
