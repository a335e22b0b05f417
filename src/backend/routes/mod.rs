//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, layers and fallback
//! └── api_routes.rs   - Public and protected API routes
//! ```
//!
//! # Routes
//!
//! ## Public
//!
//! - `POST /register` - User registration
//! - `POST /login` - User login
//!
//! ## Protected (bearer token required)
//!
//! - `GET /me` - Current user
//! - `GET /snippets`, `POST /snippets`
//! - `GET /snippets/search`
//! - `GET /snippets/{id}`, `PUT /snippets/{id}`, `DELETE /snippets/{id}`
//!
//! Unknown paths get the JSON 404 envelope.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
