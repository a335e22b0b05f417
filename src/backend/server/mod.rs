//! Server Module
//!
//! Configuration, application state and app construction.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration and database bootstrap
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - State construction and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **State Creation**: hasher, token service, stores
//! 3. **Router Creation**: routes, gate and tracing layers

/// Server configuration
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_state};
pub use state::AppState;
