//! Authentication Module
//!
//! Registration, login and the credential/session primitives behind them.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - signed token issuance and validation
//! - **`users`** - user model and the `UserStore` seam
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Token management
//! ├── users.rs        - User model and stores
//! └── handlers/
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - POST /register
//!     ├── login.rs    - POST /login
//!     └── me.rs       - GET /me
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → password hashed → user stored
//! 2. **Login**: username + password → hash verified → token returned
//! 3. **Protected request**: `Authorization: Bearer <token>` → the gate in
//!    `backend::middleware` validates it and attaches the caller's user ID
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256, stateless, and expire after the configured TTL
//! - Invalid credentials return 401 without saying which part was wrong

/// Password hashing
pub mod password;

/// Token generation and validation
pub mod sessions;

/// User data model and stores
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, CredentialsRequest, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, register};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenService};
pub use users::{PgUserStore, User, UserStore};
