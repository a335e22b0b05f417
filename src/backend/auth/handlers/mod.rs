//! Authentication HTTP handlers
//!
//! - `register` - POST /register
//! - `login` - POST /login
//! - `get_me` - GET /me (protected)

pub mod types;
pub mod register;
pub mod login;
pub mod me;

pub use register::register;
pub use login::login;
pub use me::get_me;
