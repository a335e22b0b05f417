/**
 * Authentication Handler Types
 *
 * Request and response bodies for register, login and me.
 */

use serde::{Deserialize, Serialize};

use crate::shared::SharedError;

/// Credentials sent to `POST /register` and `POST /login`
///
/// Missing fields deserialize as empty strings so both cases share one
/// validation message.
#[derive(Deserialize, Serialize, Clone)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    /// Plaintext; only ever passed to the hasher
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CredentialsRequest {
    /// Username with surrounding whitespace removed; the form that is
    /// stored and looked up
    pub fn username(&self) -> &str {
        self.username.trim()
    }

    /// Both fields must be non-empty
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.username().is_empty() || self.password.is_empty() {
            return Err(SharedError::validation(
                "credentials",
                "Username and password are required",
            ));
        }
        Ok(())
    }
}

/// Registration request
pub type RegisterRequest = CredentialsRequest;

/// Login request
pub type LoginRequest = CredentialsRequest;

/// Returned by login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Bearer token
    pub token: String,
    pub user: UserResponse,
}

/// User information safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<crate::backend::auth::users::User> for UserResponse {
    fn from(user: crate::backend::auth::users::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
