/**
 * Login Handler
 *
 * POST /login
 *
 * # Authentication Process
 *
 * 1. Look up user by trimmed username
 * 2. Verify password using bcrypt (a dummy verification if the user is unknown)
 * 3. Issue a token
 * 4. Return token and user info
 *
 * # Security
 *
 * - Unknown username, wrong password and lookup failures all answer
 *   401 `Invalid credentials`
 * - Passwords and tokens are never logged
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - bad JSON or empty username/password
/// * `401 Unauthorized` - no such user, wrong password, or the lookup failed
/// * `500 Internal Server Error` - a stored hash is malformed or signing failed
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": { "id": 1, "username": "alice" }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected login payload: {}", e.body_text());
        BackendError::validation("Invalid request payload")
    })?;
    request.validate()?;
    let username = request.username().to_string();

    let user = match state.users.find_by_username(&username).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("User lookup failed during login: {}", e);
            None
        }
    };

    let hasher = state.hasher.clone();
    let password = request.password;
    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let valid = tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => hasher.verify(&password, &hash),
        None => {
            hasher.verify_dummy(&password);
            Ok(false)
        }
    })
    .await
    .map_err(|e| BackendError::internal(format!("verification task failed: {}", e)))??;

    let user = match user {
        Some(user) if valid => user,
        Some(_) => {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(BackendError::unauthenticated(INVALID_CREDENTIALS));
        }
        None => {
            tracing::warn!("Login for unknown user: {}", username);
            return Err(BackendError::unauthenticated(INVALID_CREDENTIALS));
        }
    };

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User logged in: {} ({})", user.username, user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
