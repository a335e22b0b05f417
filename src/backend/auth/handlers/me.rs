/**
 * Get Current User Handler
 *
 * GET /me, behind the authentication gate. Returns the caller's user
 * record without the password hash.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - the token is valid but the user no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = state
        .users
        .find_by_id(caller.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token names a missing user: {}", caller.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(user.into()))
}
