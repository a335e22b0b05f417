/**
 * Register Handler
 *
 * POST /register
 *
 * 1. Validate the payload and trim the username
 * 2. Hash the password on the blocking pool
 * 3. Insert the user; a taken username is a 409
 *
 * No token is issued; clients log in afterwards.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::password::HashError;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::MessageResponse;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - bad JSON, empty username/password, or a password
///   over bcrypt's input limit
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing or store failure
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected register payload: {}", e.body_text());
        BackendError::validation("Invalid request payload")
    })?;
    request.validate()?;
    let username = request.username().to_string();

    let hasher = state.hasher.clone();
    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| BackendError::internal(format!("hashing task failed: {}", e)))?
        .map_err(|e| match e {
            HashError::TooLong => BackendError::validation("Password is too long"),
            other => BackendError::from(other),
        })?;

    let user = state
        .users
        .create_user(&username, &password_hash)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => {
                tracing::warn!("Registration for taken username: {}", username);
                BackendError::conflict("Username already taken")
            }
            other => BackendError::from(other),
        })?;

    tracing::info!("User registered: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}
