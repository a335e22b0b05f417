/**
 * Authentication Middleware
 *
 * The gate in front of every protected route. It extracts the bearer token
 * from the `Authorization` header, validates it, and attaches the caller's
 * user ID to the request extensions for handlers to read through
 * [`AuthUser`].
 *
 * Every rejection is a 401 and short-circuits; the wrapped handler never
 * runs. Rejection causes are logged, tokens never are.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

pub const HEADER_REQUIRED: &str = "Authorization header required";
pub const BEARER_REQUIRED: &str = "Bearer token required";
pub const INVALID_TOKEN: &str = "Invalid token";

const BEARER_PREFIX: &str = "Bearer ";

/// Identity established by the gate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Authentication middleware
///
/// 1. Read the `Authorization` header
/// 2. Strip the `Bearer ` prefix
/// 3. Validate the token
/// 4. Attach [`AuthenticatedUser`] to the request extensions
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(&app_state.tokens, request.headers())?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Resolve the caller from request headers
pub fn authenticate(
    tokens: &TokenService,
    headers: &axum::http::HeaderMap,
) -> Result<AuthenticatedUser, BackendError> {
    let header = headers.get(AUTHORIZATION).ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::unauthenticated(HEADER_REQUIRED)
    })?;

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| {
            tracing::warn!("Authorization header is not a bearer credential");
            BackendError::unauthenticated(BEARER_REQUIRED)
        })?;

    let claims = tokens.validate(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::unauthenticated(INVALID_TOKEN)
    })?;

    Ok(AuthenticatedUser {
        user_id: claims.user_id,
    })
}

/// Axum extractor for the authenticated caller
///
/// Only meaningful on routes behind [`auth_middleware`]; elsewhere it
/// rejects with 401.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthenticated(HEADER_REQUIRED)
            })
    }
}
