/**
 * API Routes
 *
 * Public routes are mounted as-is. Protected routes get the authentication
 * gate as a `route_layer`, so it only runs for requests that matched one of
 * them and unknown paths still reach the fallback.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::snippets::{
    create_snippet, delete_snippet, get_snippet, list_snippets, search_snippets, update_snippet,
};

/// Routes that need no token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Routes behind the authentication gate
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/snippets", get(list_snippets).post(create_snippet))
        .route("/snippets/search", get(search_snippets))
        .route(
            "/snippets/{id}",
            get(get_snippet).put(update_snippet).delete(delete_snippet),
        )
        .route_layer(from_fn_with_state(app_state, auth_middleware))
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .merge(public_routes())
        .merge(protected_routes(app_state))
}
