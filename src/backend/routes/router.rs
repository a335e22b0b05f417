/**
 * Router Configuration
 *
 * Combines the API routes, the JSON fallback and the HTTP tracing layer
 * into the application router.
 */

use axum::{http::Uri, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **API Routes**: public auth routes and gated snippet routes
/// 2. **Fallback Handler**: JSON 404
/// 3. **Tracing**: one span per request
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), app_state.clone());

    router
        .fallback(fallback)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

async fn fallback(uri: Uri) -> BackendError {
    tracing::warn!("No route for {}", uri.path());
    BackendError::not_found("Not found")
}
