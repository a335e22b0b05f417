/**
 * Server Initialization
 *
 * Builds `AppState` from a `ServerConfig` and hands it to the router.
 *
 * # Initialization Process
 *
 * 1. Build the password hasher and token service
 * 2. Connect to Postgres and run migrations, or fall back to in-memory
 *    stores when `DATABASE_URL` is unset
 * 3. Create the router
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::PgUserStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::snippets::db::PgSnippetStore;

/// Build application state from configuration
///
/// # Errors
///
/// A bad secret, an out-of-range cost, or a configured database that cannot
/// be reached or migrated.
pub async fn create_state(config: &ServerConfig) -> Result<AppState, ConfigError> {
    let hasher = PasswordHasher::new(config.bcrypt_cost)?;
    let tokens = TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl)?;

    let state = match &config.database_url {
        Some(url) => {
            let pool = load_database(url).await?;
            AppState::new(
                Arc::new(PgUserStore::new(pool.clone())),
                Arc::new(PgSnippetStore::new(pool)),
                hasher,
                tokens,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set - using in-memory stores, data will not persist");
            AppState::in_memory(hasher, tokens)
        }
    };

    Ok(state)
}

/// Create and configure the Axum application
///
/// # Errors
///
/// See [`create_state`].
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing snippet organizer backend");

    let state = create_state(config).await?;
    let app = create_router(state);

    tracing::info!("Router configured");

    Ok(app)
}
