/**
 * Application State Management
 *
 * `AppState` is built once in `create_app` and cloned into every request.
 * It owns the two stores, the password hasher and the token service; none
 * of these are globals.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let a handler take only the part it needs,
 * e.g. `State(tokens): State<Arc<TokenService>>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::snippets::db::SnippetStore;
use crate::backend::store::MemoryStore;

/// Shared application state
///
/// # Fields
///
/// * `users` - credential store
/// * `snippets` - snippet store
/// * `hasher` - bcrypt hasher at the configured cost
/// * `tokens` - signing key and TTL, read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub snippets: Arc<dyn SnippetStore>,
    pub hasher: PasswordHasher,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        snippets: Arc<dyn SnippetStore>,
        hasher: PasswordHasher,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            snippets,
            hasher,
            tokens: Arc::new(tokens),
        }
    }

    /// State over a single fresh [`MemoryStore`]
    pub fn in_memory(hasher: PasswordHasher, tokens: TokenService) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store, hasher, tokens)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("hasher", &self.hasher)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn SnippetStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.snippets.clone()
    }
}
