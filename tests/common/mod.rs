//! Common test utilities and helpers
//!
//! - Test server over in-memory stores
//! - Authentication helpers (register, login, bearer headers)
//! - Response assertions

#![allow(dead_code)]

pub mod auth_helpers;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use auth_helpers::*;

use axum_test::TestServer;
use chrono::Duration;
use snippet_organizer::backend::auth::{PasswordHasher, TokenService};
use snippet_organizer::backend::routes::create_router;
use snippet_organizer::backend::server::AppState;

/// Signing secret shared by every test server
pub const TEST_SECRET: &[u8] = b"integration-test-secret-long-enough!!";

/// Lowest bcrypt cost, to keep the suite fast
pub const TEST_COST: u32 = 4;

/// Token service with the test secret and a one hour TTL
pub fn test_tokens() -> TokenService {
    TokenService::new(TEST_SECRET, Duration::hours(1)).unwrap()
}

/// Fresh in-memory application state
pub fn test_state() -> AppState {
    AppState::in_memory(PasswordHasher::new(TEST_COST).unwrap(), test_tokens())
}

/// Test server over fresh in-memory stores
pub fn create_test_server() -> TestServer {
    TestServer::new(create_router(test_state())).unwrap()
}
