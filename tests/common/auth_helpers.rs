//! Authentication test helpers
//!
//! Drive registration and login through the HTTP API so tests exercise the
//! same path a client does.

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

/// A registered and logged-in user
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    /// `Authorization` header carrying this user's token
    pub fn auth(&self) -> (HeaderName, HeaderValue) {
        auth_header(&self.token)
    }
}

/// `Authorization: Bearer <token>`
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    )
}

/// Register `username`/`password`, asserting success
pub async fn register(server: &TestServer, username: &str, password: &str) {
    let response = server
        .post("/register")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

/// Log in, asserting success, and return the response body
pub async fn login(server: &TestServer, username: &str, password: &str) -> Value {
    let response = server
        .post("/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()
}

/// Register then log in
pub async fn create_test_user(server: &TestServer, username: &str, password: &str) -> TestUser {
    register(server, username, password).await;
    let body = login(server, username, password).await;

    TestUser {
        id: body["user"]["id"].as_i64().unwrap(),
        username: username.to_string(),
        password: password.to_string(),
        token: body["token"].as_str().unwrap().to_string(),
    }
}

/// Create a snippet for `user` and return its JSON
pub async fn create_snippet(
    server: &TestServer,
    user: &TestUser,
    title: &str,
    language: &str,
) -> Value {
    let (name, value) = user.auth();
    let response = server
        .post("/snippets")
        .add_header(name, value)
        .json(&json!({
            "title": title,
            "description": format!("{} example", title),
            "code": "fn main() {}",
            "language": language,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}
