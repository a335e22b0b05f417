//! Authentication API integration tests
//!
//! Registration, login, the authentication gate and `/me`.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

#[tokio::test]
async fn test_register_success() {
    let server = create_test_server();

    let response = server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "secret123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "User created successfully" })
    );
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = create_test_server();
    register(&server, "alice", "secret123").await;

    let response = server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "different" }))
        .await;

    assert_error(&response, StatusCode::CONFLICT, "Username already taken");
}

#[tokio::test]
async fn test_register_padded_username_is_same_account() {
    let server = create_test_server();
    register(&server, "alice", "secret123").await;

    let response = server
        .post("/register")
        .json(&json!({ "username": "  alice ", "password": "different" }))
        .await;
    assert_error(&response, StatusCode::CONFLICT, "Username already taken");

    let body = login(&server, "alice ", "secret123").await;
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn test_register_requires_both_fields() {
    let server = create_test_server();

    for body in [
        json!({ "username": "", "password": "secret123" }),
        json!({ "username": "   ", "password": "secret123" }),
        json!({ "username": "alice", "password": "" }),
        json!({ "username": "alice" }),
        json!({}),
    ] {
        let response = server.post("/register").json(&body).await;
        assert_error(
            &response,
            StatusCode::BAD_REQUEST,
            "Username and password are required",
        );
    }
}

#[tokio::test]
async fn test_register_malformed_json() {
    let server = create_test_server();

    let response = server
        .post("/register")
        .content_type("application/json")
        .text("{not json")
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Invalid request payload");
}

#[tokio::test]
async fn test_register_rejects_overlong_password() {
    let server = create_test_server();

    let response = server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "x".repeat(73) }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Password is too long");
}

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server();
    register(&server, "alice", "secret123").await;

    let body = login(&server, "alice", "secret123").await;

    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"]["id"].is_i64());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let server = create_test_server();
    register(&server, "alice", "secret123").await;

    let wrong_password = server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "wrongpass" }))
        .await;
    assert_error(&wrong_password, StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert!(wrong_password.json::<Value>().get("token").is_none());

    let unknown_user = server
        .post("/login")
        .json(&json!({ "username": "mallory", "password": "secret123" }))
        .await;
    assert_error(&unknown_user, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let server = create_test_server();

    let response = server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "" }))
        .await;

    assert_error(
        &response,
        StatusCode::BAD_REQUEST,
        "Username and password are required",
    );
}

#[tokio::test]
async fn test_protected_route_without_header() {
    let server = create_test_server();

    let response = server.get("/snippets").await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Authorization header required");
}

#[tokio::test]
async fn test_protected_route_without_bearer_scheme() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "secret123").await;

    for value in [
        alice.token.clone(),
        format!("Basic {}", alice.token),
        format!("Token {}", alice.token),
    ] {
        let response = server
            .get("/snippets")
            .add_header(AUTHORIZATION, HeaderValue::from_str(&value).unwrap())
            .await;
        assert_error(&response, StatusCode::UNAUTHORIZED, "Bearer token required");
    }
}

#[tokio::test]
async fn test_protected_route_with_invalid_tokens() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "secret123").await;

    let expired = test_tokens()
        .issue_at(alice.id, Utc::now() - Duration::hours(2))
        .unwrap();
    let foreign = snippet_organizer::backend::auth::TokenService::new(
        b"a-completely-different-secret-value!!",
        Duration::hours(1),
    )
    .unwrap()
    .issue(alice.id)
    .unwrap();

    for token in ["garbage", "a.b.c", expired.as_str(), foreign.as_str()] {
        let (name, value) = auth_header(token);
        let response = server.get("/snippets").add_header(name, value).await;
        assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");
    }
}

#[tokio::test]
async fn test_token_one_second_past_expiry_is_rejected() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "secret123").await;

    let token = test_tokens()
        .issue_at(alice.id, Utc::now() - Duration::hours(1) - Duration::seconds(1))
        .unwrap();

    let (name, value) = auth_header(&token);
    let response = server.get("/me").add_header(name, value).await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_login_then_access_protected_route() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "secret123").await;

    let (name, value) = alice.auth();
    let response = server.get("/snippets").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "data": [] }));
}

#[tokio::test]
async fn test_me_returns_caller() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "secret123").await;
    create_test_user(&server, "bob", "hunter22").await;

    let (name, value) = alice.auth();
    let response = server.get("/me").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": alice.id, "username": "alice" })
    );
}

#[tokio::test]
async fn test_me_for_vanished_user() {
    let server = create_test_server();
    let token = test_tokens().issue(9999).unwrap();

    let (name, value) = auth_header(&token);
    let response = server.get("/me").add_header(name, value).await;

    assert_error(&response, StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = create_test_server();

    let response = server.get("/nowhere").await;

    assert_error(&response, StatusCode::NOT_FOUND, "Not found");
}
