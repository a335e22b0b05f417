//! Integration tests
//!
//! HTTP-level tests against the full router over in-memory stores

#[path = "../common/mod.rs"]
mod common;

mod api;
