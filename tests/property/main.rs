//! Property-based tests

#[path = "../common/mod.rs"]
mod common;

mod auth_proptest;
