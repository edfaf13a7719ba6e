//! Session data models and utilities.
//!
//! Type-safe wrappers over tower-sessions storage. Each submodule owns one session key:
//! the pending login CSRF state and the signed in user with their access token.

pub mod auth;
pub mod user;
