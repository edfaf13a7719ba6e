//! Tests for authentication controller endpoints.
//!
//! Covers the login redirect, the OAuth callback against the mocked token endpoint, logout
//! and the signed in user endpoint.

mod login;
mod logout;
mod user;

use super::*;
