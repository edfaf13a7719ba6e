//! Test fixture modules for mock HTTP endpoints and response payloads.
//!
//! - `auth` - OAuth token endpoint of the identity provider
//! - `factory` - Access tokens and GraphQL response rows with standard test values
//! - `graphql` - GraphQL backend endpoint, matched per operation

pub mod auth;
pub mod factory;
pub mod graphql;
