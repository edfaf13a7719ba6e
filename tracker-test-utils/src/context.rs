//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns a mock
//! HTTP server standing in for both the GraphQL backend and the OAuth provider, plus a session
//! backed by an in-memory store for testing authentication flows.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{AUTHORIZE_PATH, GRAPHQL_PATH, TEST_JWT_SECRET, TOKEN_PATH},
    error::TestError,
    fixtures::factory,
};

/// Lifetime of access tokens minted by [`TestContext::access_token`]
const TEST_TOKEN_TTL_SECS: i64 = 3600;

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_graphql_operation("GetBikes", json!({ "bike": [] }), 1)
///     .build()
///     .await?;
///
/// let ctx = RequestContext::new(TEST_USER_ID, test.access_token(TEST_USER_ID)?);
/// let client = GraphqlClient::new(reqwest::Client::new(), test.graphql_url());
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Session for test authentication flows
    pub session: Session,

    /// Mock HTTP server for the GraphQL backend and OAuth provider
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with a fresh mock server and an empty session.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// GraphQL endpoint served by the mock server
    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.server.url(), GRAPHQL_PATH)
    }

    /// OAuth authorize endpoint, never called by tests, only redirected to
    pub fn authorize_url(&self) -> String {
        format!("{}{}", self.server.url(), AUTHORIZE_PATH)
    }

    /// OAuth token endpoint served by the mock server
    pub fn token_url(&self) -> String {
        format!("{}{}", self.server.url(), TOKEN_PATH)
    }

    /// Signs a valid access token for `user_id` with the test JWT secret.
    pub fn access_token(&self, user_id: &str) -> Result<String, TestError> {
        Ok(factory::access_token(
            user_id,
            TEST_JWT_SECRET,
            TEST_TOKEN_TTL_SECS,
        )?)
    }

    /// Signs an access token for `user_id` that expired an hour ago.
    pub fn expired_access_token(&self, user_id: &str) -> Result<String, TestError> {
        Ok(factory::access_token(
            user_id,
            TEST_JWT_SECRET,
            -TEST_TOKEN_TTL_SECS,
        )?)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
