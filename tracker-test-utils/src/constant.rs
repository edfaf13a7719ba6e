//! Placeholder values shared by tests.
//!
//! None of these are real credentials.

/// User id placed in the `sub` claim of test access tokens.
pub static TEST_USER_ID: &str = "5f0c2a9e-6d2b-4c1e-9a3f-1b7d8e4c2a10";

/// A second user, used to check that data is scoped to the session user.
pub static TEST_OTHER_USER_ID: &str = "a81e4c6b-2f3d-4e5a-8b9c-0d1e2f3a4b5c";

/// HS256 secret used to sign and verify test access tokens.
pub static TEST_JWT_SECRET: &str = "tracker-test-jwt-secret";

pub static TEST_AUTH_CLIENT_ID: &str = "tracker_client_id";

pub static TEST_AUTH_CLIENT_SECRET: &str = "tracker_client_secret";

pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

/// Paths served by the mock server
pub static GRAPHQL_PATH: &str = "/v1/graphql";
pub static AUTHORIZE_PATH: &str = "/oauth/authorize";
pub static TOKEN_PATH: &str = "/oauth/token";
