//! OAuth2 identity provider mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{TEST_JWT_SECRET, TOKEN_PATH},
    error::TestError,
    fixtures::factory,
    TestContext,
};

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { context: self }
    }
}

pub struct AuthFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Create a mock token endpoint exchanging `code` for an access token of `user_id`.
    ///
    /// The token is an HS256 JWT signed with the test secret and valid for
    /// `expires_in_secs` seconds, negative values yield an expired token.
    pub fn create_token_endpoint(
        &mut self,
        code: &str,
        user_id: &str,
        expires_in_secs: i64,
    ) -> Result<Mock, TestError> {
        let access_token = factory::access_token(user_id, TEST_JWT_SECRET, expires_in_secs)?;

        let body = json!({
            "access_token": access_token,
            "token_type": "bearer",
            "expires_in": expires_in_secs.max(0),
        });

        Ok(self
            .context
            .server
            .mock("POST", TOKEN_PATH)
            .match_body(Matcher::UrlEncoded("code".to_string(), code.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create())
    }

    /// Create a mock token endpoint rejecting every exchange.
    pub fn create_token_error_endpoint(&mut self) -> Mock {
        self.context
            .server
            .mock("POST", TOKEN_PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "invalid_grant" }).to_string())
            .create()
    }
}
