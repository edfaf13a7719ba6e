//! Declarative test builder.
//!
//! The builder queues mock endpoints and creates them all during the final `build()` call, so a
//! test reads as its setup followed by its assertions.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// GraphQL mocks queued by the builder
enum GraphqlEndpoint {
    Data {
        operation: String,
        variables: Option<Value>,
        data: Value,
        expected_requests: usize,
    },
    Error {
        operation: String,
        message: String,
    },
    Status {
        operation: String,
        status: usize,
    },
}

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up mock GraphQL operations, OAuth token endpoints and
/// custom HTTP endpoints. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    graphql_endpoints: Vec<GraphqlEndpoint>,
    token_endpoints: Vec<(String, String, i64)>, // (code, user_id, expires_in_secs)
    token_error_endpoint: bool,
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            graphql_endpoints: Vec::new(),
            token_endpoints: Vec::new(),
            token_error_endpoint: false,
            mock_builders: Vec::new(),
        }
    }

    /// Answer GraphQL `operation` with `data`, whatever its variables.
    ///
    /// # Arguments
    /// - `operation` - Operation name, e.g. `GetBikes`
    /// - `data` - Value returned as the response `data`
    /// - `expected_requests` - Number of times this operation should be sent
    pub fn with_graphql_operation(
        mut self,
        operation: impl Into<String>,
        data: Value,
        expected_requests: usize,
    ) -> Self {
        self.graphql_endpoints.push(GraphqlEndpoint::Data {
            operation: operation.into(),
            variables: None,
            data,
            expected_requests,
        });
        self
    }

    /// Answer GraphQL `operation` with `data` only when the request includes `variables`.
    ///
    /// Matching is partial: the request may carry more variables than listed.
    pub fn with_graphql_operation_matching(
        mut self,
        operation: impl Into<String>,
        variables: Value,
        data: Value,
        expected_requests: usize,
    ) -> Self {
        self.graphql_endpoints.push(GraphqlEndpoint::Data {
            operation: operation.into(),
            variables: Some(variables),
            data,
            expected_requests,
        });
        self
    }

    /// Answer GraphQL `operation` once with an `errors` array holding `message`.
    pub fn with_graphql_error(
        mut self,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.graphql_endpoints.push(GraphqlEndpoint::Error {
            operation: operation.into(),
            message: message.into(),
        });
        self
    }

    /// Answer GraphQL `operation` once with a bare HTTP `status`.
    pub fn with_graphql_status(mut self, operation: impl Into<String>, status: usize) -> Self {
        self.graphql_endpoints.push(GraphqlEndpoint::Status {
            operation: operation.into(),
            status,
        });
        self
    }

    /// Exchange authorization `code` for an access token of `user_id` valid for one hour.
    pub fn with_token_endpoint(mut self, code: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.token_endpoints.push((code.into(), user_id.into(), 3600));
        self
    }

    /// Exchange authorization `code` for an access token of `user_id` that is already expired.
    pub fn with_expired_token_endpoint(
        mut self,
        code: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        self.token_endpoints
            .push((code.into(), user_id.into(), -3600));
        self
    }

    /// Reject every token exchange with `400 invalid_grant`.
    pub fn with_token_error_endpoint(mut self) -> Self {
        self.token_error_endpoint = true;
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context, creating every queued mock endpoint.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::JwtError)` - Signing a token for a token endpoint failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;
        let mut mocks = Vec::new();

        // Custom endpoints first so they take precedence over generic ones on the same path
        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for endpoint in self.graphql_endpoints {
            let mock = match endpoint {
                GraphqlEndpoint::Data {
                    operation,
                    variables,
                    data,
                    expected_requests,
                } => context.graphql().create_operation_endpoint(
                    &operation,
                    variables,
                    data,
                    expected_requests,
                ),
                GraphqlEndpoint::Error { operation, message } => {
                    context.graphql().create_error_endpoint(&operation, &message)
                }
                GraphqlEndpoint::Status { operation, status } => {
                    context.graphql().create_status_endpoint(&operation, status)
                }
            };
            mocks.push(mock);
        }

        for (code, user_id, expires_in_secs) in self.token_endpoints {
            mocks.push(
                context
                    .auth()
                    .create_token_endpoint(&code, &user_id, expires_in_secs)?,
            );
        }

        if self.token_error_endpoint {
            mocks.push(context.auth().create_token_error_endpoint());
        }

        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
