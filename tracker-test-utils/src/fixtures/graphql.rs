//! GraphQL backend mock endpoint creation utilities.
//!
//! Every GraphQL request is a POST to the same path, so mocks tell operations apart by the
//! `operationName` field of the request body.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::GRAPHQL_PATH, TestContext};

impl TestContext {
    pub fn graphql<'a>(&'a mut self) -> GraphqlFixtures<'a> {
        GraphqlFixtures { context: self }
    }
}

pub struct GraphqlFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> GraphqlFixtures<'a> {
    /// Create a mock endpoint answering `operation` with `{ "data": data }`.
    ///
    /// # Arguments
    /// - `operation` - Operation name the request body must carry
    /// - `variables` - When set, variables the request must include
    /// - `data` - Value returned as the response `data`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_operation_endpoint(
        &mut self,
        operation: &str,
        variables: Option<Value>,
        data: Value,
        expected_requests: usize,
    ) -> Mock {
        self.create_endpoint(
            operation,
            variables,
            200,
            json!({ "data": data }),
            expected_requests,
        )
    }

    /// Create a mock endpoint answering `operation` with a GraphQL error.
    pub fn create_error_endpoint(&mut self, operation: &str, message: &str) -> Mock {
        self.create_endpoint(
            operation,
            None,
            200,
            json!({
                "errors": [
                    { "message": message, "extensions": { "code": "validation-failed" } }
                ]
            }),
            1,
        )
    }

    /// Create a mock endpoint answering `operation` with a bare HTTP `status`.
    pub fn create_status_endpoint(&mut self, operation: &str, status: usize) -> Mock {
        self.create_endpoint(operation, None, status, json!({}), 1)
    }

    fn create_endpoint(
        &mut self,
        operation: &str,
        variables: Option<Value>,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let mut expected_body = json!({ "operationName": operation });
        if let Some(variables) = variables {
            expected_body["variables"] = variables;
        }

        self.context
            .server
            .mock("POST", GRAPHQL_PATH)
            .match_header("authorization", Matcher::Regex("^Bearer .+".to_string()))
            .match_body(Matcher::PartialJson(expected_body))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
