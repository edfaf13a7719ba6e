//! Minimal GraphQL-over-HTTP client for the hosted backend.

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::server::{
    error::{auth::AuthError, graphql::GraphqlError, Error},
    model::context::RequestContext,
};

/// Sends GraphQL documents to the backend on behalf of the user in a [`RequestContext`].
///
/// Cloning is cheap, the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    operation_name: Option<&'a str>,
    variables: V,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlResponseError>,
}

#[derive(Deserialize)]
struct GraphqlResponseError {
    message: String,
}

impl GraphqlClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Executes `document` with `variables` and decodes the whole `data` object into `T`.
    ///
    /// # Returns
    /// - `Ok(T)` - Backend answered 2xx without errors and `data` decoded into `T`
    /// - `Err(Error::AuthError(AuthError::MissingAccessToken))` - Context carries no token,
    ///   nothing was sent
    /// - `Err(Error::HttpError)` - Request could not be sent or the body could not be read
    /// - `Err(Error::GraphqlError)` - Non-2xx status, GraphQL `errors`, missing or undecodable `data`
    pub async fn request_data<V, T>(
        &self,
        ctx: &RequestContext,
        document: &str,
        variables: V,
    ) -> Result<T, Error>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        if ctx.access_token.trim().is_empty() {
            return Err(AuthError::MissingAccessToken.into());
        }

        let operation_name = operation_name(document);

        tracing::debug!(
            operation = operation_name.unwrap_or("anonymous"),
            user_id = %ctx.user_id,
            "Sending GraphQL request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&ctx.access_token)
            .json(&GraphqlRequest {
                query: document,
                operation_name,
                variables,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GraphqlError::Status(status.as_u16()).into());
        }

        let body = response.bytes().await?;
        let body: GraphqlResponse = serde_json::from_slice(&body).map_err(GraphqlError::from)?;

        if !body.errors.is_empty() {
            let messages = body.errors.into_iter().map(|e| e.message).collect();

            return Err(GraphqlError::Response(messages).into());
        }

        let data = body.data.ok_or(GraphqlError::MissingData)?;

        Ok(serde_json::from_value(data).map_err(GraphqlError::from)?)
    }

    /// Executes `document` and decodes the top-level `field` of `data` into `T`.
    ///
    /// A field present with a `null` value decodes fine into an `Option`; a field that is
    /// absent altogether is reported as `GraphqlError::MissingField`.
    pub async fn request<V, T>(
        &self,
        ctx: &RequestContext,
        document: &str,
        variables: V,
        field: &str,
    ) -> Result<T, Error>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut data: Map<String, Value> = self.request_data(ctx, document, variables).await?;

        let value = data
            .remove(field)
            .ok_or_else(|| GraphqlError::MissingField(field.to_string()))?;

        Ok(serde_json::from_value(value).map_err(GraphqlError::from)?)
    }
}

/// Name of the first operation in `document`, e.g. `GetBikes` for `query GetBikes($id: uuid!)`
fn operation_name(document: &str) -> Option<&str> {
    let rest = document.trim_start();
    let rest = rest
        .strip_prefix("query")
        .or_else(|| rest.strip_prefix("mutation"))?;

    let name = rest.trim_start();
    let end = name
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(name.len());

    (end > 0).then(|| &name[..end])
}
