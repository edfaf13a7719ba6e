use thiserror::Error;

/// Failures reported by, or decoding responses from, the GraphQL backend.
#[derive(Error, Debug)]
pub enum GraphqlError {
    #[error("GraphQL backend responded with HTTP status {0}")]
    Status(u16),
    #[error("GraphQL backend returned errors: {}", .0.join("; "))]
    Response(Vec<String>),
    #[error("GraphQL response contained no data")]
    MissingData,
    #[error("GraphQL response is missing top-level field `{0}`")]
    MissingField(String),
    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
}
