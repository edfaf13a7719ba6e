//! Error types for the bike parts tracker server.
//!
//! This module provides the error hierarchy used by every server layer. Domain-specific
//! errors (authentication, configuration, GraphQL backend) live in submodules and are
//! aggregated into [`Error`], which converts automatically via `?` and implements
//! `IntoResponse` so controllers can return it directly. Page cache failures
//! ([`cache::CacheError`]) never reach a response, callers log them and carry on.
//!
//! Error responses are plain text. Anything that isn't a client mistake becomes a generic
//! 500 response and the underlying error is only written to the log.

pub mod auth;
pub mod cache;
pub mod config;
pub mod graphql;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{auth::AuthError, config::ConfigError, graphql::GraphqlError};

/// Body of every 500 response.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Something went wrong";

/// Main error type for the server application.
///
/// Aggregates domain errors and external library errors. `#[from]` conversions allow the
/// `?` operator across service, repository and controller boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, token validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// GraphQL backend returned an error or an unexpected payload.
    #[error(transparent)]
    GraphqlError(#[from] GraphqlError),
    /// Submitted input failed validation.
    #[error("Invalid input: {0}")]
    ValidationError(String),
    /// The requested resource does not exist or is not owned by the user.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Transport error talking to the GraphQL backend or the session provider.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid form input or failed login CSRF check
/// - 401 Unauthorized - No usable session
/// - 404 Not Found - Missing resource
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(message) => {
                tracing::debug!("Rejected invalid input: {}", message);

                (StatusCode::BAD_REQUEST, message).into_response()
            }
            Self::NotFound(resource) => {
                tracing::debug!("Resource not found: {}", resource);

                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a fixed message so backend details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_SERVER_ERROR_MESSAGE,
        )
            .into_response()
    }
}
