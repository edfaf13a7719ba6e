use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No authenticated user is present in session")]
    NotAuthenticated,
    #[error("Access token for user {0:?} has expired")]
    TokenExpired(String),
    #[error("Refusing to call the GraphQL backend without an access token")]
    MissingAccessToken,
    #[error("Access token failed validation: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Failed to exchange authorization code for an access token: {0}")]
    TokenExchange(String),
    #[error("Session could not be loaded for the request: {0}")]
    SessionUnavailable(String),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state missing from session")]
    CsrfMissingValue,
}

impl AuthError {
    fn unauthorized() -> Response {
        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::MissingAccessToken => {
                tracing::debug!("{}", self);

                Self::unauthorized()
            }
            Self::TokenExpired(ref user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::unauthorized()
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
