//! Request-scoped authentication context.
//!
//! Every controller that talks to the GraphQL backend takes a [`RequestContext`] and hands it
//! to the data layer, which is the only place the bearer token is read.

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::Utc;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
};

/// Authenticated identity and bearer token for one request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestContext {
    pub user_id: String,
    pub access_token: String,
}

impl RequestContext {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Builds the context from the signed in user stored in `session`.
    ///
    /// # Returns
    /// - `Ok(RequestContext)` - A user is signed in with an unexpired token
    /// - `Err(Error::AuthError(AuthError::NotAuthenticated))` - Nobody is signed in
    /// - `Err(Error::AuthError(AuthError::TokenExpired))` - The token has expired, the session
    ///   user is removed so the next login starts clean
    /// - `Err(Error)` - Session store failure
    pub async fn from_session(session: &Session) -> Result<Self, Error> {
        let Some(user) = SessionUser::get(session).await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        if user.is_expired(Utc::now().timestamp()) {
            session.clear().await;

            tracing::debug!(
                user_id = %user.user_id,
                "Cleared session holding an expired access token"
            );

            return Err(AuthError::TokenExpired(user.user_id).into());
        }

        Ok(Self {
            user_id: user.user_id,
            access_token: user.access_token,
        })
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AuthError::SessionUnavailable(message.to_string()))?;

        Self::from_session(&session).await
    }
}
