//! CSRF state stored in the session between login and the OAuth callback.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for the pending login CSRF state.
pub const SESSION_AUTH_CSRF_KEY: &str = "tracker:auth:csrf";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Stores the CSRF state generated for the provider authorization URL, replacing
    /// any state left over from an abandoned login.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Takes the CSRF state out of the session so a callback URL can only be used once.
    ///
    /// # Returns
    /// - `Ok(String)` - The stored state
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login is pending
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
