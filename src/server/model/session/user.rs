use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_KEY: &str = "tracker:user";

/// Identity and bearer token of the signed in user
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct SessionUser {
    pub user_id: String,
    pub access_token: String,
    /// Token expiry as a unix timestamp in seconds
    pub expires_at: i64,
}

impl SessionUser {
    /// Insert user into session
    pub async fn insert(session: &Session, user: &SessionUser) -> Result<(), Error> {
        session.insert(SESSION_USER_KEY, user).await?;

        Ok(())
    }

    /// Get user from session
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        let user = session.get::<SessionUser>(SESSION_USER_KEY).await?;

        Ok(user)
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}
