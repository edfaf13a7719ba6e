use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Takes the pending CSRF state out of the session and compares it with `csrf_state`.
///
/// # Returns
/// - `Ok(())` - States match
/// - `Err(Error::AuthError(AuthError::CsrfValidationFailed))` - States differ (400)
/// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login pending (500)
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::remove(session).await?;

    if stored_state != csrf_state {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    Ok(())
}
