use dioxus_logger::tracing;
use oauth2::{AuthorizationCode, TokenResponse};

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
    service::auth::AuthClient,
};

/// Exchanges the callback `code` for an access token and returns the user to sign in.
///
/// # Returns
/// - `Ok(SessionUser)` - Token obtained and verified
/// - `Err(Error::AuthError(AuthError::TokenExchange))` - Provider refused the code
/// - `Err(Error::AuthError(_))` - Token signature or expiry invalid
pub async fn callback_service(auth: &AuthClient, code: String) -> Result<SessionUser, Error> {
    let token = auth
        .oauth
        .exchange_code(AuthorizationCode::new(code))
        .request_async(&auth.http)
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let access_token = token.access_token().secret().to_string();
    let claims = auth.verify_access_token(&access_token)?;

    tracing::info!(user_id = %claims.sub, "User signed in");

    Ok(SessionUser {
        user_id: claims.sub,
        access_token,
        expires_at: claims.exp,
    })
}
