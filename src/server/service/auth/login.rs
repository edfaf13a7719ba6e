use oauth2::{CsrfToken, Scope};

use crate::server::service::auth::AuthClient;

/// Provider authorization URL and the CSRF state it carries
#[derive(Debug)]
pub struct LoginRedirect {
    pub url: String,
    pub csrf_state: String,
}

pub fn login_service(auth: &AuthClient) -> LoginRedirect {
    let (url, csrf_state) = auth
        .oauth
        .authorize_url(CsrfToken::new_random)
        .add_scopes(auth.scopes.iter().cloned().map(Scope::new))
        .url();

    LoginRedirect {
        url: url.to_string(),
        csrf_state: csrf_state.secret().to_string(),
    }
}
