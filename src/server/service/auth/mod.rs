//! Authentication service layer.
//!
//! Handles the OAuth2 authorization code flow against the session provider: building the
//! login redirect and exchanging the callback code for a verified access token. The access
//! token is an HS256 JWT whose `sub` claim is the user id the GraphQL backend scopes data by.

pub mod callback;
pub mod login;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
    RedirectUrl, TokenUrl,
};
use serde::Deserialize;

use crate::server::{
    config::Config,
    error::{auth::AuthError, config::ConfigError, Error},
};

type ProviderClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Settings of the OAuth2 session provider
#[derive(Clone, Debug)]
pub struct AuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub authorize_url: String,
    pub token_url: String,
    pub callback_url: String,
    pub jwt_secret: String,
    pub scopes: Vec<String>,
}

impl From<&Config> for AuthSettings {
    fn from(config: &Config) -> Self {
        Self {
            client_id: config.auth_client_id.clone(),
            client_secret: config.auth_client_secret.clone(),
            authorize_url: config.auth_authorize_url.clone(),
            token_url: config.auth_token_url.clone(),
            callback_url: config.auth_callback_url.clone(),
            jwt_secret: config.auth_jwt_secret.clone(),
            scopes: config.auth_scopes.clone(),
        }
    }
}

/// Claims read from a provider access token
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub exp: i64,
}

/// OAuth2 client for the session provider plus the key verifying its access tokens.
#[derive(Clone)]
pub struct AuthClient {
    oauth: ProviderClient,
    http: reqwest::Client,
    jwt_key: DecodingKey,
    scopes: Vec<String>,
}

impl AuthClient {
    /// Builds the client, failing on malformed provider URLs.
    ///
    /// The HTTP client used for token exchange never follows redirects.
    pub fn new(settings: AuthSettings) -> Result<Self, Error> {
        let oauth = BasicClient::new(ClientId::new(settings.client_id))
            .set_client_secret(ClientSecret::new(settings.client_secret))
            .set_auth_uri(AuthUrl::new(settings.authorize_url).map_err(|e| {
                invalid_url("AUTH_AUTHORIZE_URL", e)
            })?)
            .set_token_uri(
                TokenUrl::new(settings.token_url).map_err(|e| invalid_url("AUTH_TOKEN_URL", e))?,
            )
            .set_redirect_uri(
                RedirectUrl::new(settings.callback_url)
                    .map_err(|e| invalid_url("AUTH_CALLBACK_URL", e))?,
            );

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            oauth,
            http,
            jwt_key: DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
            scopes: settings.scopes,
        })
    }

    /// Verifies the signature and expiry of `access_token` and returns its claims.
    ///
    /// # Returns
    /// - `Ok(AccessTokenClaims)` - Token is signed with the shared secret and not expired
    /// - `Err(AuthError::TokenExpired)` - Token is past its `exp` claim
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed token or missing claims
    pub fn verify_access_token(&self, access_token: &str) -> Result<AccessTokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        match jsonwebtoken::decode::<AccessTokenClaims>(access_token, &self.jwt_key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    // Signature already checked out, only read who the token belonged to
                    validation.validate_exp = false;
                    let user_id = jsonwebtoken::decode::<AccessTokenClaims>(
                        access_token,
                        &self.jwt_key,
                        &validation,
                    )
                    .map(|data| data.claims.sub)
                    .unwrap_or_default();

                    Err(AuthError::TokenExpired(user_id))
                }
                _ => Err(AuthError::InvalidToken(err)),
            },
        }
    }
}

fn invalid_url(var: &str, err: oauth2::url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: err.to_string(),
    }
}
