use std::time::Duration;

use crate::server::error::config::ConfigError;

pub const DEFAULT_AUTH_SCOPES: &str = "read";
pub const DEFAULT_PAGE_CACHE_TTL_SECS: u64 = 60;

pub struct Config {
    /// GraphQL backend endpoint, e.g. `https://example.hasura.app/v1/graphql`
    pub graphql_url: String,
    pub auth_client_id: String,
    pub auth_client_secret: String,
    pub auth_authorize_url: String,
    pub auth_token_url: String,
    pub auth_callback_url: String,
    /// HS256 secret shared with the session provider and the GraphQL backend
    pub auth_jwt_secret: String,
    pub auth_scopes: Vec<String>,
    pub valkey_url: String,
    pub page_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let auth_scopes = lookup("AUTH_SCOPES")
            .unwrap_or_else(|| DEFAULT_AUTH_SCOPES.to_string())
            .split(',')
            .map(str::trim)
            .filter(|scope| !scope.is_empty())
            .map(str::to_string)
            .collect();

        let page_cache_ttl = match lookup("PAGE_CACHE_TTL_SECS") {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "PAGE_CACHE_TTL_SECS".to_string(),
                        reason: e.to_string(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_PAGE_CACHE_TTL_SECS),
        };

        let graphql_url = required("GRAPHQL_URL")?;
        if !graphql_url.starts_with("http://") && !graphql_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvValue {
                var: "GRAPHQL_URL".to_string(),
                reason: "must be an http(s) URL".to_string(),
            });
        }

        Ok(Self {
            graphql_url,
            auth_client_id: required("AUTH_CLIENT_ID")?,
            auth_client_secret: required("AUTH_CLIENT_SECRET")?,
            auth_authorize_url: required("AUTH_AUTHORIZE_URL")?,
            auth_token_url: required("AUTH_TOKEN_URL")?,
            auth_callback_url: required("AUTH_CALLBACK_URL")?,
            auth_jwt_secret: required("AUTH_JWT_SECRET")?,
            auth_scopes,
            valkey_url: required("VALKEY_URL")?,
            page_cache_ttl,
        })
    }
}
