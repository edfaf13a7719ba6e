use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    cache::PageCache,
    config::Config,
    data::graphql::GraphqlClient,
    error::Error,
    service::auth::{AuthClient, AuthSettings},
};

/// Build the GraphQL client for the configured backend endpoint
pub fn build_graphql_client(config: &Config) -> Result<GraphqlClient, Error> {
    let http = reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    Ok(GraphqlClient::new(http, &config.graphql_url))
}

/// Build the OAuth2 client for the session provider
pub fn build_auth_client(config: &Config) -> Result<AuthClient, Error> {
    AuthClient::new(AuthSettings::from(config))
}

pub fn build_page_cache(config: &Config) -> PageCache {
    PageCache::new(config.page_cache_ttl)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig, Pool};

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies everywhere except debug builds served over plain http
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}
