use crate::server::{cache::PageCache, data::graphql::GraphqlClient, service::auth::AuthClient};

#[derive(Clone)]
pub struct AppState {
    pub graphql: GraphqlClient,
    pub auth: AuthClient,
    pub cache: PageCache,
}

impl AppState {
    pub fn new(graphql: GraphqlClient, auth: AuthClient, cache: PageCache) -> Self {
        Self {
            graphql,
            auth,
            cache,
        }
    }
}
