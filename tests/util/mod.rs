//! Helpers turning a [`TestContext`] into the application state and router used by
//! controller tests.

use std::time::Duration;

use axum::{body::Body, http::Request, response::Response, Router};
use bike_parts_tracker::server::{
    cache::PageCache,
    data::graphql::GraphqlClient,
    model::{app::AppState, context::RequestContext, session::user::SessionUser},
    router::routes,
    service::auth::{AuthClient, AuthSettings},
};
use chrono::Utc;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tracker_test_utils::prelude::*;

/// Page cache lifetime used by controller tests
pub const TEST_CACHE_TTL: Duration = Duration::from_secs(60);

/// Extension trait for TestContext to create the AppState pointing at its mock server
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let graphql = GraphqlClient::new(reqwest::Client::new(), self.graphql_url());

        let auth = AuthClient::new(AuthSettings {
            client_id: TEST_AUTH_CLIENT_ID.to_string(),
            client_secret: TEST_AUTH_CLIENT_SECRET.to_string(),
            authorize_url: self.authorize_url(),
            token_url: self.token_url(),
            callback_url: TEST_CALLBACK_URL.to_string(),
            jwt_secret: TEST_JWT_SECRET.to_string(),
            scopes: vec!["openid".to_string()],
        })
        .expect("Failed to build auth client for mock server");

        AppState::new(graphql, auth, PageCache::new(TEST_CACHE_TTL))
    }
}

/// Signs [`TEST_USER_ID`] into the test session with a valid access token
pub async fn sign_in(test: &TestContext) -> Result<RequestContext, TestError> {
    let access_token = test.access_token(TEST_USER_ID)?;
    let user = SessionUser {
        user_id: TEST_USER_ID.to_string(),
        access_token: access_token.clone(),
        expires_at: Utc::now().timestamp() + 3600,
    };

    SessionUser::insert(&test.session, &user)
        .await
        .expect("Failed to insert session user");

    Ok(RequestContext::new(TEST_USER_ID, access_token))
}

/// Full API router behind an in-memory session layer
pub fn test_router(state: AppState) -> Router {
    routes()
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

/// Sends `request` through a fresh router instance
pub async fn send(state: AppState, request: Request<Body>) -> Response {
    test_router(state)
        .oneshot(request)
        .await
        .expect("Router is infallible")
}

pub async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

pub async fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(resp).await).expect("Response body is not JSON")
}
