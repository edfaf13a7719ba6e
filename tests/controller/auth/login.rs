use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use bike_parts_tracker::server::{
    controller::auth::login, model::session::auth::SessionAuthCsrf,
};

use super::*;

#[tokio::test]
/// Expect 307 redirect to the provider with the CSRF state stored in session
async fn redirects_to_provider_and_stores_csrf_state() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();

    let resp = login(State(state), test.session.clone()).await.into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(location.starts_with(&test.authorize_url()));
    assert!(location.contains(&format!("client_id={}", TEST_AUTH_CLIENT_ID)));

    let csrf_state = SessionAuthCsrf::remove(&test.session).await.unwrap();
    assert!(location.contains(&format!("state={}", csrf_state)));

    Ok(())
}

#[tokio::test]
/// Starting a second login replaces the pending CSRF state
async fn second_login_replaces_csrf_state() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();

    let first = login(State(state.clone()), test.session.clone())
        .await
        .into_response();
    let second = login(State(state), test.session.clone())
        .await
        .into_response();

    let second_location = second.headers().get(LOCATION).unwrap().to_str().unwrap();
    let first_location = first.headers().get(LOCATION).unwrap().to_str().unwrap();
    let csrf_state = SessionAuthCsrf::remove(&test.session).await.unwrap();

    assert!(second_location.contains(&format!("state={}", csrf_state)));
    assert!(!first_location.contains(&format!("state={}", csrf_state)));

    Ok(())
}
