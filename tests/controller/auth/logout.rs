use axum::{http::StatusCode, response::IntoResponse};
use bike_parts_tracker::server::{controller::auth::logout, model::session::user::SessionUser};

use super::*;
use crate::util::sign_in;

#[tokio::test]
/// Expect 307 redirect home after logout with a user in session
async fn returns_redirect_on_logout_with_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test).await?;

    let resp = logout(test.session.clone()).await.into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    // Ensure user was cleared from session
    let user = SessionUser::get(&test.session).await.unwrap();
    assert!(user.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 redirect home even without session data
///
/// Clearing a session that was never stored fails, so the endpoint only clears sessions
/// holding a user and redirects regardless.
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = logout(test.session.clone()).await.into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
