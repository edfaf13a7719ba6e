use axum::{http::StatusCode, response::IntoResponse};
use bike_parts_tracker::server::{
    controller::auth::get_user,
    error::{auth::AuthError, Error},
    model::{context::RequestContext, session::user::SessionUser},
};
use chrono::Utc;

use super::*;
use crate::util::{body_json, sign_in};

#[tokio::test]
/// Expect 200 with the user id of the signed in user
async fn returns_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test).await?;

    let ctx = RequestContext::from_session(&test.session).await.unwrap();
    let resp = get_user(ctx).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "id": TEST_USER_ID })
    );

    Ok(())
}

#[tokio::test]
/// Expired tokens never produce a user and are removed from the session
async fn expired_token_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let user = SessionUser {
        user_id: TEST_USER_ID.to_string(),
        access_token: test.expired_access_token(TEST_USER_ID)?,
        expires_at: Utc::now().timestamp() - 60,
    };
    SessionUser::insert(&test.session, &user).await.unwrap();

    let result = RequestContext::from_session(&test.session).await;

    let Err(err) = result else {
        panic!("expected expired session to be rejected");
    };
    assert!(matches!(err, Error::AuthError(AuthError::TokenExpired(_))));
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}
