use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, LOCATION, SET_COOKIE},
        Method, Request, StatusCode,
    },
};

use super::*;
use crate::util::{body_json, body_text, send};

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
/// Every data endpoint answers 401 without a signed in user and never reaches the backend
async fn data_endpoints_require_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| server.mock("POST", mockito::Matcher::Any).expect(0).create())
        .build()
        .await?;

    let requests = [
        (Method::GET, "/api/auth/user"),
        (Method::GET, "/api/bikes"),
        (Method::GET, "/api/bikes/b1"),
        (Method::GET, "/api/bikes/b1/installations"),
        (Method::GET, "/api/manufacturers"),
        (Method::DELETE, "/api/installations/i1"),
        (Method::DELETE, "/api/parts/p1"),
    ];

    for (method, uri) in requests {
        let resp = send(test.into_app_state(), request(method.clone(), uri)).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(body_text(resp).await, "Unauthorized");
    }
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// The add part form is rejected before its body is read when nobody is signed in
async fn add_part_form_requires_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/installations")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("bike=b1"))
        .unwrap();

    let resp = send(test.into_app_state(), request).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Login through the router stores the CSRF state in a session cookie
async fn login_sets_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(test.into_app_state(), request(Method::GET, "/api/auth/login")).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(resp.headers().contains_key(LOCATION));
    assert!(resp.headers().contains_key(SET_COOKIE));

    Ok(())
}

#[tokio::test]
/// The OpenAPI document lists every API route
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(
        test.into_app_state(),
        request(Method::GET, "/api/docs/openapi.json"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    for path in [
        "/api/auth/login",
        "/api/auth/callback",
        "/api/auth/logout",
        "/api/auth/user",
        "/api/bikes",
        "/api/bikes/{id}",
        "/api/bikes/{id}/installations",
        "/api/manufacturers",
        "/api/installations",
        "/api/installations/{id}",
        "/api/parts/{id}",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing {}", path);
    }

    Ok(())
}
