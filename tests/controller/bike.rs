use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bike_parts_tracker::server::{
    controller::bike::{get_bike, get_bikes},
    error::INTERNAL_SERVER_ERROR_MESSAGE,
};
use serde_json::json;

use super::*;
use crate::util::{body_json, body_text, sign_in};

#[tokio::test]
/// Expect 200 with the bikes of the signed in user
async fn returns_owned_bikes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation_matching(
            "GetBikes",
            json!({ "user_id": TEST_USER_ID }),
            json!({ "bike": [factory::bike("b1", "Stumpjumper"), factory::bike("b2", "Crux")] }),
            1,
        )
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = get_bikes(State(test.into_app_state()), ctx)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["id"], "b1");
    assert_eq!(body[0]["discipline"]["abbr"], "MTB");
    assert_eq!(body[1]["name"], "Crux");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Repeated reads are answered from the page cache
async fn second_read_is_served_from_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation("GetBikes", json!({ "bike": [factory::bike("b1", "Stumpjumper")] }), 1)
        .build()
        .await?;
    let ctx = sign_in(&test).await?;
    let state = test.into_app_state();

    let first = get_bikes(State(state.clone()), ctx.clone())
        .await
        .into_response();
    let second = get_bikes(State(state), ctx).await.into_response();

    assert_eq!(body_json(first).await, body_json(second).await);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 200 with a single element array for an owned bike
async fn returns_owned_bike_as_array() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation_matching(
            "GetBike",
            json!({ "user_id": TEST_USER_ID, "bike_id": "b1" }),
            json!({ "bike": [factory::bike_detail("b1", "Stumpjumper")] }),
            1,
        )
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = get_bike(State(test.into_app_state()), ctx, Path("b1".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["manufacturer_id"], "m1");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Bikes of other users come back as an empty array, not an error
async fn returns_empty_array_for_foreign_bike() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation("GetBike", json!({ "bike": [] }), 1)
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = get_bike(State(test.into_app_state()), ctx, Path("b9".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

#[tokio::test]
/// Expect 500 with a generic message when the backend reports an error
async fn backend_error_is_hidden() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_error("GetBikes", "field 'bike' not found in type: 'query_root'")
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = get_bikes(State(test.into_app_state()), ctx)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(resp).await, INTERNAL_SERVER_ERROR_MESSAGE);
    test.assert_mocks();

    Ok(())
}
