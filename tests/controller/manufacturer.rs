use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bike_parts_tracker::server::controller::manufacturer::get_manufacturers;
use serde_json::json;

use super::*;
use crate::util::{body_json, sign_in};

#[tokio::test]
/// Expect 200 with manufacturers in the order the backend sorted them
async fn returns_manufacturers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation(
            "GetManufacturers",
            json!({
                "manufacturer": [
                    factory::manufacturer("m1", "Fox"),
                    factory::manufacturer("m2", "Shimano")
                ]
            }),
            1,
        )
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = get_manufacturers(State(test.into_app_state()), ctx)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([
            { "id": "m1", "name": "Fox" },
            { "id": "m2", "name": "Shimano" }
        ])
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 500 when the backend is unavailable
async fn backend_unavailable_is_500() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_status("GetManufacturers", 503)
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = get_manufacturers(State(test.into_app_state()), ctx)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
