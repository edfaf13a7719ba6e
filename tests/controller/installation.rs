use axum::{
    body::Body,
    extract::{FromRequest, Path, State},
    http::{
        header::{CONTENT_TYPE, LOCATION},
        Method, Request, StatusCode,
    },
    response::IntoResponse,
    Form, Json,
};
use bike_parts_tracker::{
    model::installation::{AddInstallationForm, InstallPartDto},
    server::{
        controller::installation::{
            add_installation, get_bike_installations, install_part, uninstall_part,
        },
        error::INTERNAL_SERVER_ERROR_MESSAGE,
    },
};
use chrono::NaiveDate;
use serde_json::json;

use super::*;
use crate::util::{body_json, body_text, sign_in};

/// Urlencoded body as submitted by the add part modal
const ADD_PART_FORM_BODY: &str = "bike=b1&manufacturer=m1&name=Model+X&year=2020&price=399\
    &purchase_date=2024-01-01&sell_status=not_for_sale&sell_price=&shop_url=\
    &type=Fork&weight=1.2kg&installed_at=2024-01-02";

/// Runs the form extractor over `body` exactly like the router would
async fn extract_form(
    body: &str,
) -> Result<Form<AddInstallationForm>, axum::extract::rejection::FormRejection> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/installations")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    Form::<AddInstallationForm>::from_request(request, &()).await
}

#[tokio::test]
/// Expect 200 with installations of the bike, part and manufacturer nested
async fn returns_bike_installations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation_matching(
            "GetBikeInstallations",
            json!({ "user_id": TEST_USER_ID, "bike_id": "b1" }),
            json!({
                "installation": [
                    factory::installation("i2", "b1", "p2", "2024-03-01"),
                    factory::installation("i1", "b1", "p1", "2024-01-02")
                ]
            }),
            1,
        )
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = get_bike_installations(State(test.into_app_state()), ctx, Path("b1".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["id"], "i2");
    assert_eq!(body[1]["part"]["type"], "Fork");
    assert_eq!(body[1]["part"]["manufacturer"]["name"], "Fox");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 303 back to the bike page after the modal posts a valid form
async fn add_part_form_redirects_to_bike_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation_matching(
            "AddInstallation",
            json!({
                "object": {
                    "bike_id": "b1",
                    "installed_at": "2024-01-02",
                    "part": { "data": { "name": "Model X", "manufacturer_id": "m1" } }
                }
            }),
            json!({
                "insert_installation_one": factory::installation("i1", "b1", "p1", "2024-01-02")
            }),
            1,
        )
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = add_installation(
        State(test.into_app_state()),
        ctx,
        extract_form(ADD_PART_FORM_BODY).await,
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/bikes/b1");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the checkbox, radio and optional inputs of the modal to reach the mutation
async fn add_part_form_forwards_optional_fields() -> Result<(), TestError> {
    let body = "bike=b1&manufacturer=m1&name=Model+X&year=2020&price=399\
        &purchase_date=2024-01-01&sell_status=for_sale&sell_price=450.5\
        &secondhand=true&shop_url=https%3A%2F%2Fshop.example%2Fx\
        &type=Fork&weight=1.2kg&installed_at=2024-01-02";
    let test = TestBuilder::new()
        .with_graphql_operation_matching(
            "AddInstallation",
            json!({
                "object": {
                    "bike_id": "b1",
                    "part": {
                        "data": {
                            "secondhand": true,
                            "sell_status": "for_sale",
                            "sell_price": 450.5,
                            "shop_url": "https://shop.example/x"
                        }
                    }
                }
            }),
            json!({
                "insert_installation_one": factory::installation("i1", "b1", "p1", "2024-01-02")
            }),
            1,
        )
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let Form(form) = extract_form(body).await.unwrap();
    assert!(form.secondhand);
    assert_eq!(form.sell_price, Some(450.5));

    let resp = add_installation(State(test.into_app_state()), ctx, Ok(Form(form)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 for a price the backend cannot store, nothing is sent to the backend
async fn non_finite_price_is_bad_request() -> Result<(), TestError> {
    let body = ADD_PART_FORM_BODY.replace("price=399", "price=NaN");
    let test = TestBuilder::new()
        .with_graphql_operation("AddInstallation", json!({}), 0)
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = add_installation(State(test.into_app_state()), ctx, extract_form(&body).await)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, "Field `price` must be a number");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 naming the problem when the form cannot be decoded
async fn undecodable_form_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation("AddInstallation", json!({}), 0)
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = add_installation(
        State(test.into_app_state()),
        ctx,
        extract_form("bike=b1&name=Model+X").await,
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("manufacturer"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 for a decodable form failing validation, nothing is sent to the backend
async fn invalid_form_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation("AddInstallation", json!({}), 0)
        .build()
        .await?;
    let ctx = sign_in(&test).await?;
    let body = ADD_PART_FORM_BODY.replace("name=Model+X", "name=+++");

    let resp = add_installation(State(test.into_app_state()), ctx, extract_form(&body).await)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, "Field `name` must not be empty");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 500 with a generic message when the backend rejects the insert
async fn backend_error_while_adding_is_500() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_error("AddInstallation", "Foreign key violation on manufacturer_id")
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = add_installation(
        State(test.into_app_state()),
        ctx,
        extract_form(ADD_PART_FORM_BODY).await,
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(resp).await, INTERNAL_SERVER_ERROR_MESSAGE);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 201 with the new installation when mounting an existing part
async fn installs_existing_part() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation_matching(
            "InstallPart",
            json!({ "bike_id": "b2", "part_id": "p1", "installed_at": "2024-05-01" }),
            json!({
                "insert_installation_one": factory::installation("i3", "b2", "p1", "2024-05-01")
            }),
            1,
        )
        .build()
        .await?;
    let ctx = sign_in(&test).await?;
    let payload = InstallPartDto {
        part_id: "p1".to_string(),
        installed_at: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    };

    let resp = install_part(
        State(test.into_app_state()),
        ctx,
        Path("b2".to_string()),
        Ok(Json(payload)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["id"], "i3");
    assert_eq!(body["bike_id"], "b2");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 204 once the installation is gone
async fn uninstalls_part() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation_matching(
            "DeleteInstallation",
            json!({ "id": "i1" }),
            json!({
                "delete_installation_by_pk": { "id": "i1", "bike_id": "b1", "part_id": "p1" }
            }),
            1,
        )
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = uninstall_part(State(test.into_app_state()), ctx, Path("i1".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 when the installation does not exist or belongs to someone else
async fn uninstalling_unknown_installation_is_404() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_operation(
            "DeleteInstallation",
            json!({ "delete_installation_by_pk": null }),
            1,
        )
        .build()
        .await?;
    let ctx = sign_in(&test).await?;

    let resp = uninstall_part(State(test.into_app_state()), ctx, Path("i9".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Not found");

    Ok(())
}
