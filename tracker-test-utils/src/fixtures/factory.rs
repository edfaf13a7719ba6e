//! Factory functions for generating test payloads.
//!
//! Rows mirror the shape the GraphQL backend returns so they can be dropped straight into a
//! mocked `data` object.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    iat: i64,
    exp: i64,
}

/// Sign an HS256 access token for `user_id` expiring `expires_in_secs` from now.
///
/// A negative `expires_in_secs` produces an already expired token.
pub fn access_token(
    user_id: &str,
    secret: &str,
    expires_in_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = TestClaims {
        sub: user_id,
        iat: now,
        exp: now + expires_in_secs,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn bike(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "strava_bike": false,
        "discipline": { "abbr": "MTB", "name": "Mountain Bike" }
    })
}

pub fn bike_detail(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "strava_bike": false,
        "manufacturer_id": "m1",
        "discipline": { "name": "Mountain Bike" }
    })
}

pub fn manufacturer(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

pub fn part(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "Fork",
        "manufacturer": manufacturer("m1", "Fox"),
        "model_year": 2020,
        "purchase_price": 399.0,
        "purchase_date": "2024-01-01",
        "sell_status": "not_for_sale",
        "sell_price": null,
        "secondhand": false,
        "shop_url": null,
        "weight": "1.2kg"
    })
}

pub fn installation(id: &str, bike_id: &str, part_id: &str, installed_at: &str) -> Value {
    json!({
        "id": id,
        "bike_id": bike_id,
        "installed_at": installed_at,
        "part": part(part_id, "Model X")
    })
}
