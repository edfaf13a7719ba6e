//! Browser requests against the tracker API.
//!
//! Requests include the session cookie. Failures are returned as display strings for logging.

#![cfg(feature = "web")]

use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

use crate::model::{
    bike::{BikeDetailDto, BikeDto},
    installation::InstallationDto,
    manufacturer::ManufacturerDto,
    user::UserDto,
};

async fn error_text(response: Response) -> String {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    format!("Request failed with status {}: {}", status, text)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response of {}: {}", url, e)),
        _ => Err(error_text(response).await),
    }
}

async fn delete(url: &str) -> Result<(), String> {
    let response = Request::delete(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        204 => Ok(()),
        _ => Err(error_text(response).await),
    }
}

/// Signed in user, `None` when not signed in
pub async fn get_user() -> Result<Option<UserDto>, String> {
    let response = Request::get("/api/auth/user")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<UserDto>()
            .await
            .map(Some)
            .map_err(|e| format!("Failed to parse user data: {}", e)),
        401 => Ok(None),
        _ => Err(error_text(response).await),
    }
}

pub async fn get_bikes() -> Result<Vec<BikeDto>, String> {
    get_json("/api/bikes").await
}

pub async fn get_bike(bike_id: &str) -> Result<Vec<BikeDetailDto>, String> {
    get_json(&format!("/api/bikes/{}", bike_id)).await
}

pub async fn get_bike_installations(bike_id: &str) -> Result<Vec<InstallationDto>, String> {
    get_json(&format!("/api/bikes/{}/installations", bike_id)).await
}

pub async fn get_manufacturers() -> Result<Vec<ManufacturerDto>, String> {
    get_json("/api/manufacturers").await
}

pub async fn uninstall_part(installation_id: &str) -> Result<(), String> {
    delete(&format!("/api/installations/{}", installation_id)).await
}

/// Deletes the part and every installation of it in one request
pub async fn delete_part(part_id: &str) -> Result<(), String> {
    delete(&format!("/api/parts/{}", part_id)).await
}
