use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::manufacturer::ManufacturerDto,
    server::{
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::manufacturer::ManufacturerService,
    },
};

pub static MANUFACTURER_TAG: &str = "manufacturer";

/// All manufacturers, ordered by name
#[utoipa::path(
    get,
    path = "/api/manufacturers",
    tag = MANUFACTURER_TAG,
    responses(
        (status = 200, description = "Manufacturers ordered by name", body = Vec<ManufacturerDto>),
        (status = 401, description = "Not signed in", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn get_manufacturers(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, Error> {
    let manufacturers = ManufacturerService::new(&state.graphql, &state.cache)
        .get_all(&ctx)
        .await?;

    Ok((StatusCode::OK, Json(manufacturers)))
}
