use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::bike::{BikeDetailDto, BikeDto},
    server::{
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::bike::BikeService,
    },
};

pub static BIKE_TAG: &str = "bike";

/// Bikes owned by the signed in user
#[utoipa::path(
    get,
    path = "/api/bikes",
    tag = BIKE_TAG,
    responses(
        (status = 200, description = "Bikes of the signed in user", body = Vec<BikeDto>),
        (status = 401, description = "Not signed in", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn get_bikes(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, Error> {
    let bikes = BikeService::new(&state.graphql, &state.cache)
        .get_owned_bikes(&ctx)
        .await?;

    Ok((StatusCode::OK, Json(bikes)))
}

/// Bike `id` if owned by the signed in user
///
/// Always an array, empty when the bike does not exist or belongs to someone else.
#[utoipa::path(
    get,
    path = "/api/bikes/{id}",
    tag = BIKE_TAG,
    params(("id" = String, Path, description = "Bike ID")),
    responses(
        (status = 200, description = "Zero or one bikes", body = Vec<BikeDetailDto>),
        (status = 401, description = "Not signed in", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn get_bike(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let bike = BikeService::new(&state.graphql, &state.cache)
        .get_owned_bike(&ctx, &id)
        .await?;

    Ok((StatusCode::OK, Json(bike)))
}
