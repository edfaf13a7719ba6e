use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::{
    error::Error,
    model::{app::AppState, context::RequestContext},
    service::part::PartService,
};

pub static PART_TAG: &str = "part";

/// Deletes a part together with all of its installations
///
/// Installations and part are removed by one backend transaction.
#[utoipa::path(
    delete,
    path = "/api/parts/{id}",
    tag = PART_TAG,
    params(("id" = String, Path, description = "Part ID")),
    responses(
        (status = 204, description = "Part and its installations deleted"),
        (status = 401, description = "Not signed in", body = String),
        (status = 404, description = "Part not found", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn delete_part(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    PartService::new(&state.graphql, &state.cache)
        .delete_part(&ctx, &id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("part {}", id)))?;

    Ok(StatusCode::NO_CONTENT)
}
