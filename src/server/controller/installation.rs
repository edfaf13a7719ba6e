use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form, Json,
};

use crate::{
    model::installation::{AddInstallationForm, InstallPartDto, InstallationDto},
    server::{
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::installation::InstallationService,
    },
};

pub static INSTALLATION_TAG: &str = "installation";

/// Installations of a bike owned by the signed in user, newest first
#[utoipa::path(
    get,
    path = "/api/bikes/{id}/installations",
    tag = INSTALLATION_TAG,
    params(("id" = String, Path, description = "Bike ID")),
    responses(
        (status = 200, description = "Installations of the bike", body = Vec<InstallationDto>),
        (status = 401, description = "Not signed in", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn get_bike_installations(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let installations = InstallationService::new(&state.graphql, &state.cache)
        .get_bike_installations(&ctx, &id)
        .await?;

    Ok((StatusCode::OK, Json(installations)))
}

/// Installs an existing part on a bike
#[utoipa::path(
    post,
    path = "/api/bikes/{id}/installations",
    tag = INSTALLATION_TAG,
    params(("id" = String, Path, description = "Bike ID")),
    request_body = InstallPartDto,
    responses(
        (status = 201, description = "Part installed", body = InstallationDto),
        (status = 400, description = "Malformed request body", body = String),
        (status = 401, description = "Not signed in", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn install_part(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    payload: Result<Json<InstallPartDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(|e| Error::ValidationError(e.body_text()))?;

    let installation = InstallationService::new(&state.graphql, &state.cache)
        .install_part(&ctx, &id, &payload.part_id, payload.installed_at)
        .await?;

    Ok((StatusCode::CREATED, Json(installation)))
}

/// Form action of the add part modal: creates a part and installs it on the bike
///
/// # Responses
/// - 303 (See Other): Part added, redirect back to the bike page
/// - 400 (Bad Request): Form could not be decoded or failed validation
/// - 401 (Unauthorized): Not signed in
/// - 500 (Internal Server Error): Backend failure, nothing was added
#[utoipa::path(
    post,
    path = "/api/installations",
    tag = INSTALLATION_TAG,
    request_body(
        content = AddInstallationForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 303, description = "Part added, redirect to the bike page"),
        (status = 400, description = "Invalid form", body = String),
        (status = 401, description = "Not signed in", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn add_installation(
    State(state): State<AppState>,
    ctx: RequestContext,
    form: Result<Form<AddInstallationForm>, FormRejection>,
) -> Result<impl IntoResponse, Error> {
    let Form(form) = form.map_err(|e| Error::ValidationError(e.body_text()))?;

    InstallationService::new(&state.graphql, &state.cache)
        .add_installation(&ctx, &form)
        .await?;

    Ok(Redirect::to(&format!("/bikes/{}", form.bike)))
}

/// Removes a part from its bike, keeping the part
#[utoipa::path(
    delete,
    path = "/api/installations/{id}",
    tag = INSTALLATION_TAG,
    params(("id" = String, Path, description = "Installation ID")),
    responses(
        (status = 204, description = "Installation removed"),
        (status = 401, description = "Not signed in", body = String),
        (status = 404, description = "Installation not found", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn uninstall_part(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    InstallationService::new(&state.graphql, &state.cache)
        .uninstall(&ctx, &id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("installation {}", id)))?;

    Ok(StatusCode::NO_CONTENT)
}
