use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        controller::util::csrf::validate_csrf,
        error::Error,
        model::{
            app::AppState,
            context::RequestContext,
            session::{auth::SessionAuthCsrf, user::SessionUser},
        },
        service::auth::{callback::callback_service, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route redirecting to the session provider
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to the provider authorization URL
/// - 500 (Internal Server Error): Session could not store the CSRF state
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the session provider login page"),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.auth);

    SessionAuthCsrf::insert(&session, &login.csrf_state).await?;

    Ok(Redirect::temporary(&login.url))
}

/// Callback route the provider redirects to after a successful login
///
/// Exchanges the code for an access token, verifies it and signs the user in.
///
/// # Responses
/// - 307 (Temporary Redirect): Signed in, redirect to the home page
/// - 400 (Bad Request): CSRF state mismatch
/// - 500 (Internal Server Error): Missing CSRF state, token exchange or validation failure
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued at login"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Signed in, redirect to the home page"),
        (status = 400, description = "CSRF state mismatch", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let params = params.0;

    validate_csrf(&session, &params.state).await?;

    let user = callback_service(&state.auth, params.code).await?;

    SessionUser::insert(&session, &user).await?;
    session.cycle_id().await?;

    Ok(Redirect::temporary("/"))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the home page
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored fails, only clear signed in sessions
    if SessionUser::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Returns the signed in user
///
/// # Responses
/// - 200 (Success): User is signed in with an unexpired token
/// - 401 (Unauthorized): Nobody is signed in or the token expired
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed in user", body = UserDto),
        (status = 401, description = "Not signed in", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
)]
pub async fn get_user(ctx: RequestContext) -> Result<impl IntoResponse, Error> {
    Ok((StatusCode::OK, Json(UserDto { id: ctx.user_id })))
}
