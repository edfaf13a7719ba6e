//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs` with the document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with all endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/login` - Redirect to the session provider
/// - `GET /api/auth/callback` - OAuth callback handler
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/auth/user` - Current user
/// - `GET /api/bikes` - Bikes of the current user
/// - `GET /api/bikes/{id}` - One bike of the current user
/// - `GET /api/bikes/{id}/installations` - Installations of a bike
/// - `POST /api/bikes/{id}/installations` - Install an existing part
/// - `GET /api/manufacturers` - Manufacturers for the add part form
/// - `POST /api/installations` - Add part form action
/// - `DELETE /api/installations/{id}` - Uninstall a part
/// - `DELETE /api/parts/{id}` - Delete a part and its installations
///
/// # Example
/// ```ignore
/// let app_state = AppState::new(graphql, auth, cache);
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Bike Parts Tracker", description = "Bike Parts Tracker API"),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
            (name = controller::bike::BIKE_TAG, description = "Bikes of the signed in user"),
            (name = controller::installation::INSTALLATION_TAG, description = "Parts installed on bikes"),
            (name = controller::part::PART_TAG, description = "Parts of the signed in user"),
            (name = controller::manufacturer::MANUFACTURER_TAG, description = "Part manufacturers"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::bike::get_bikes))
        .routes(routes!(controller::bike::get_bike))
        .routes(routes!(
            controller::installation::get_bike_installations,
            controller::installation::install_part
        ))
        .routes(routes!(controller::installation::add_installation))
        .routes(routes!(controller::installation::uninstall_part))
        .routes(routes!(controller::part::delete_part))
        .routes(routes!(controller::manufacturer::get_manufacturers))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
