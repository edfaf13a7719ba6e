#![allow(non_snake_case)]

mod client;

use bike_parts_tracker::model;
#[cfg(feature = "server")]
use bike_parts_tracker::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let graphql = exit_on_error(startup::build_graphql_client(&config));
        let auth = exit_on_error(startup::build_auth_client(&config));
        let cache = startup::build_page_cache(&config);
        let session = exit_on_error(startup::connect_to_session(&config).await);

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState::new(graphql, auth, cache))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}

#[cfg(feature = "server")]
fn exit_on_error<T>(result: Result<T, server::error::Error>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Startup error: {}", e);
            std::process::exit(1);
        }
    }
}
