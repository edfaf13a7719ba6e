//! HTTP controller endpoints for the bike parts tracker API.
//!
//! Controllers extract the [`RequestContext`](crate::server::model::context::RequestContext)
//! of the signed in user, call into services and map results to responses. Every handler is
//! annotated for the OpenAPI document served at `/api/docs`.

pub mod auth;
pub mod bike;
pub mod installation;
pub mod manufacturer;
pub mod part;
pub mod util;
