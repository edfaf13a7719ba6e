//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories: they memoize reads in the page cache,
//! validate submitted input and revalidate cached pages after a mutation succeeds.

pub mod auth;
pub mod bike;
pub mod installation;
pub mod manufacturer;
pub mod part;

use dioxus_logger::tracing;

use crate::server::{
    cache::{PageCache, RevalidateScope},
    model::context::RequestContext,
};

/// Revalidates `path` for the user in `ctx`, a failure is logged and otherwise ignored
fn revalidate_page(cache: &PageCache, ctx: &RequestContext, path: &str, scope: RevalidateScope) {
    match cache.revalidate(&ctx.user_id, path, scope) {
        Ok(removed) => tracing::debug!(path, removed, "Revalidated cached page data"),
        Err(err) => tracing::warn!(
            user_id = %ctx.user_id,
            path,
            "Failed to revalidate cached page data: {}",
            err
        ),
    }
}
