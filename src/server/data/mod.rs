//! Data access layer repositories.
//!
//! Repositories wrap the GraphQL documents for one backend entity each. Every call takes the
//! caller's [`RequestContext`](crate::server::model::context::RequestContext) and passes all
//! values as GraphQL variables.

pub mod bike;
pub mod graphql;
pub mod installation;
pub mod manufacturer;
pub mod part;
