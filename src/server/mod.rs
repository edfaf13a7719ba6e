//! Server application core modules.
//!
//! Everything behind the `server` feature: HTTP routing, session based authentication against
//! the OAuth2 session provider, the GraphQL data access layer and the per-user page cache.

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
