//! Server application models.
//!
//! Application state shared by all handlers, the request-scoped authentication context,
//! and the session data structures backing it.

pub mod app;
pub mod context;
pub mod session;
