//! Data transfer objects shared between the server API and the client.

pub mod bike;
pub mod installation;
pub mod manufacturer;
pub mod part;
pub mod user;
