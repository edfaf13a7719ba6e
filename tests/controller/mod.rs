//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with the test session and an application state pointing at
//! the mock server. Router tests send requests through the full router instead to cover
//! extractor rejections and route registration.

mod auth;
mod bike;
mod installation;
mod manufacturer;
mod router;

use tracker_test_utils::prelude::*;

use crate::util::TestContextExt;
