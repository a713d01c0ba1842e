//! HTTP API module: greeting and question endpoints behind a permissive
//! cross-origin policy.

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use openapi::{openapi_json, ApiDoc};
pub use routes::{cors_layer, create_router, health_router};
