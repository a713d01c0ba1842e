//! HTTP API route definitions.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{questions, root};
use crate::metrics;

/// Cross-origin policy: any origin, method and header, with credentials.
///
/// Browsers refuse `*` alongside credentials, so origin, method and headers
/// are mirrored from the request instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/questions", get(questions))
        .layer(middleware::from_fn(track_requests))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Create a minimal health-only router (for embedding).
pub fn health_router() -> Router {
    Router::new()
        .route("/", get(root))
        .layer(cors_layer())
}

/// Record request count and latency, labelled by route template.
async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(req).await;
    metrics::record_http_request(start, method.as_str(), &path, response.status().as_u16());
    response
}
