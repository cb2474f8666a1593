//! Shared layers for the API router.
use tower_http::cors::CorsLayer;

/// Browser demo clients call from arbitrary origins.
pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
