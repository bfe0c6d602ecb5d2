//! Process-wide CORS policy. Built once when the router is assembled.

use axum::http::{HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

/// Request headers browsers may send to the unlink endpoint
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// Methods the unlink endpoint answers
pub const ALLOWED_METHODS: [Method; 2] = [Method::POST, Method::OPTIONS];

/// Permissive CORS: any origin, fixed header and method lists.
///
/// `OPTIONS` requests are answered by the layer itself with 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static))
}
