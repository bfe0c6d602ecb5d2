use crate::{AppState, cors, handle_panic, health, unlink_google};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Identity unlink endpoint
        .route("/unlink-google", post(unlink_google))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // Panics become the same 400 JSON body as any other failure
        .layer(CatchPanicLayer::custom(handle_panic))
        // CORS outermost so preflights and panic responses carry the headers
        .layer(cors::cors_layer())
}
