//! REST API error types
//!
//! Every failure is rendered the same way: HTTP 400 with
//! `{ "error": <message>, "success": false }`.

use ug_core::GuardError;

use std::any::Any;
use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-facing text for failures the guard did not classify
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// JSON error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Guard refused or failed the unlink
    #[error("Unlink failed: {0}")]
    Guard(#[from] GuardError),

    /// Anything the guard did not classify (e.g. a handler panic).
    /// `detail` goes to the log only.
    #[error("Unexpected error: {detail} {location}")]
    Unexpected {
        detail: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unexpected(detail: impl Into<String>) -> Self {
        ApiError::Unexpected {
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text sent to the client
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Guard(e) => e.client_message(),
            ApiError::Unexpected { .. } => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let body = ErrorResponse {
            error: self.client_message(),
            success: false,
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Panic hook for `CatchPanicLayer`: report the panic like any other failure.
///
/// The panic payload is logged but never returned to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::unexpected(format!("handler panicked: {detail}")).into_response()
}

pub type Result<T> = std::result::Result<T, ApiError>;
