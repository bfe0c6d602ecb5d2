pub mod api;
pub mod app_state;
pub mod cors;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, ErrorResponse, GENERIC_ERROR_MESSAGE, Result as ApiResult, handle_panic},
    unlink::{unlink::unlink_google, unlink_response::UnlinkResponse},
};
pub use app_state::AppState;
pub use metrics::Metrics;

pub use crate::routes::build_router;
