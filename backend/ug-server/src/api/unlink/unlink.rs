use crate::{ApiResult, AppState, UnlinkResponse};

use ug_core::Credential;

use axum::{Json, extract::State, http::HeaderMap};
use http::header::AUTHORIZATION;
use log::debug;

/// POST /unlink-google - remove the caller's Google identity
pub async fn unlink_google(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<UnlinkResponse>> {
    state.metrics.unlink_requested();

    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    let result = match Credential::from_authorization_header(authorization) {
        Ok(credential) => state.guard.unlink_google_identity(&credential).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => {
            state.metrics.unlink_outcome("success");
            debug!("Unlink completed for user {}", outcome.user_id);
            Ok(Json(UnlinkResponse::ok(outcome.message)))
        }
        Err(e) => {
            state.metrics.unlink_outcome(e.kind());
            Err(e.into())
        }
    }
}
