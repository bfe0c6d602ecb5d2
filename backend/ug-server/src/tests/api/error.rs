use crate::{ApiError, GENERIC_ERROR_MESSAGE, handle_panic};

use ug_core::GuardError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_unauthorized_returns_400_with_plain_message() {
    let error = ApiError::from(GuardError::unauthorized("token expired"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_sole_auth_method_returns_400_with_policy_message() {
    let error = ApiError::from(GuardError::sole_auth_method("user-1"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Cannot unlink Google account: no alternate authentication method exists"
    );
}

#[tokio::test]
async fn test_unexpected_returns_generic_text_and_keeps_detail_for_logs() {
    let error = ApiError::unexpected("pool exhausted at db.internal:5432");

    assert!(error.to_string().contains("pool exhausted"));

    let json = body_json(error.into_response()).await;
    assert_eq!(json["error"], GENERIC_ERROR_MESSAGE);
    assert_eq!(json["success"], false);
    assert!(!json.to_string().contains("db.internal"));
}

#[tokio::test]
async fn test_non_string_panic_payload_still_renders_generic_body() {
    let response = handle_panic(Box::new(42_u32));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_panic_payload_is_not_returned_to_client() {
    let response = handle_panic(Box::new("secret internal state".to_string()));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], GENERIC_ERROR_MESSAGE);
    assert!(!json.to_string().contains("secret internal state"));
}
