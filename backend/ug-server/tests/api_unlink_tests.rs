//! Integration tests for the unlink endpoint
mod common;

use crate::common::{
    FakeAuth, Failure, VALID_TOKEN, bearer, create_test_app, unlink_request,
};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use googletest::assert_that;
use googletest::prelude::{eq, len};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn send(fake: &Arc<FakeAuth>, authorization: Option<&str>) -> Response<Body> {
    create_test_app(fake)
        .oneshot(unlink_request(authorization))
        .await
        .unwrap()
}

// =========================================================================
// Success
// =========================================================================

#[tokio::test]
async fn given_google_and_email_when_unlinking_then_200_and_google_deleted() {
    // Given
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]));

    // When
    let response = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Google account unlinked successfully");
    assert_eq!(json["success"], true);
    assert_eq!(fake.deletions(), vec!["google-0".to_string()]);
}

#[tokio::test]
async fn given_github_then_google_when_unlinking_then_google_identity_targeted() {
    let fake = Arc::new(FakeAuth::with_providers(&["github", "google"]));

    let response = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(fake.deletions(), vec!["google-1".to_string()]);
}

#[tokio::test]
async fn given_successful_response_then_cors_origin_header_present() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]));

    let request = Request::builder()
        .method("POST")
        .uri("/unlink-google")
        .header(header::ORIGIN, "https://app.example.com")
        .header(header::AUTHORIZATION, bearer(VALID_TOKEN))
        .body(Body::empty())
        .unwrap();
    let response = create_test_app(&fake).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

// =========================================================================
// Authentication failures
// =========================================================================

#[tokio::test]
async fn given_missing_authorization_when_unlinking_then_400_unauthorized_without_lookup() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]));

    let response = send(&fake, None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
    assert_eq!(json["success"], false);
    assert_that!(fake.resolve_calls(), eq(0));
    assert_that!(fake.deletions(), len(eq(0)));
}

#[tokio::test]
async fn given_non_bearer_authorization_when_unlinking_then_400_unauthorized() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]));

    let response = send(&fake, Some("Basic dXNlcjpwYXNz")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Unauthorized");
    assert_that!(fake.resolve_calls(), eq(0));
}

#[tokio::test]
async fn given_unknown_token_when_unlinking_then_400_unauthorized() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]));

    let response = send(&fake, Some(&bearer("forged"))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Unauthorized");
    assert_that!(fake.resolve_calls(), eq(1));
    assert_that!(fake.deletions(), len(eq(0)));
}

#[tokio::test]
async fn given_verifier_failure_when_unlinking_then_400_unauthorized() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]).failing(Failure::Resolve));

    let response = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Unauthorized");
}

// =========================================================================
// Policy refusals
// =========================================================================

#[tokio::test]
async fn given_only_google_when_unlinking_then_400_sole_auth_method() {
    let fake = Arc::new(FakeAuth::with_providers(&["google"]));

    let response = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Cannot unlink Google account: no alternate authentication method exists"
    );
    assert_that!(fake.deletions(), len(eq(0)));
}

#[tokio::test]
async fn given_only_email_when_unlinking_then_400_not_linked() {
    let fake = Arc::new(FakeAuth::with_providers(&["email"]));

    let response = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Google account is not linked"
    );
    assert_that!(fake.deletions(), len(eq(0)));
}

#[tokio::test]
async fn given_no_identities_when_unlinking_then_400_not_linked() {
    let fake = Arc::new(FakeAuth::with_providers(&[]));

    let response = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    assert_eq!(
        body_json(response).await["error"],
        "Google account is not linked"
    );
}

#[tokio::test]
async fn given_google_and_email_when_unlinking_twice_then_second_not_linked() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]));

    let first = send(&fake, Some(&bearer(VALID_TOKEN))).await;
    let second = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(second).await["error"],
        "Google account is not linked"
    );
    assert_that!(fake.deletions(), len(eq(1)));
}

// =========================================================================
// Upstream failures
// =========================================================================

#[tokio::test]
async fn given_list_failure_when_unlinking_then_400_fetch_failed() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]).failing(Failure::List));

    let response = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Failed to fetch user identities"
    );
}

#[tokio::test]
async fn given_delete_failure_when_unlinking_then_400_with_store_message() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]).failing(Failure::Delete));

    let response = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Failed to unlink Google account: Identity is locked"
    );
}

#[tokio::test]
async fn given_handler_panic_when_unlinking_then_400_generic_message() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]).failing(Failure::Panic));

    let response = send(&fake, Some(&bearer(VALID_TOKEN))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An unexpected error occurred");
    assert_eq!(json["success"], false);
    assert!(!json.to_string().contains("internal detail"));
}

// =========================================================================
// CORS preflight
// =========================================================================

#[tokio::test]
async fn given_preflight_when_options_then_200_with_cors_headers_and_no_lookup() {
    let fake = Arc::new(FakeAuth::with_providers(&["google", "email"]));

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/unlink-google")
        .header(header::ORIGIN, "https://app.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            "authorization, content-type",
        )
        .body(Body::empty())
        .unwrap();
    let response = create_test_app(&fake).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let allowed_headers = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_lowercase();
    for name in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(allowed_headers.contains(name), "missing {name}");
    }

    let allowed_methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    assert!(allowed_methods.contains("POST"));

    assert_that!(fake.resolve_calls(), eq(0));
    assert_that!(fake.deletions(), len(eq(0)));
}
