use crate::{Client, ClientError};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_api_error_display_includes_status_and_message() {
    let err = ClientError::api_error(400, "Google account is not linked");
    let text = err.to_string();

    assert!(text.contains("400"));
    assert!(text.contains("Google account is not linked"));
}
