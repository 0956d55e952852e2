// Test Assertion Helpers
//
// Common assertions for HTTP responses in integration tests.

use actix_web::http::StatusCode;
use awc::ClientResponse;
use serde_json::Value;

fn assert_status<S>(response: &ClientResponse<S>, expected: StatusCode) {
    let status = response.status();
    assert_eq!(
        status,
        expected,
        "Expected {} {}, got {} {}",
        expected.as_u16(),
        expected.canonical_reason().unwrap_or("Unknown"),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

/// Assert HTTP response is 200 OK
pub fn assert_ok<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::OK);
}

/// Assert HTTP response is 400 Bad Request
pub fn assert_bad_request<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::BAD_REQUEST);
}

/// Assert HTTP response is 500 Internal Server Error
pub fn assert_server_error<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR);
}

/// Assert the relay's failure body: `success: false` and a non-empty `error`
pub fn assert_failure_body(json: &Value) {
    assert_eq!(json["success"], Value::Bool(false), "body: {}", json);
    assert!(
        json["error"].as_str().map(|e| !e.is_empty()).unwrap_or(false),
        "Expected non-empty error message, body: {}",
        json
    );
}

/// Assert the callback acknowledgement body
pub fn assert_acknowledged(json: &Value) {
    assert_eq!(json, &serde_json::json!({"success": true}));
}

/// Assert `reference` has the form `KSH30-<digits>`
pub fn assert_reference_format(reference: &str) {
    let digits = reference
        .strip_prefix("KSH30-")
        .unwrap_or_else(|| panic!("reference {} lacks KSH30- prefix", reference));
    assert!(
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        "reference {} does not end in digits",
        reference
    );
}
