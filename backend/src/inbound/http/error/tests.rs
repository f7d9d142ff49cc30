//! Regression coverage for domain error to HTTP response mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::Value;

use crate::domain::Error;

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn codes_map_to_statuses(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[rstest]
#[actix_web::test]
async fn error_body_carries_cause_under_error_key() {
    let response = Error::not_found("note not found").error_response();
    let body = to_bytes(response.into_body()).await.expect("body bytes");
    let value: Value = serde_json::from_slice(&body).expect("error payload");
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("note not found")
    );
    assert_eq!(value.get("code").and_then(Value::as_str), Some("not_found"));
}

#[rstest]
#[actix_web::test]
async fn internal_messages_are_redacted() {
    let response = Error::internal("secret adapter detail").error_response();
    let body = to_bytes(response.into_body()).await.expect("body bytes");
    let value: Value = serde_json::from_slice(&body).expect("error payload");
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("Internal server error")
    );
}

#[rstest]
#[actix_web::test]
async fn responses_are_json_typed() {
    let response = Error::invalid_request("bad").error_response();
    let content_type = response
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("application/json"));
}
