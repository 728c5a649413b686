//! Regression coverage for the domain error payload.

use rstest::rstest;
use serde_json::{Value, json};

use super::*;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::not_issued("nothing issued"), ErrorCode::NotIssued)]
#[case(Error::dependency_failure("store down"), ErrorCode::DependencyFailure)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[test]
fn display_matches_message() {
    let error = Error::conflict("passwords do not match");
    assert_eq!(error.to_string(), "passwords do not match");
}

#[test]
fn serializes_codes_in_snake_case() {
    let value = serde_json::to_value(Error::not_issued("nothing issued")).expect("serialize");
    assert_eq!(value.get("code").and_then(Value::as_str), Some("not_issued"));
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("nothing issued")
    );
}

#[test]
fn omits_absent_optional_fields() {
    let value = serde_json::to_value(Error::invalid_request("bad")).expect("serialize");
    assert!(value.get("traceId").is_none());
    assert!(value.get("details").is_none());
}

#[test]
fn details_round_trip() {
    let error = Error::invalid_request("bad").with_details(json!({ "field": "userId" }));
    let value = serde_json::to_value(&error).expect("serialize");
    assert_eq!(
        value
            .get("details")
            .and_then(|details| details.get("field"))
            .and_then(Value::as_str),
        Some("userId")
    );
}

#[tokio::test]
async fn captures_scoped_trace_id() {
    let trace_id = crate::domain::TraceId::from_uuid(uuid::Uuid::nil());
    let error =
        crate::domain::TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(trace_id.to_string().as_str()));
}

#[test]
fn with_trace_id_overrides_capture() {
    let error = Error::internal("boom").with_trace_id("abc");
    assert_eq!(error.trace_id(), Some("abc"));
}
