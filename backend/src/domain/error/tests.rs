//! Tests for the transport error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> TraceId {
    TRACE_ID.parse().expect("fixture trace id")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn no_trace_id_is_captured_outside_a_request() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn captures_trace_id_in_scope(trace_id: TraceId) {
    let error = TraceId::scope(trace_id, async { Error::invalid_request("bad") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::invalid_request("bad")).expect("serialise");
    assert_eq!(value, json!({ "code": "invalid_request", "message": "bad" }));
}

#[rstest]
fn serialises_trace_id_and_details_when_present() {
    let error = Error::invalid_request("bad")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "field": "clienteId" }));
    let value = serde_json::to_value(&error).expect("serialise");

    assert_eq!(value.get("traceId"), Some(&json!(TRACE_ID)));
    assert_eq!(value.pointer("/details/field"), Some(&json!("clienteId")));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::not_found("no route").to_string(), "no route");
}
