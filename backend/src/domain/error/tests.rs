//! Tests for domain error construction and serialisation.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_recipe("x"), ErrorCode::InvalidRecipe, "invalid_recipe")]
#[case(Error::invalid_query("x"), ErrorCode::InvalidQuery, "invalid_query")]
#[case(Error::invalid_account("x"), ErrorCode::InvalidAccount, "invalid_account")]
#[case(Error::duplicate_account("x"), ErrorCode::DuplicateAccount, "duplicate_account")]
#[case(Error::unauthorized("x"), ErrorCode::Unauthorized, "unauthorized")]
#[case(Error::forbidden("x"), ErrorCode::Forbidden, "forbidden")]
#[case(Error::not_found("x"), ErrorCode::NotFound, "not_found")]
#[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable, "service_unavailable")]
#[case(Error::internal("x"), ErrorCode::InternalError, "internal_error")]
fn constructors_set_distinct_codes(
    #[case] error: Error,
    #[case] code: ErrorCode,
    #[case] wire: &str,
) {
    assert_eq!(error.code(), code);
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(value["code"], json!(wire));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let err = Error::not_found("missing");
    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(value, json!({ "code": "not_found", "message": "missing" }));
}

#[rstest]
fn trace_id_and_details_are_serialised() {
    let err = Error::invalid_recipe("bad")
        .with_trace_id("abc")
        .with_details(json!({ "field": "name" }));
    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(value["traceId"], json!("abc"));
    assert_eq!(value["details"]["field"], json!("name"));
}

#[tokio::test]
async fn new_captures_scoped_trace_id() {
    let trace_id = TraceId::generate();
    let err = TraceId::scope(trace_id, async { Error::forbidden("nope") }).await;
    assert_eq!(err.trace_id(), Some(trace_id.to_string().as_str()));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::internal("boom").to_string(), "boom");
}
