// ABOUTME: Tests for the error normalization step
// ABOUTME: Covers the dispatch priority and totality over arbitrary inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use stride_client::errors::{
    ApiError, ErrorHandler, FALLBACK_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};

#[test]
fn every_input_yields_a_non_empty_message() {
    let inputs: Vec<Value> = vec![
        json!(null),
        json!(""),
        json!("boom"),
        json!(42),
        json!(4.5),
        json!(true),
        json!(false),
        json!([]),
        json!([1, 2, 3]),
        json!({}),
        json!({"message": "m"}),
        json!({"detail": "d"}),
        json!({"message": 7}),
        json!({"status": "not a number", "code": 99}),
        json!({"status": 503, "code": "X", "details": {"k": "v"}}),
    ];

    for input in inputs {
        let error = ApiError::normalize(&input);
        assert!(!error.message.is_empty(), "empty message for {input}");
    }
}

#[test]
fn object_with_status_and_code_but_no_message_uses_fallback() {
    let error = ApiError::normalize(&json!({"status": 400, "code": "X"}));
    assert_eq!(error.message, FALLBACK_ERROR_MESSAGE);
    assert_eq!(error.status, Some(400));
    assert_eq!(error.code.as_deref(), Some("X"));
    assert_eq!(error.details, None);
}

#[test]
fn plain_string_becomes_the_message() {
    let error = ApiError::normalize(&json!("boom"));
    assert_eq!(
        error,
        ApiError {
            message: "boom".to_owned(),
            status: None,
            code: None,
            details: None,
        }
    );
}

#[test]
fn rust_error_keeps_message_and_diagnostics() {
    let source = std::io::Error::new(std::io::ErrorKind::Other, "e");
    let error = ApiError::from_std_error(&source);

    assert_eq!(error.message, "e");
    let details = error.details.expect("details retained for diagnostics");
    assert!(details.get("name").is_some());
    assert!(details.get("chain").is_some());
    assert!(details.get("original").is_some());
}

#[test]
fn detail_string_is_used_when_message_is_absent() {
    let error = ApiError::normalize(&json!({"detail": "activity not found"}));
    assert_eq!(error.message, "activity not found");
}

#[test]
fn wrongly_typed_message_falls_through_to_detail() {
    let error = ApiError::normalize(&json!({"message": 7, "detail": "d"}));
    assert_eq!(error.message, "d");
}

#[test]
fn details_are_copied_verbatim_regardless_of_type() {
    let error = ApiError::normalize(&json!({"message": "m", "details": [1, "two", null]}));
    assert_eq!(error.details, Some(json!([1, "two", null])));
}

#[test]
fn scalars_and_null_are_unknown_errors() {
    for input in [json!(null), json!(0), json!(false), json!("")] {
        assert_eq!(
            ApiError::normalize(&input).message,
            UNKNOWN_ERROR_MESSAGE,
            "input: {input}"
        );
    }
}

#[test]
fn handler_transform_matches_pure_normalization() {
    let handler = ErrorHandler::silent();
    let input = json!({"message": "m", "status": 418});
    assert_eq!(handler.transform(&input), ApiError::normalize(&input));
}

#[test]
fn handler_notifies_callback_with_the_normalized_error() {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = hits.clone();
    let handler = ErrorHandler::silent().on_error(Arc::new(move |error| {
        assert_eq!(error.message, "m");
        seen.fetch_add(1, Ordering::SeqCst);
    }));

    let _ = handler.handle(ApiError::new("m"));
    let _ = handler.handle(ApiError::new("m"));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
