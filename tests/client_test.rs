// ABOUTME: Tests for the API client request construction and error mapping
// ABOUTME: Query-string fidelity, credential gating, and envelope normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use stride_client::auth::CredentialStore;
use stride_client::client::{ActivityUpload, ApiClient};
use stride_client::config::ClientConfig;
use stride_client::errors::{ClientError, ValidationError};
use stride_client::models::Sport;
use stride_client::params::{
    ActivityListParams, BestPerformanceParams, DistanceRange, SortOrder,
};

#[tokio::test]
async fn requests_without_a_valid_token_fail_before_any_io() {
    // Point at a host that would refuse connections; the auth check must
    // trip first, so no transport error can surface
    let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
    let client =
        ApiClient::new(&config, Arc::new(CredentialStore::new())).expect("client builds");

    let result = client.list_activities(&ActivityListParams::default()).await;
    assert!(matches!(result, Err(ClientError::Auth)));

    let api = result.unwrap_err().to_api_error();
    assert_eq!(api.message, "No valid authentication token available");
}

#[test]
fn activity_filters_encode_the_backend_query_string() {
    let params = ActivityListParams {
        sport: Some(Sport::Cycling),
        distance: Some(DistanceRange {
            min: 20.0,
            max: 80.0,
        }),
        fetch_map: true,
        race: false,
        page: Some(3),
        limit: Some(25),
        order: Some(SortOrder::Asc),
        order_by: Some("total_distance".to_owned()),
    };

    let encoded =
        serde_urlencoded::to_string(params.to_query_pairs()).expect("pairs encode");
    assert_eq!(
        encoded,
        "map=true&sport=cycling&page=3&limit=25&min_distance=20&max_distance=80\
         &order=asc&order_by=total_distance"
    );
}

#[test]
fn unconstrained_distance_bounds_are_left_out() {
    let params = ActivityListParams {
        distance: Some(DistanceRange::default()),
        ..ActivityListParams::default()
    };
    assert!(params.to_query_pairs().is_empty());
}

#[test]
fn best_performance_selector_includes_only_set_fields() {
    let params = BestPerformanceParams {
        sport: Sport::Running,
        distance: Some("10000".to_owned()),
        time: None,
    };
    let encoded =
        serde_urlencoded::to_string(params.to_query_pairs()).expect("pairs encode");
    assert_eq!(encoded, "sport=running&distance=10000");
}

#[test]
fn http_envelope_drives_the_normalized_error() {
    let error = ClientError::Http {
        status: 422,
        envelope: Some(json!({
            "detail": "fit file is corrupt",
            "code": "UNPROCESSABLE",
            "details": {"field": "fit_file"}
        })),
    };

    let api = error.to_api_error();
    assert_eq!(api.message, "fit file is corrupt");
    assert_eq!(api.status, Some(422));
    assert_eq!(api.code.as_deref(), Some("UNPROCESSABLE"));
    assert_eq!(api.details, Some(json!({"field": "fit_file"})));
}

#[test]
fn malformed_body_maps_to_the_validation_kind() {
    let error: ClientError =
        ValidationError::MalformedJson("expected value at line 1".to_owned()).into();
    let api = error.to_api_error();
    assert_eq!(api.code.as_deref(), Some("INVALID_RESPONSE"));
}

#[test]
fn upload_payload_reads_from_a_device_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"FIT-DATA").expect("write");

    let bytes = std::fs::read(file.path()).expect("read back");
    let upload = ActivityUpload {
        file_name: "morning.fit".to_owned(),
        bytes: bytes.into(),
        title: "Morning Run".to_owned(),
        race: false,
    };

    assert_eq!(upload.bytes.as_ref(), b"FIT-DATA");
    assert_eq!(upload.file_name, "morning.fit");
}
