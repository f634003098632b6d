// ABOUTME: Tests for the query engine
// ABOUTME: Emptiness derivation, cache hits, dedup, refetch, disabled queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use stride_client::errors::{ClientError, ErrorHandler, ValidationError};
use stride_client::query::{
    is_empty_payload, CacheConfig, QueryClient, QueryKey, QueryOptions, QueryState,
};

fn silent_client() -> QueryClient {
    QueryClient::with_config(CacheConfig::default(), ErrorHandler::silent())
}

#[test]
fn emptiness_covers_sequences_and_mappings_only() {
    assert!(is_empty_payload(&json!([])));
    assert!(is_empty_payload(&json!({})));
    assert!(!is_empty_payload(&json!(null)));
    assert!(!is_empty_payload(&json!(0)));
    assert!(!is_empty_payload(&json!([1, 2, 3])));
    assert!(!is_empty_payload(&json!({"k": "v"})));
    assert!(!is_empty_payload(&json!("")));
}

#[tokio::test]
async fn empty_sequence_snapshot_is_empty() {
    let client = silent_client();
    let mut query = client.query(
        QueryKey::new("empty-list"),
        || async { Ok::<Vec<u32>, ClientError>(Vec::new()) },
        QueryOptions::default(),
    );

    query.settled().await;
    let snapshot = query.snapshot::<Vec<u32>>();
    assert!(snapshot.is_empty);
    assert_eq!(snapshot.data, Some(Vec::new()));
}

#[tokio::test]
async fn null_snapshot_is_not_empty() {
    let client = silent_client();
    let mut query = client.query(
        QueryKey::new("null-data"),
        || async { Ok::<Value, ClientError>(Value::Null) },
        QueryOptions::default(),
    );

    query.settled().await;
    let snapshot = query.snapshot::<Value>();
    assert!(!snapshot.is_empty);
    assert!(!snapshot.is_loading);
    assert!(!snapshot.is_error);
}

#[tokio::test]
async fn scalar_and_nonempty_snapshots_are_not_empty() {
    let client = silent_client();

    let mut zero = client.query(
        QueryKey::new("zero"),
        || async { Ok::<u32, ClientError>(0) },
        QueryOptions::default(),
    );
    zero.settled().await;
    assert!(!zero.snapshot::<u32>().is_empty);

    let mut list = client.query(
        QueryKey::new("list"),
        || async { Ok::<Vec<u32>, ClientError>(vec![1, 2, 3]) },
        QueryOptions::default(),
    );
    list.settled().await;
    assert!(!list.snapshot::<Vec<u32>>().is_empty);
}

#[tokio::test]
async fn second_query_for_a_key_hits_the_cache() {
    let client = silent_client();
    let calls = Arc::new(AtomicUsize::new(0));

    for _ in 0..2 {
        let calls = calls.clone();
        let mut query = client.query(
            QueryKey::new("cached").push("page").push(1),
            move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<u32, ClientError>(7)
                }
            },
            QueryOptions::default(),
        );
        let state = query.settled().await;
        assert_eq!(state.data(), Some(&json!(7)));
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn concurrent_queries_for_a_key_run_the_fetch_once() {
    let client = silent_client();
    let calls = Arc::new(AtomicUsize::new(0));

    let spawn_query = |client: &QueryClient, calls: Arc<AtomicUsize>| {
        client.query(
            QueryKey::new("dedup"),
            move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok::<u32, ClientError>(42)
                }
            },
            QueryOptions::default(),
        )
    };

    let mut first = spawn_query(&client, calls.clone());
    let mut second = spawn_query(&client, calls.clone());

    let first_state = first.settled().await;
    let second_state = second.settled().await;

    assert_eq!(first_state.data(), Some(&json!(42)));
    assert_eq!(second_state.data(), Some(&json!(42)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn refetch_invalidates_and_replaces_the_snapshot() {
    let client = silent_client();
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let mut query = client.query(
        QueryKey::new("refetch"),
        move || {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                Ok::<usize, ClientError>(n)
            }
        },
        QueryOptions::default(),
    );

    let first = query.settled().await;
    assert_eq!(first.data(), Some(&json!(0)));

    query.refetch();
    let second = query.settled().await;
    assert_eq!(second.data(), Some(&json!(1)));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn disabled_query_stays_idle_with_no_flags_set() {
    let client = silent_client();
    let mut query = client.query(
        QueryKey::new("disabled"),
        || async { Ok::<u32, ClientError>(1) },
        QueryOptions {
            enabled: false,
            ttl: None,
        },
    );

    assert_eq!(query.settled().await, QueryState::Idle);
    let snapshot = query.snapshot::<u32>();
    assert!(snapshot.data.is_none());
    assert!(snapshot.error.is_none());
    assert!(!snapshot.is_loading);
    assert!(!snapshot.is_error);
    assert!(!snapshot.is_empty);
}

#[tokio::test]
async fn failed_fetch_exposes_the_normalized_error() {
    let client = silent_client();
    let mut query = client.query(
        QueryKey::new("failing"),
        || async {
            Err::<u32, ClientError>(ClientError::Http {
                status: 404,
                envelope: Some(json!({"detail": "not found", "code": "NOT_FOUND"})),
            })
        },
        QueryOptions::default(),
    );

    query.settled().await;
    let snapshot = query.snapshot::<u32>();
    assert!(snapshot.is_error);
    let error = snapshot.error.expect("error is exposed");
    assert_eq!(error.message, "not found");
    assert_eq!(error.status, Some(404));
    assert_eq!(error.code.as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn validation_failure_is_not_cached_as_data() {
    let client = silent_client();
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let mut query = client.query(
        QueryKey::new("invalid"),
        move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<u32, ClientError>(
                    ValidationError::MalformedJson("trailing garbage".to_owned()).into(),
                )
            }
        },
        QueryOptions::default(),
    );

    query.settled().await;
    assert!(query.snapshot::<u32>().is_error);

    // A failure leaves no snapshot behind, so a refetch runs the
    // operation again instead of serving stale data
    query.refetch();
    query.settled().await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn error_callback_fires_on_fetch_failure() {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = hits.clone();
    let handler = ErrorHandler::silent().on_error(Arc::new(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    }));
    let client = QueryClient::with_config(CacheConfig::default(), handler);

    let mut query = client.query(
        QueryKey::new("callback"),
        || async {
            Err::<u32, ClientError>(ClientError::Http {
                status: 500,
                envelope: None,
            })
        },
        QueryOptions::default(),
    );

    query.settled().await;
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
