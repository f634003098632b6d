// ABOUTME: Query engine binding cache keys to fetch operations
// ABOUTME: Snapshot cache, in-flight dedup, state handles, derived result flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Query Engine
//!
//! A [`QueryClient`] binds a [`QueryKey`] and an async fetch operation to
//! a [`Query`] handle. The engine caches successful snapshots (TTL
//! staleness, LRU bound), deduplicates concurrent fetches per key, and
//! exposes per-read [`ApiQueryResult`] views with derived
//! loading/error/empty flags. Failures arrive already normalized into
//! [`ApiError`]; retry policy is deliberately absent — a failed snapshot
//! stays failed until the caller refetches.
//!
//! Dropping a [`Query`] handle abandons interest in the outcome; the
//! fetch task it spawned is not aborted and may still populate the cache.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures_util::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{broadcast, watch};

use crate::errors::{ApiError, ClientError, ErrorHandler, UNKNOWN_ERROR_MESSAGE};

/// Rendering gate selecting among loading/error/content views
pub mod boundary;
/// Snapshot cache with TTL staleness and LRU bound
pub mod cache;

pub use boundary::{BoundaryView, QueryBoundary};
pub use cache::{CacheConfig, CacheStore, MemoryStore};

/// Ordered key uniquely identifying a cached fetch operation and its
/// parameters.
///
/// Segments render colon-joined, e.g. `activities:page:2:sport:running`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    segments: Vec<String>,
}

impl QueryKey {
    /// Key with a single root segment
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            segments: vec![root.into()],
        }
    }

    /// Append a segment; any displayable value works
    #[must_use]
    pub fn push(mut self, segment: impl fmt::Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(":"))
    }
}

impl From<&str> for QueryKey {
    fn from(root: &str) -> Self {
        Self::new(root)
    }
}

/// Lifecycle state of one query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    /// Query is disabled; no fetch was started and no data exists
    Idle,
    /// A fetch is outstanding
    Pending,
    /// Last fetch succeeded; holds the raw snapshot
    Ready(Value),
    /// Last fetch failed; holds the normalized error
    Failed(ApiError),
}

impl QueryState {
    /// True while a fetch is outstanding
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Raw snapshot, when ready
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Normalized error, when failed
    #[must_use]
    pub const fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Per-read view over a query, with flags derived from the state
#[derive(Debug, Clone)]
pub struct ApiQueryResult<T> {
    /// Decoded data, when the last fetch succeeded
    pub data: Option<T>,
    /// Normalized error, when the last fetch failed
    pub error: Option<ApiError>,
    /// True while a fetch is outstanding
    pub is_loading: bool,
    /// True when the last fetch failed
    pub is_error: bool,
    /// True only when data is present and is an empty sequence or an
    /// empty mapping; see [`is_empty_payload`]
    pub is_empty: bool,
}

/// Emptiness of a raw snapshot: an empty array or an empty object.
///
/// JSON `null` is NOT empty — absence of data is a loading concern, not
/// an emptiness one — and neither are scalars or non-empty containers.
#[must_use]
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Per-query configuration accepted alongside the key and fetch operation
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// When false, no fetch starts and the query stays [`QueryState::Idle`]
    pub enabled: bool,
    /// Freshness window override; the cache default applies when unset
    pub ttl: Option<Duration>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: None,
        }
    }
}

type FetchOutcome = Result<Value, ApiError>;
type Fetcher = Arc<dyn Fn() -> BoxFuture<'static, FetchOutcome> + Send + Sync>;

struct QueryClientInner {
    store: Arc<dyn CacheStore>,
    inflight: DashMap<String, broadcast::Sender<FetchOutcome>>,
    config: CacheConfig,
    handler: ErrorHandler,
}

/// Shared engine all queries of an application run through.
///
/// Cloning is cheap; clones share the snapshot cache and the in-flight
/// table, so two queries for the same key anywhere in the application
/// deduplicate into one request.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<QueryClientInner>,
}

impl QueryClient {
    /// Engine with the default in-memory store and error handling
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default(), ErrorHandler::default())
    }

    /// Engine with explicit cache configuration and error handling
    #[must_use]
    pub fn with_config(config: CacheConfig, handler: ErrorHandler) -> Self {
        let store = Arc::new(MemoryStore::new(&config));
        Self::with_store(store, config, handler)
    }

    /// Engine over a caller-supplied store backend
    #[must_use]
    pub fn with_store(
        store: Arc<dyn CacheStore>,
        config: CacheConfig,
        handler: ErrorHandler,
    ) -> Self {
        Self {
            inner: Arc::new(QueryClientInner {
                store,
                inflight: DashMap::new(),
                config,
                handler,
            }),
        }
    }

    /// Bind a key and a fetch operation to a [`Query`] handle.
    ///
    /// When enabled, the fetch starts immediately: a fresh cached
    /// snapshot resolves without I/O, a fetch already in flight for the
    /// same key is joined, and otherwise the operation runs and its
    /// outcome is shared with any joiners. When disabled, the handle
    /// stays [`QueryState::Idle`] until [`Query::refetch`] is called.
    pub fn query<T, F, Fut>(&self, key: QueryKey, fetch: F, options: QueryOptions) -> Query
    where
        T: Serialize + Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        let handler = self.inner.handler.clone();
        let fetcher: Fetcher = Arc::new(move || {
            let future = fetch();
            let handler = handler.clone();
            async move {
                match future.await {
                    Ok(data) => serde_json::to_value(&data)
                        .map_err(|e| handler.handle(ApiError::new(e.to_string()))),
                    Err(error) => Err(handler.handle(error.to_api_error())),
                }
            }
            .boxed()
        });

        let ttl = options.ttl.unwrap_or(self.inner.config.stale_after);
        let initial = if options.enabled {
            QueryState::Pending
        } else {
            QueryState::Idle
        };
        let (state_tx, state_rx) = watch::channel(initial);
        let state_tx = Arc::new(state_tx);

        let query = Query {
            key: key.clone(),
            inner: self.inner.clone(),
            fetcher,
            ttl,
            state_tx: state_tx.clone(),
            state_rx,
        };

        if options.enabled {
            let inner = self.inner.clone();
            let fetcher = query.fetcher.clone();
            tokio::spawn(async move {
                run_fetch(&inner, &key, &fetcher, ttl, &state_tx, false).await;
            });
        }

        query
    }

    /// Drop the cached snapshot for one key
    pub async fn invalidate(&self, key: &QueryKey) {
        self.inner.store.invalidate(key).await;
    }

    /// Drop every cached snapshot
    pub async fn clear(&self) {
        self.inner.store.clear().await;
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Handle to one bound query.
///
/// The handle observes state through a watch channel: [`Query::state`]
/// reads the current state, [`Query::settled`] waits until the fetch
/// resolves, and [`Query::snapshot`] derives the flag view consumed by
/// the rendering boundary.
pub struct Query {
    key: QueryKey,
    inner: Arc<QueryClientInner>,
    fetcher: Fetcher,
    ttl: Duration,
    state_tx: Arc<watch::Sender<QueryState>>,
    state_rx: watch::Receiver<QueryState>,
}

impl Query {
    /// The key this query is bound to
    #[must_use]
    pub const fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Current state of the query
    #[must_use]
    pub fn state(&self) -> QueryState {
        self.state_rx.borrow().clone()
    }

    /// Wait until the query is no longer pending and return that state.
    ///
    /// A disabled query resolves immediately as [`QueryState::Idle`].
    pub async fn settled(&mut self) -> QueryState {
        loop {
            let current = self.state_rx.borrow_and_update().clone();
            if !current.is_pending() {
                return current;
            }
            if self.state_rx.changed().await.is_err() {
                return self.state_rx.borrow().clone();
            }
        }
    }

    /// Invalidate the cached snapshot and run the fetch again.
    ///
    /// The state flips to pending immediately; the replacement snapshot
    /// lands atomically when the fetch resolves.
    pub fn refetch(&self) {
        let _ = self.state_tx.send(QueryState::Pending);

        let inner = self.inner.clone();
        let key = self.key.clone();
        let fetcher = self.fetcher.clone();
        let ttl = self.ttl;
        let state_tx = self.state_tx.clone();
        tokio::spawn(async move {
            inner.store.invalidate(&key).await;
            run_fetch(&inner, &key, &fetcher, ttl, &state_tx, true).await;
        });
    }

    /// Derive the typed flag view of the current state.
    ///
    /// `is_empty` is true only for an empty sequence or empty mapping;
    /// see [`is_empty_payload`] for the exact rules.
    #[must_use]
    pub fn snapshot<T: DeserializeOwned>(&self) -> ApiQueryResult<T> {
        match self.state() {
            QueryState::Idle => ApiQueryResult {
                data: None,
                error: None,
                is_loading: false,
                is_error: false,
                is_empty: false,
            },
            QueryState::Pending => ApiQueryResult {
                data: None,
                error: None,
                is_loading: true,
                is_error: false,
                is_empty: false,
            },
            QueryState::Failed(error) => ApiQueryResult {
                data: None,
                error: Some(error),
                is_loading: false,
                is_error: true,
                is_empty: false,
            },
            QueryState::Ready(value) => {
                let is_empty = is_empty_payload(&value);
                match serde_json::from_value::<T>(value) {
                    Ok(data) => ApiQueryResult {
                        data: Some(data),
                        error: None,
                        is_loading: false,
                        is_error: false,
                        is_empty,
                    },
                    Err(e) => ApiQueryResult {
                        data: None,
                        error: Some(
                            ApiError::new(format!(
                                "cached snapshot does not decode: {e}"
                            ))
                            .with_code("INVALID_RESPONSE"),
                        ),
                        is_loading: false,
                        is_error: true,
                        is_empty: false,
                    },
                }
            }
        }
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("key", &self.key)
            .field("state", &*self.state_rx.borrow())
            .finish_non_exhaustive()
    }
}

/// Resolve one fetch: serve from cache, join an in-flight fetch for the
/// same key, or run the operation and share its outcome.
async fn run_fetch(
    inner: &Arc<QueryClientInner>,
    key: &QueryKey,
    fetcher: &Fetcher,
    ttl: Duration,
    state_tx: &watch::Sender<QueryState>,
    skip_cache: bool,
) {
    if !skip_cache {
        if let Some(value) = inner.store.get(key).await {
            let _ = state_tx.send(QueryState::Ready(value));
            return;
        }
    }

    let key_str = key.to_string();
    let joined = match inner.inflight.entry(key_str.clone()) {
        Entry::Occupied(existing) => Some(existing.get().subscribe()),
        Entry::Vacant(slot) => {
            let (outcome_tx, _) = broadcast::channel(1);
            slot.insert(outcome_tx);
            None
        }
    };

    if let Some(mut outcome_rx) = joined {
        let state = match outcome_rx.recv().await {
            Ok(Ok(value)) => QueryState::Ready(value),
            Ok(Err(error)) => QueryState::Failed(error),
            // Leader vanished without reporting; surface the generic
            // unknown failure rather than hanging
            Err(_) => QueryState::Failed(ApiError::new(UNKNOWN_ERROR_MESSAGE)),
        };
        let _ = state_tx.send(state);
        return;
    }

    let outcome = fetcher().await;
    if let Ok(value) = &outcome {
        inner.store.set(key, value.clone(), ttl).await;
    }

    // Remove before broadcasting so a fetch starting now becomes a fresh
    // leader instead of joining a finished one
    if let Some((_, outcome_tx)) = inner.inflight.remove(&key_str) {
        let _ = outcome_tx.send(outcome.clone());
    }

    let state = match outcome {
        Ok(value) => QueryState::Ready(value),
        Err(error) => QueryState::Failed(error),
    };
    let _ = state_tx.send(state);
}
