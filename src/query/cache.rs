// ABOUTME: Snapshot cache for query results with TTL staleness and LRU bound
// ABOUTME: Pluggable store trait with the in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use serde_json::Value;
use tokio::sync::RwLock;

use super::QueryKey;

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached snapshots
    pub max_entries: usize,
    /// How long a snapshot stays fresh before a fetch re-runs
    pub stale_after: Duration,
}

/// Default snapshot capacity
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 256;

/// Default staleness window in seconds
pub const DEFAULT_STALE_AFTER_SECS: u64 = 300;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            stale_after: Duration::from_secs(DEFAULT_STALE_AFTER_SECS),
        }
    }
}

/// Store trait for pluggable snapshot backends.
///
/// Values are raw JSON snapshots; typed decoding happens at read sites.
/// A `get` never returns an expired entry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Store a snapshot with a freshness window
    async fn set(&self, key: &QueryKey, value: Value, ttl: Duration);

    /// Fresh snapshot for the key, if any
    async fn get(&self, key: &QueryKey) -> Option<Value>;

    /// Drop one key
    async fn invalidate(&self, key: &QueryKey);

    /// Drop everything
    async fn clear(&self);
}

/// Cached snapshot with its expiry
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory store with LRU eviction.
///
/// Expired entries are dropped on read; the LRU capacity bounds memory
/// without a background sweeper.
pub struct MemoryStore {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryStore {
    /// Capacity used when the configured one is zero
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CACHE_MAX_ENTRIES)
    {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Store bounded to the configured capacity
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn set(&self, key: &QueryKey, value: Value, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.store.write().await.push(key.to_string(), entry);
    }

    async fn get(&self, key: &QueryKey) -> Option<Value> {
        let key_str = key.to_string();
        let mut store = self.store.write().await;

        // LruCache::get is mutable (updates access order)
        if let Some(entry) = store.get(&key_str) {
            if !entry.is_expired() {
                return Some(entry.value.clone());
            }
            store.pop(&key_str);
        }
        None
    }

    async fn invalidate(&self, key: &QueryKey) {
        self.store.write().await.pop(&key.to_string());
    }

    async fn clear(&self) {
        self.store.write().await.clear();
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}
