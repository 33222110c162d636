//! In-process store provider
//!
//! Backed by a shared `DashMap` with per-entry expiry, so it honours the same
//! TTL convention as Redis: a zero TTL never expires. Expired entries read as
//! absent and are removed lazily on access.
//!
//! **Important**: state lives in this process only. Clones share one map;
//! separate `MemoryStore::new()` calls do not.

use crate::cache::errors::CacheResult;
use crate::cache::traits::KeyValueStore;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// In-memory store with per-entry TTL
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, Entry>>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entry_count", &self.entries.len())
            .finish()
    }
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Live physical keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let now = Instant::now();
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| !entry.value().is_expired(now))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        keys
    }

    /// Raw stored text for a physical key, bypassing any prefixing
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lookup(key, Instant::now())
    }

    fn lookup(&self, key: &str, now: Instant) -> Option<String> {
        let found = self
            .entries
            .get(key)
            .map(|entry| (entry.value.clone(), entry.is_expired(now)));

        match found {
            Some((value, false)) => Some(value),
            Some((_, true)) => {
                self.entries.remove_if(key, |_, entry| entry.is_expired(now));
                None
            }
            None => None,
        }
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let result = self.lookup(key, Instant::now());

        if result.is_some() {
            debug!(key = key, "Cache HIT (memory)");
        } else {
            debug!(key = key, "Cache MISS (memory)");
        }

        Ok(result)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            Instant::now().checked_add(ttl)
        };

        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );

        debug!(key = key, ttl_ms = ttl.as_millis() as u64, "Cache SET (memory)");
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> CacheResult<u64> {
        let now = Instant::now();
        let mut deleted: u64 = 0;

        for key in keys {
            if let Some((_, entry)) = self.entries.remove(key) {
                if !entry.is_expired(now) {
                    deleted += 1;
                }
            }
        }

        debug!(keys = keys.len(), deleted = deleted, "Cache DEL (memory)");
        Ok(deleted)
    }

    async fn exists(&self, key: &str) -> CacheResult<u64> {
        Ok(u64::from(self.lookup(key, Instant::now()).is_some()))
    }

    async fn health_check(&self) -> CacheResult<bool> {
        Ok(true)
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
