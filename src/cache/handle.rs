//! Prefixed, typed accessor over a key-value store
//!
//! ```text
//! CacheHandle<S: KeyValueStore>
//!   ├── key prefix        "rad_" + logical key = physical key
//!   ├── store             injected at construction, shared via Clone
//!   └── diagnostic sink   NoOpSink unless one is attached
//! ```
//!
//! Every failing operation routes its error to the sink once and then returns
//! it, except the `*_or_default` / `get_value_or` family which swallow it.

use super::codec::{from_json, to_json, ValueCodec};
use super::errors::{CacheError, CacheResult};
use super::provider::StoreProvider;
use super::sink::{DiagnosticSink, NoOpSink};
use super::traits::KeyValueStore;
use crate::config::RadCacheConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "rad_";

/// Per-handle options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    pub prefix: String,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl CacheOptions {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

/// Typed get/set/delete helpers over prefixed keys
#[derive(Clone)]
pub struct CacheHandle<S = StoreProvider> {
    store: S,
    options: CacheOptions,
    sink: Arc<dyn DiagnosticSink>,
}

impl<S: KeyValueStore> std::fmt::Debug for CacheHandle<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheHandle")
            .field("store", &self.store.provider_name())
            .field("prefix", &self.options.prefix)
            .field("sink", &self.sink)
            .finish()
    }
}

impl CacheHandle<StoreProvider> {
    /// Connect the configured backend and wrap it with the configured prefix
    pub async fn from_config(config: &RadCacheConfig) -> CacheResult<Self> {
        config.validate()?;
        let store = StoreProvider::from_config(config).await?;
        Ok(Self::with_options(store, config.cache_options()))
    }
}

impl<S: KeyValueStore> CacheHandle<S> {
    /// Handle with the default `"rad_"` prefix and a no-op sink
    pub fn new(store: S) -> Self {
        Self::with_options(store, CacheOptions::default())
    }

    /// Handle with caller-supplied options and a no-op sink
    pub fn with_options(store: S, options: CacheOptions) -> Self {
        Self {
            store,
            options,
            sink: Arc::new(NoOpSink),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_diagnostic_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Replace the diagnostic sink with one that is already shared
    pub fn with_shared_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Same prefix and sink over a different store
    pub fn with_store<T: KeyValueStore>(&self, store: T) -> CacheHandle<T> {
        CacheHandle {
            store,
            options: self.options.clone(),
            sink: Arc::clone(&self.sink),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.options.prefix
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn provider_name(&self) -> &'static str {
        self.store.provider_name()
    }

    /// The literal key sent to the store for `key`
    pub fn physical_key(&self, key: &str) -> String {
        let mut physical = String::with_capacity(self.options.prefix.len() + key.len());
        physical.push_str(&self.options.prefix);
        physical.push_str(key);
        physical
    }

    /// Hand an error to the diagnostic sink
    pub fn report_error(&self, error: &CacheError) {
        self.sink.error(error);
    }

    fn route<T>(&self, result: CacheResult<T>) -> CacheResult<T> {
        if let Err(error) = &result {
            self.report_error(error);
        }
        result
    }

    /// Encode any serializable value as JSON text
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> CacheResult<String> {
        to_json(value)
    }

    /// Decode JSON text into a generic value
    pub fn deserialize(&self, text: &str) -> CacheResult<serde_json::Value> {
        from_json(text)
    }

    async fn put_raw(&self, key: &str, text: &str, ttl: Duration) -> CacheResult<()> {
        let physical = self.physical_key(key);
        self.route(self.store.set(&physical, text, ttl).await)
    }

    async fn fetch_raw(&self, key: &str) -> CacheResult<String> {
        let physical = self.physical_key(key);
        let result = match self.store.get(&physical).await {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Err(CacheError::KeyNotFound { key: physical }),
            Err(e) => Err(e),
        };
        self.route(result)
    }

    /// JSON-encode `value` and store it at `prefix + key`
    ///
    /// Serialization failures never reach the store.
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> CacheResult<()> {
        let text = self.route(self.serialize(value))?;
        self.put_raw(key, &text, ttl).await
    }

    /// Fetch `prefix + key` and decode it as a generic JSON value
    pub async fn get(&self, key: &str) -> CacheResult<serde_json::Value> {
        let text = self.fetch_raw(key).await?;
        self.route(self.deserialize(&text))
    }

    /// Fetch `prefix + key` and decode the JSON into `T`
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> CacheResult<T> {
        let text = self.fetch_raw(key).await?;
        self.route(from_json(&text))
    }

    /// Store `value` using its codec
    pub async fn set_value<T: ValueCodec>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> CacheResult<()> {
        let text = self.route(value.encode())?;
        self.put_raw(key, &text, ttl).await
    }

    /// Fetch and decode a value using its codec
    pub async fn get_value<T: ValueCodec>(&self, key: &str) -> CacheResult<T> {
        let text = self.fetch_raw(key).await?;
        self.route(T::decode(&text))
    }

    /// Like [`get_value`](Self::get_value) but returns `fallback` on any error
    pub async fn get_value_or<T: ValueCodec>(&self, key: &str, fallback: T) -> T {
        match self.get_value(key).await {
            Ok(value) => value,
            Err(e) => {
                debug!(key = key, error = %e, "Cache fallback value used");
                fallback
            }
        }
    }

    typed_accessors! {
        "string": set_string, get_string, get_string_or_default => &str as String;
        "32-bit integer": set_int, get_int, get_int_or_default => i32 as i32;
        "64-bit integer": set_int64, get_int64, get_int64_or_default => i64 as i64;
        "boolean": set_bool, get_bool, get_bool_or_default => bool as bool;
        "32-bit float": set_float32, get_float32, get_float32_or_default => f32 as f32;
        "64-bit float": set_float64, get_float64, get_float64_or_default => f64 as f64;
    }

    /// Remove `prefix + key`, returning how many keys were removed
    pub async fn delete(&self, key: &str) -> CacheResult<u64> {
        let physical = [self.physical_key(key)];
        self.route(self.store.delete(&physical).await)
    }

    /// Remove every prefixed key with one batched call
    ///
    /// An empty key list returns `Ok(0)` without contacting the store.
    pub async fn delete_many<I, K>(&self, keys: I) -> CacheResult<u64>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let physical: Vec<String> = keys
            .into_iter()
            .map(|key| self.physical_key(key.as_ref()))
            .collect();

        if physical.is_empty() {
            return Ok(0);
        }

        self.route(self.store.delete(&physical).await)
    }

    /// True iff the store reports exactly one matching physical key
    ///
    /// Store failures are routed to the sink and read as `false`; use
    /// [`try_exists`](Self::try_exists) to tell them apart.
    pub async fn exists(&self, key: &str) -> bool {
        self.try_exists(key).await.unwrap_or(false)
    }

    /// Existence check that surfaces store failures
    pub async fn try_exists(&self, key: &str) -> CacheResult<bool> {
        let physical = self.physical_key(key);
        let count = self.route(self.store.exists(&physical).await)?;
        Ok(count == 1)
    }

    /// Ping the store
    pub async fn health_check(&self) -> CacheResult<bool> {
        self.route(self.store.health_check().await)
    }
}
