//! Store client trait definition

use super::errors::CacheResult;
use std::time::Duration;

/// The key-value store contract consumed by [`CacheHandle`](super::CacheHandle)
///
/// Implementations receive physical keys only; prefixing happens above this
/// layer. Implementations are expected to be cheap to clone and to share one
/// underlying connection across clones.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the text stored at `key`
    ///
    /// Returns `Ok(Some(value))` on hit, `Ok(None)` when the key is absent or expired.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = CacheResult<Option<String>>> + Send;

    /// Store `value` at `key`
    ///
    /// A zero `ttl` stores the value without expiry.
    fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> impl std::future::Future<Output = CacheResult<()>> + Send;

    /// Remove every key in `keys` with a single call, returning how many existed
    fn delete(&self, keys: &[String]) -> impl std::future::Future<Output = CacheResult<u64>> + Send;

    /// Count how many of the given key exist (0 or 1)
    fn exists(&self, key: &str) -> impl std::future::Future<Output = CacheResult<u64>> + Send;

    /// Check if the store backend is reachable
    fn health_check(&self) -> impl std::future::Future<Output = CacheResult<bool>> + Send;

    /// Get the name of the store provider
    fn provider_name(&self) -> &'static str;
}
