//! Store provider selected from configuration
//!
//! Uses enum dispatch so a handle built from configuration carries no vtable.
//! Unlike a best-effort cache there is no silent fallback: a configured Redis
//! backend that cannot be reached is an error, because the accessor promises
//! that a successful `set` is visible to the next `get`.

use super::errors::{CacheError, CacheResult};
use super::providers::MemoryStore;
use super::traits::KeyValueStore;
use crate::config::RadCacheConfig;
use std::time::Duration;
use tracing::info;

#[cfg(feature = "cache-redis")]
use super::providers::RedisStore;

/// Store backend chosen at runtime
#[derive(Debug, Clone)]
pub enum StoreProvider {
    /// Redis or Dragonfly (boxed to reduce enum size)
    #[cfg(feature = "cache-redis")]
    Redis(Box<RedisStore>),

    /// In-process store
    Memory(MemoryStore),
}

impl StoreProvider {
    /// Build the backend named by `config.backend`
    pub async fn from_config(config: &RadCacheConfig) -> CacheResult<Self> {
        match config.backend.as_str() {
            // "dragonfly" speaks the Redis protocol
            "redis" | "dragonfly" => Self::create_redis_backend(config).await,
            "memory" | "in-memory" => {
                info!(backend = "memory", "Cache store provider initialized");
                Ok(Self::Memory(MemoryStore::new()))
            }
            other => Err(CacheError::ConfigurationError(format!(
                "Unknown cache backend '{}'",
                other
            ))),
        }
    }

    #[cfg(feature = "cache-redis")]
    async fn create_redis_backend(config: &RadCacheConfig) -> CacheResult<Self> {
        let store = RedisStore::from_config(&config.redis).await?;
        info!(
            backend = %config.backend,
            url = %super::providers::redis::redact_url(&config.redis.url),
            "Cache store provider initialized"
        );
        Ok(Self::Redis(Box::new(store)))
    }

    #[cfg(not(feature = "cache-redis"))]
    async fn create_redis_backend(config: &RadCacheConfig) -> CacheResult<Self> {
        Err(CacheError::ConfigurationError(format!(
            "Cache backend '{}' requested but the 'cache-redis' feature is not enabled",
            config.backend
        )))
    }

    /// In-process provider (for tests and single-process use)
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }
}

impl From<MemoryStore> for StoreProvider {
    fn from(store: MemoryStore) -> Self {
        Self::Memory(store)
    }
}

#[cfg(feature = "cache-redis")]
impl From<RedisStore> for StoreProvider {
    fn from(store: RedisStore) -> Self {
        Self::Redis(Box::new(store))
    }
}

impl KeyValueStore for StoreProvider {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        match self {
            #[cfg(feature = "cache-redis")]
            Self::Redis(s) => s.get(key).await,
            Self::Memory(s) => s.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        match self {
            #[cfg(feature = "cache-redis")]
            Self::Redis(s) => s.set(key, value, ttl).await,
            Self::Memory(s) => s.set(key, value, ttl).await,
        }
    }

    async fn delete(&self, keys: &[String]) -> CacheResult<u64> {
        match self {
            #[cfg(feature = "cache-redis")]
            Self::Redis(s) => s.delete(keys).await,
            Self::Memory(s) => s.delete(keys).await,
        }
    }

    async fn exists(&self, key: &str) -> CacheResult<u64> {
        match self {
            #[cfg(feature = "cache-redis")]
            Self::Redis(s) => s.exists(key).await,
            Self::Memory(s) => s.exists(key).await,
        }
    }

    async fn health_check(&self) -> CacheResult<bool> {
        match self {
            #[cfg(feature = "cache-redis")]
            Self::Redis(s) => s.health_check().await,
            Self::Memory(s) => s.health_check().await,
        }
    }

    fn provider_name(&self) -> &'static str {
        match self {
            #[cfg(feature = "cache-redis")]
            Self::Redis(s) => s.provider_name(),
            Self::Memory(s) => s.provider_name(),
        }
    }
}
