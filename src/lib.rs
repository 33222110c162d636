#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # radcache
//!
//! Typed, prefixed get/set/delete helpers over a remote key-value cache.
//!
//! ## Overview
//!
//! A [`CacheHandle`] owns a key prefix (default `"rad_"`), a shared store
//! connection and a diagnostic sink. Each operation prepends the prefix to the
//! caller's logical key, encodes the value, makes exactly one store call, and
//! on failure hands the error to the sink before returning it.
//!
//! ## Module Organization
//!
//! - [`cache`] - Accessor, codecs, store providers and diagnostic sinks
//! - [`config`] - Layered configuration (defaults, TOML file, environment)
//! - [`logging`] - Console `tracing` subscriber bootstrap
//!
//! ## Quick Start
//!
//! ```rust
//! use radcache::{CacheHandle, CacheOptions, MemoryStore, TracingSink};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), radcache::CacheError> {
//! let cache = CacheHandle::with_options(MemoryStore::new(), CacheOptions::with_prefix("test_"))
//!     .with_diagnostic_sink(TracingSink::new());
//!
//! cache.set_string("a", "hello", Duration::from_secs(3600)).await?;
//! assert_eq!(cache.get_string("a").await?, "hello");
//! assert_eq!(cache.get_int_or_default("missing", -1).await, -1);
//! # Ok(())
//! # }
//! ```
//!
//! Against Redis, build the handle from configuration:
//!
//! ```rust,no_run
//! use radcache::{CacheHandle, RadCacheConfig};
//!
//! # async fn example() -> Result<(), radcache::CacheError> {
//! let config = RadCacheConfig::load()?;
//! let cache = CacheHandle::from_config(&config).await?;
//! cache.set("profile", &serde_json::json!({"id": 7}), config.default_ttl()).await?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod cache;
pub mod config;
pub mod logging;

pub use cache::{
    CacheError, CacheHandle, CacheOptions, CacheResult, DiagnosticSink, Json, KeyValueStore,
    MemoryStore, NoOpSink, StoreProvider, TracingSink, ValueCodec, DEFAULT_PREFIX,
};
pub use config::{RadCacheConfig, RedisConfig};

#[cfg(feature = "cache-redis")]
pub use cache::RedisStore;
