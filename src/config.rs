//! # Configuration
//!
//! Layered loading with the `config` crate:
//!
//! 1. struct defaults (`#[serde(default)]`)
//! 2. an optional TOML file
//! 3. `RADCACHE_*` environment variables, `__` separating nested keys
//!
//! ```toml
//! prefix = "sessions_"
//! backend = "redis"
//! default_ttl_seconds = 900
//!
//! [redis]
//! url = "redis://localhost:6379"
//! database = 2
//! ```
//!
//! The same settings from the environment:
//! `RADCACHE_PREFIX=sessions_ RADCACHE_BACKEND=redis RADCACHE_REDIS__URL=redis://...`

use crate::cache::{CacheError, CacheOptions, CacheResult, DEFAULT_PREFIX};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Backends accepted by `RadCacheConfig::backend`
pub const KNOWN_BACKENDS: &[&str] = &["redis", "dragonfly", "memory", "in-memory"];

/// Top-level cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RadCacheConfig {
    /// Prepended to every logical key
    pub prefix: String,
    /// Store backend: "redis", "dragonfly", "memory" or "in-memory"
    pub backend: String,
    /// TTL callers should use when they have no better value
    pub default_ttl_seconds: u64,
    pub redis: RedisConfig,
}

impl Default for RadCacheConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            backend: "memory".to_string(),
            default_ttl_seconds: 3600,
            redis: RedisConfig::default(),
        }
    }
}

/// Redis connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RedisConfig {
    pub url: String,
    /// Overrides any database number carried in the URL
    pub database: Option<i64>,
    pub connection_timeout_seconds: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            database: None,
            connection_timeout_seconds: 5,
        }
    }
}

impl RadCacheConfig {
    pub const ENV_PREFIX: &'static str = "RADCACHE";

    /// Load from the process environment only
    pub fn load() -> CacheResult<Self> {
        Self::load_from_parts(None, None)
    }

    /// Load from a TOML file, with environment overrides applied on top
    pub fn load_from_file(path: &Path) -> CacheResult<Self> {
        Self::load_from_parts(Some(path), None)
    }

    /// Load from an optional file and an explicit environment map
    ///
    /// `env` replaces the process environment when given, which keeps tests
    /// independent of each other.
    pub fn load_from_parts(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> CacheResult<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(Self::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            prefix = %config.prefix,
            backend = %config.backend,
            default_ttl_seconds = config.default_ttl_seconds,
            "Cache configuration loaded"
        );

        Ok(config)
    }

    /// Reject settings no store could honour
    pub fn validate(&self) -> CacheResult<()> {
        if !KNOWN_BACKENDS.contains(&self.backend.as_str()) {
            return Err(CacheError::ConfigurationError(format!(
                "Unknown cache backend '{}', expected one of {:?}",
                self.backend, KNOWN_BACKENDS
            )));
        }

        if self.prefix.chars().any(char::is_whitespace) {
            return Err(CacheError::ConfigurationError(format!(
                "Key prefix {:?} must not contain whitespace",
                self.prefix
            )));
        }

        if self.uses_redis() && self.redis.url.trim().is_empty() {
            return Err(CacheError::ConfigurationError(format!(
                "Backend '{}' requires redis.url",
                self.backend
            )));
        }

        Ok(())
    }

    pub fn uses_redis(&self) -> bool {
        matches!(self.backend.as_str(), "redis" | "dragonfly")
    }

    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions::with_prefix(self.prefix.clone())
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_seconds)
    }
}
