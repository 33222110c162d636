//! Cache error types

use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// Failed to encode a value into its stored text form
    #[error("Cache serialization error: {0}")]
    SerializationError(String),

    /// Stored text could not be decoded into the requested type
    #[error("Cache deserialization error: {0}")]
    DeserializationError(String),

    /// The physical key is absent or its TTL has elapsed
    #[error("Cache key not found: {key}")]
    KeyNotFound { key: String },

    /// The store call itself failed; carries the client's message unchanged
    #[error("Cache store error: {0}")]
    StoreError(String),

    /// Failed to create or connect the store client
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    /// Invalid or unloadable configuration
    #[error("Cache configuration error: {0}")]
    ConfigurationError(String),
}

impl CacheError {
    /// Short, stable identifier for structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SerializationError(_) => "serialization",
            Self::DeserializationError(_) => "deserialization",
            Self::KeyNotFound { .. } => "key_not_found",
            Self::StoreError(_) => "store",
            Self::ConnectionError(_) => "connection",
            Self::ConfigurationError(_) => "configuration",
        }
    }

    /// Whether the failure originated at the store boundary rather than in encoding
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            Self::KeyNotFound { .. } | Self::StoreError(_) | Self::ConnectionError(_)
        )
    }
}

#[cfg(feature = "cache-redis")]
impl From<redis::RedisError> for CacheError {
    fn from(e: redis::RedisError) -> Self {
        CacheError::StoreError(e.to_string())
    }
}

impl From<::config::ConfigError> for CacheError {
    fn from(e: ::config::ConfigError) -> Self {
        CacheError::ConfigurationError(e.to_string())
    }
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;
