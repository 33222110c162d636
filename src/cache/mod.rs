//! # Cache Accessor Module
//!
//! Typed, prefixed access to a remote key-value cache.
//!
//! ## Architecture
//!
//! ```text
//! CacheHandle<S>                    <- prefixing, codecs, error routing
//!   ├── S: KeyValueStore            <- consumed store contract
//!   │     ├── StoreProvider (enum)  <- config-selected, no vtable
//!   │     ├── RedisStore            <- ConnectionManager-based async Redis
//!   │     └── MemoryStore           <- in-process, per-entry TTL
//!   └── Arc<dyn DiagnosticSink>     <- NoOpSink | TracingSink | custom
//! ```
//!
//! ## Design Decisions
//!
//! - **Injected store**: the store is a constructor argument, never attached later
//! - **Always-present sink**: errors are routed then returned; a missing sink is a no-op
//! - **One codec per type**: primitives as canonical text, structured values as JSON
//! - **Generic accessors**: named `get_int` / `set_bool` helpers are thin wrappers
//!   over `get_value` / `set_value`

pub mod codec;
pub mod errors;
pub mod handle;
pub mod provider;
pub mod providers;
pub mod sink;
pub mod traits;

pub use codec::{Json, ValueCodec};
pub use errors::{CacheError, CacheResult};
pub use handle::{CacheHandle, CacheOptions, DEFAULT_PREFIX};
pub use provider::StoreProvider;
pub use providers::MemoryStore;
pub use sink::{DiagnosticSink, NoOpSink, TracingSink};
pub use traits::KeyValueStore;

#[cfg(feature = "cache-redis")]
pub use providers::RedisStore;
