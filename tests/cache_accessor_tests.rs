//! Cache Accessor Integration Tests
//!
//! End-to-end behaviour of `CacheHandle` over the in-memory store.

mod common;

use common::recording_handle;
use radcache::{
    CacheError, CacheHandle, CacheOptions, KeyValueStore, MemoryStore, RadCacheConfig,
    StoreProvider,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

const HOUR: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Cart {
    owner: String,
    items: Vec<(String, u32)>,
    total_cents: i64,
}

#[tokio::test]
async fn string_scenario_with_custom_prefix() {
    let (cache, store, sink) = recording_handle("test_");

    cache.set_string("a", "hello", HOUR).await.unwrap();

    assert_eq!(cache.get_string("a").await.unwrap(), "hello");
    assert_eq!(store.keys(), vec!["test_a".to_string()]);
    assert_eq!(sink.count(), 0);
}

#[tokio::test]
async fn int_or_default_scenario() {
    let (cache, _store, _sink) = recording_handle("rad_");

    cache.set_int("n", 42, HOUR).await.unwrap();

    assert_eq!(cache.get_int_or_default("n", -1).await, 42);
    assert_eq!(cache.get_int_or_default("missing", -1).await, -1);
}

#[tokio::test]
async fn missing_key_without_sink_keeps_process_alive() {
    let cache = CacheHandle::new(MemoryStore::new());

    let err = cache.get("absent-key").await.unwrap_err();

    assert!(err.is_store_error());
    assert_eq!(
        err,
        CacheError::KeyNotFound {
            key: "rad_absent-key".to_string()
        }
    );
}

#[tokio::test]
async fn structured_values_round_trip() {
    let (cache, _store, _sink) = recording_handle("shop_");
    let cart = Cart {
        owner: "ada".to_string(),
        items: vec![("apple".to_string(), 3), ("pear".to_string(), 1)],
        total_cents: 1250,
    };

    cache.set("cart:ada", &cart, HOUR).await.unwrap();

    let typed: Cart = cache.get_as("cart:ada").await.unwrap();
    assert_eq!(typed, cart);

    let generic = cache.get("cart:ada").await.unwrap();
    assert_eq!(generic["owner"], json!("ada"));
    assert_eq!(generic["items"][0], json!(["apple", 3]));
}

#[tokio::test]
async fn json_codec_through_generic_accessors() {
    let (cache, store, _sink) = recording_handle("rad_");

    cache
        .set_value("tags", &radcache::Json(vec!["a".to_string()]), HOUR)
        .await
        .unwrap();

    assert_eq!(store.raw("rad_tags"), Some(r#"["a"]"#.to_string()));
    let radcache::Json(tags) = cache.get_value::<radcache::Json<Vec<String>>>("tags").await.unwrap();
    assert_eq!(tags, vec!["a".to_string()]);
}

#[tokio::test]
async fn expired_entries_fail_with_store_error() {
    let (cache, _store, sink) = recording_handle("rad_");

    cache
        .set_float64("rate", 1.25, Duration::from_millis(10))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(40)).await;

    let err = cache.get_float64("rate").await.unwrap_err();
    assert!(matches!(err, CacheError::KeyNotFound { .. }));
    assert_eq!(sink.errors(), vec![err]);
}

#[tokio::test]
async fn delete_many_then_exists_is_false() {
    let (cache, store, _sink) = recording_handle("rad_");
    let keys = ["one", "two", "three"];

    for key in keys {
        cache.set_bool(key, true, HOUR).await.unwrap();
    }
    assert_eq!(cache.delete_many(keys).await.unwrap(), 3);

    for key in keys {
        assert!(!cache.exists(key).await);
    }
    assert!(store.keys().is_empty());
}

#[tokio::test]
async fn handles_with_different_prefixes_share_a_store() {
    let store = MemoryStore::new();
    let first = CacheHandle::with_options(store.clone(), CacheOptions::with_prefix("v1_"));
    let second = CacheHandle::with_options(store.clone(), CacheOptions::with_prefix("v2_"));

    first.set_string("k", "old", HOUR).await.unwrap();
    second.set_string("k", "new", HOUR).await.unwrap();

    // A new prefix never rewrites keys written under the old one
    assert_eq!(first.get_string("k").await.unwrap(), "old");
    assert_eq!(second.get_string("k").await.unwrap(), "new");
    assert_eq!(store.keys(), vec!["v1_k".to_string(), "v2_k".to_string()]);
}

#[tokio::test]
async fn values_written_by_other_clients_decode() {
    let (cache, store, _sink) = recording_handle("rad_");
    store.set("rad_flag", "true", HOUR).await.unwrap();
    store.set("rad_count", "17", HOUR).await.unwrap();

    assert!(cache.get_bool("flag").await.unwrap());
    assert_eq!(cache.get_int64("count").await.unwrap(), 17);
    assert_eq!(cache.get_float32("count").await.unwrap(), 17.0);
}

#[tokio::test]
async fn each_failure_reaches_sink_exactly_once() {
    let (cache, _store, sink) = recording_handle("rad_");

    let _ = cache.get("a").await;
    let _ = cache.get_string_or_default("b", String::new()).await;
    let _ = cache.get_bool("c").await;

    assert_eq!(sink.count(), 3);
    assert!(sink.errors().iter().all(CacheError::is_store_error));
}

#[tokio::test]
async fn from_config_builds_memory_handle() {
    let config = RadCacheConfig {
        prefix: "cfg_".to_string(),
        backend: "memory".to_string(),
        ..RadCacheConfig::default()
    };

    let cache = CacheHandle::from_config(&config).await.unwrap();
    assert_eq!(cache.prefix(), "cfg_");
    assert_eq!(cache.provider_name(), "memory");
    assert!(cache.health_check().await.unwrap());

    cache
        .set_int64("big", i64::MAX, config.default_ttl())
        .await
        .unwrap();
    assert_eq!(cache.get_int64("big").await.unwrap(), i64::MAX);
    assert!(matches!(cache.store(), StoreProvider::Memory(_)));
}

#[tokio::test]
async fn from_config_rejects_invalid_settings() {
    let config = RadCacheConfig {
        backend: "etcd".to_string(),
        ..RadCacheConfig::default()
    };

    let err = CacheHandle::from_config(&config).await.unwrap_err();
    assert!(matches!(err, CacheError::ConfigurationError(_)));
}
