//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod strategies;

use radcache::{CacheError, CacheHandle, CacheOptions, DiagnosticSink, MemoryStore};
use std::sync::{Arc, Mutex};

/// Sink that keeps every routed error for later assertions
#[derive(Debug, Default)]
pub struct RecordingSink {
    errors: Mutex<Vec<CacheError>>,
}

impl RecordingSink {
    pub fn errors(&self) -> Vec<CacheError> {
        self.errors.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }
}

impl DiagnosticSink for RecordingSink {
    fn error(&self, error: &CacheError) {
        self.errors.lock().unwrap().push(error.clone());
    }
}

/// Handle over a fresh memory store, returning the store and sink for inspection
pub fn recording_handle(prefix: &str) -> (CacheHandle<MemoryStore>, MemoryStore, Arc<RecordingSink>) {
    let store = MemoryStore::new();
    let sink = Arc::new(RecordingSink::default());
    let handle = CacheHandle::with_options(store.clone(), CacheOptions::with_prefix(prefix))
        .with_shared_sink(sink.clone());
    (handle, store, sink)
}
