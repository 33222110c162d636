//! Diagnostic sinks
//!
//! Every failed cache operation is handed to exactly one sink before the error
//! is returned to the caller. A handle always has a sink; the default discards.

use super::errors::CacheError;

/// Destination for operational cache errors
pub trait DiagnosticSink: Send + Sync + std::fmt::Debug {
    /// Record a failed operation
    fn error(&self, error: &CacheError);
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl DiagnosticSink for NoOpSink {
    fn error(&self, _error: &CacheError) {}
}

/// Sink that emits a `tracing` error event per failure
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    component: Option<String>,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every event with a `component` field
    pub fn with_component(component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
        }
    }
}

impl DiagnosticSink for TracingSink {
    fn error(&self, error: &CacheError) {
        tracing::error!(
            component = self.component.as_deref().unwrap_or("radcache"),
            kind = error.kind(),
            error = %error,
            "Cache operation failed"
        );
    }
}
