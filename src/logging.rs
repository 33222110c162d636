//! # Logging
//!
//! Environment-aware console logging using the tracing ecosystem. The library
//! itself only emits events; applications that have no subscriber of their own
//! can call [`init_console_logging`] once at startup.
//!
//! Level resolution, first match wins:
//!
//! 1. `RUST_LOG`
//! 2. `RADCACHE_LOG_LEVEL`
//! 3. by `RADCACHE_ENV`: `production` → info, `test` → warn, anything else → debug
//!
//! `RADCACHE_LOG_FORMAT=json` switches to JSON lines.

use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install a console subscriber, once per process
///
/// If another global subscriber is already installed it is left in place.
pub fn init_console_logging() {
    TRACING_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = resolve_log_level(
            &environment,
            std::env::var("RUST_LOG").ok(),
            std::env::var("RADCACHE_LOG_LEVEL").ok(),
        );
        let json = std::env::var("RADCACHE_LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let use_ansi = std::io::stdout().is_terminal();

        let console_layer = if json {
            fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_filter(EnvFilter::new(&log_level))
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(use_ansi)
                .with_filter(EnvFilter::new(&log_level))
                .boxed()
        };

        let subscriber = tracing_subscriber::registry().with(console_layer);

        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        } else {
            tracing::info!(
                environment = %environment,
                log_level = %log_level,
                json = json,
                "Console logging initialized"
            );
        }
    });
}

/// Current deployment environment name
fn get_environment() -> String {
    std::env::var("RADCACHE_ENV").unwrap_or_else(|_| "development".to_string())
}

fn resolve_log_level(
    environment: &str,
    rust_log: Option<String>,
    explicit: Option<String>,
) -> String {
    if let Some(level) = rust_log.filter(|l| !l.trim().is_empty()) {
        return level.to_lowercase();
    }

    if let Some(level) = explicit.filter(|l| !l.trim().is_empty()) {
        return level.to_lowercase();
    }

    match environment {
        "production" => "info".to_string(),
        "test" => "warn".to_string(),
        _ => "debug".to_string(),
    }
}
