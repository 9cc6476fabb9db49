//! # Structured Logging Module
//!
//! Console logging for registry diagnostics, human-readable or JSON.

use crate::config::RegistryConfig;
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging from registry configuration
///
/// Safe to call more than once. `RUST_LOG` takes precedence over
/// `config.log_level`.
pub fn init_structured_logging(config: &RegistryConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = build_filter(&config.log_level);

        let layer = if config.log_json {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed()
        };

        // Embedding applications may already own the global subscriber
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing");
        }

        tracing::info!(
            log_level = %config.log_level,
            json = config.log_json,
            "Structured logging initialized"
        );
    });
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Log structured data for registry operations
pub fn log_registry_operation(
    operation: &str,
    scheme_name: &str,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        scheme_name = %scheme_name,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "REGISTRY_OPERATION"
    );
}
