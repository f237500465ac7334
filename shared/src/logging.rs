//! Shared logging utilities for consistent tracing across the service

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Service name attached to every event emitted through the macros below
pub const SERVICE_NAME: &str = "recommendations";

/// Default log level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the per-crate filter directive for a base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    format!(
        "webserver={base_level},recommender={base_level},shared={base_level},tower_http={base_level},sqlx=warn"
    )
}

/// Initialize tracing subscriber writing to stdout
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = filter_directive(log_level);
    println!("📊 Log level: {env_filter}");

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for service-tagged info logging
#[macro_export]
macro_rules! service_info {
    ($($arg:tt)*) => {
        tracing::info!(
            service = $crate::logging::SERVICE_NAME,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-tagged warning logging
#[macro_export]
macro_rules! service_warn {
    ($($arg:tt)*) => {
        tracing::warn!(
            service = $crate::logging::SERVICE_NAME,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-tagged error logging
#[macro_export]
macro_rules! service_error {
    ($($arg:tt)*) => {
        tracing::error!(
            service = $crate::logging::SERVICE_NAME,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-tagged debug logging
#[macro_export]
macro_rules! service_debug {
    ($($arg:tt)*) => {
        tracing::debug!(
            service = $crate::logging::SERVICE_NAME,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(
        service = SERVICE_NAME,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(reason: &str) {
    info!(
        service = SERVICE_NAME,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = SERVICE_NAME,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!(
        service = SERVICE_NAME,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
