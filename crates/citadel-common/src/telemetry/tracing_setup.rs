//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber from the telemetry section of the
//! application config. `RUST_LOG` takes precedence over the configured
//! filter when set.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::TelemetryConfig;

/// Initialize the tracing subscriber
///
/// # Panics
/// Panics if a subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) {
    try_init_telemetry(config).expect("tracing subscriber already initialized");
}

/// Try to initialize the tracing subscriber
///
/// Unlike `init_telemetry`, this does not panic when called twice, which
/// keeps test binaries that share a process happy.
pub fn try_init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.clone()));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_file(false).with_line_number(false))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_file(true).with_line_number(true))
            .try_init()
    };

    result.map_err(|_| TelemetryError::AlreadyInitialized)
}

/// Telemetry initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
