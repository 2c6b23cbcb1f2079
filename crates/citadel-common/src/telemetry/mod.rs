//! Tracing and logging setup

mod tracing_setup;

pub use tracing_setup::{init_telemetry, try_init_telemetry, TelemetryError};
