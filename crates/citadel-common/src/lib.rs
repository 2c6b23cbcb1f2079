//! # citadel-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService};
pub use config::{
    AppConfig, AppSettings, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, ServerConfig, TelemetryConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_telemetry, try_init_telemetry, TelemetryError};
