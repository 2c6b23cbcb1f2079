//! Citadel API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p citadel-api
//! ```
//!
//! Configuration is loaded from environment variables (`.env` supported).

use citadel_common::{try_init_telemetry, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    // Initialize tracing
    if let Err(e) = try_init_telemetry(&config.telemetry) {
        eprintln!("Warning: Failed to initialize telemetry: {e}");
    }

    info!(
        env = ?config.app.env,
        address = %config.server.address(),
        "Starting Citadel API server"
    );

    citadel_api::run(config).await?;

    Ok(())
}
