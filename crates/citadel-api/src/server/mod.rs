//! Server setup and initialization
//!
//! Provides the main application builder and server runner with
//! graceful shutdown.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use citadel_common::{AppConfig, AppError, JwtService};
use citadel_db::{
    create_pool, run_migrations, PgDivisionRepository, PgInviteRepository, PgLeagueRepository,
    PgMatchRepository, PgNotificationRepository, PgRosterRepository, PgTeamRepository,
    PgTransferRequestRepository, PgUserRepository,
};
use citadel_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the Axum application with the basic middleware stack
///
/// Used by integration tests; no rate limiting, permissive CORS.
pub fn create_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().server.request_timeout_secs);
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, timeout);
    router.with_state(state)
}

/// Build the Axum application with the production middleware stack
///
/// Health routes are mounted outside the rate limiter so probes never
/// get throttled.
pub fn create_production_app(state: AppState) -> Router {
    let config = state.config();
    let timeout = Duration::from_secs(config.server.request_timeout_secs);

    let api = apply_middleware_with_config(
        create_router(),
        timeout,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes(), timeout);

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = citadel_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.auth.jwt_secret,
        config.auth.token_expiry,
    ));

    // Build service context
    let service_context = ServiceContext::builder()
        .pool(pool.clone())
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .league_repo(Arc::new(PgLeagueRepository::new(pool.clone())))
        .division_repo(Arc::new(PgDivisionRepository::new(pool.clone())))
        .team_repo(Arc::new(PgTeamRepository::new(pool.clone())))
        .invite_repo(Arc::new(PgInviteRepository::new(pool.clone())))
        .roster_repo(Arc::new(PgRosterRepository::new(pool.clone())))
        .match_repo(Arc::new(PgMatchRepository::new(pool.clone())))
        .transfer_request_repo(Arc::new(PgTransferRequestRepository::new(pool.clone())))
        .notification_repo(Arc::new(PgNotificationRepository::new(pool)))
        .jwt_service(jwt_service)
        .build();

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server shut down");

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.server.address();

    let state = create_app_state(config).await?;
    let app = create_production_app(state);

    run_server(app, &address).await
}

/// Resolve on SIGINT (Ctrl+C) or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
