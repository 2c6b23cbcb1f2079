//! # citadel-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `citadel-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The multi-table lifecycle operations (roster creation with its initial
//! players, the disband cascade, invite acceptance, transfer-request
//! approval) are implemented as single transactions here.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use citadel_db::pool::{create_pool, DatabaseConfig};
//! use citadel_db::repositories::PgRosterRepository;
//! use citadel_core::traits::RosterRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::default();
//!     let pool = create_pool(&config).await?;
//!     let roster_repo = PgRosterRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgDivisionRepository, PgInviteRepository, PgLeagueRepository, PgMatchRepository,
    PgNotificationRepository, PgRosterRepository, PgTeamRepository,
    PgTransferRequestRepository, PgUserRepository,
};
