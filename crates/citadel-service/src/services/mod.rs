//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod game_match;
pub mod invite;
pub mod league;
pub mod notification;
pub mod permission;
pub mod roster;
pub mod team;
pub mod transfer;
pub mod user;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use game_match::MatchService;
pub use invite::InviteService;
pub use league::LeagueService;
pub use notification::NotificationService;
pub use permission::PermissionService;
pub use roster::RosterService;
pub use team::TeamService;
pub use transfer::TransferService;
pub use user::UserService;
