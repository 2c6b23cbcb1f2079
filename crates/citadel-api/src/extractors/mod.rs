//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and typed path
//! parameters.

mod auth;
mod path;
mod validated;

pub use auth::{AdminUser, AuthUser, OptionalAuthUser};
pub use path::{
    DivisionIdPath, InviteIdPath, LeagueIdPath, MatchIdPath, NotificationIdPath, RequestIdPath,
    RosterIdPath, RosterUserPath, TeamIdPath, TeamUserPath, UserIdPath,
};
pub use validated::{OptionalValidatedJson, ValidatedJson};
