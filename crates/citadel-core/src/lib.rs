//! # citadel-core
//!
//! Domain layer containing entities, value objects, and repository traits for
//! the league platform. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Division, ForfeitBy, League, LeagueStatus, Match, MatchSide, MatchStatus, Notification,
    Roster, RosterTransfer, Team, TeamInvite, TeamTransfer, TransferRequest, User,
};
pub use error::DomainError;
pub use traits::{
    DivisionRepository, InviteRepository, LeagueRepository, MatchRepository, NewDivision,
    NewInvite, NewLeague, NewMatch, NewNotification, NewRoster, NewTeam, NewTransferRequest,
    NewUser, NotificationRepository, RepoResult, RosterRepository, TeamRepository,
    TransferRequestRepository, UserRepository,
};
pub use value_objects::{Id, IdParseError};
