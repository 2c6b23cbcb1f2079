//! PostgreSQL repository implementations

mod division;
mod error;
mod game_match;
mod invite;
mod league;
mod notification;
mod roster;
mod team;
mod transfer_request;
mod user;

pub use division::PgDivisionRepository;
pub use game_match::PgMatchRepository;
pub use invite::PgInviteRepository;
pub use league::PgLeagueRepository;
pub use notification::PgNotificationRepository;
pub use roster::PgRosterRepository;
pub use team::PgTeamRepository;
pub use transfer_request::PgTransferRequestRepository;
pub use user::PgUserRepository;
