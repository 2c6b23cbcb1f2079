//! Domain entities - core business objects

mod division;
mod game_match;
mod invite;
mod league;
mod notification;
mod roster;
mod team;
mod transfer;
mod transfer_request;
mod user;

pub use division::Division;
pub use game_match::{ForfeitBy, Match, MatchSide, MatchStatus};
pub use invite::TeamInvite;
pub use league::{League, LeagueStatus};
pub use notification::Notification;
pub use roster::Roster;
pub use team::Team;
pub use transfer::{RosterTransfer, TeamTransfer};
pub use transfer_request::TransferRequest;
pub use user::User;
