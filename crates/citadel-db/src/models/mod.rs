//! Database models
//!
//! Row structs deriving `FromRow`, mirroring table columns. Enums are stored
//! as strings and parsed in the mappers.

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

pub use division::DivisionModel;
pub use game_match::MatchModel;
pub use invite::TeamInviteModel;
pub use league::LeagueModel;
pub use notification::NotificationModel;
pub use roster::RosterModel;
pub use team::TeamModel;
pub use transfer::{RosterTransferModel, TeamTransferModel};
pub use transfer_request::TransferRequestModel;
pub use user::UserModel;
