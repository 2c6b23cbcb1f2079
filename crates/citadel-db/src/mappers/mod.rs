//! Entity <-> model mappers
//!
//! `From<Model>` conversions into domain entities, plus the string mapping
//! for enums stored as VARCHAR columns.

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

pub use game_match::{forfeit_by_to_str, match_status_to_str, parse_forfeit_by, parse_match_status};
pub use league::{league_status_to_str, parse_league_status};
