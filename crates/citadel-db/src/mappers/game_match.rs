//! Match entity <-> model mapper

use citadel_core::entities::{ForfeitBy, Match, MatchStatus};
use citadel_core::Id;

use crate::models::MatchModel;

/// Convert a stored status string to MatchStatus
pub fn parse_match_status(status: &str) -> MatchStatus {
    match status {
        "submitted_by_home" => MatchStatus::SubmittedByHome,
        "submitted_by_away" => MatchStatus::SubmittedByAway,
        "confirmed" => MatchStatus::Confirmed,
        _ => MatchStatus::Pending,
    }
}

/// Convert MatchStatus to its stored string
pub fn match_status_to_str(status: MatchStatus) -> &'static str {
    status.as_str()
}

/// Convert a stored forfeit string to ForfeitBy
pub fn parse_forfeit_by(forfeit: &str) -> ForfeitBy {
    match forfeit {
        "home_team_forfeit" => ForfeitBy::HomeTeamForfeit,
        "away_team_forfeit" => ForfeitBy::AwayTeamForfeit,
        "mutual_forfeit" => ForfeitBy::MutualForfeit,
        "technical_forfeit" => ForfeitBy::TechnicalForfeit,
        _ => ForfeitBy::NoForfeit,
    }
}

/// Convert ForfeitBy to its stored string
pub fn forfeit_by_to_str(forfeit: ForfeitBy) -> &'static str {
    forfeit.as_str()
}

impl From<MatchModel> for Match {
    fn from(model: MatchModel) -> Self {
        Match {
            id: Id::new(model.id),
            division_id: Id::new(model.division_id),
            home_roster_id: Id::new(model.home_roster_id),
            away_roster_id: model.away_roster_id.map(Id::new),
            round: model.round,
            status: parse_match_status(&model.status),
            forfeit_by: parse_forfeit_by(&model.forfeit_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            MatchStatus::Pending,
            MatchStatus::SubmittedByHome,
            MatchStatus::SubmittedByAway,
            MatchStatus::Confirmed,
        ] {
            assert_eq!(parse_match_status(match_status_to_str(status)), status);
        }
    }

    #[test]
    fn test_forfeit_round_trip() {
        for forfeit in [
            ForfeitBy::NoForfeit,
            ForfeitBy::HomeTeamForfeit,
            ForfeitBy::AwayTeamForfeit,
            ForfeitBy::MutualForfeit,
            ForfeitBy::TechnicalForfeit,
        ] {
            assert_eq!(parse_forfeit_by(forfeit_by_to_str(forfeit)), forfeit);
        }
    }
}
