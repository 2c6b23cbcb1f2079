//! League entity <-> model mapper

use citadel_core::entities::{League, LeagueStatus};
use citadel_core::Id;

use crate::models::LeagueModel;

/// Convert a stored status string to LeagueStatus
///
/// Unknown strings fall back to hidden, which keeps a corrupted row out of
/// public listings rather than exposing it.
pub fn parse_league_status(status: &str) -> LeagueStatus {
    match status {
        "running" => LeagueStatus::Running,
        "completed" => LeagueStatus::Completed,
        _ => LeagueStatus::Hidden,
    }
}

/// Convert LeagueStatus to its stored string
pub fn league_status_to_str(status: LeagueStatus) -> &'static str {
    status.as_str()
}

impl From<LeagueModel> for League {
    fn from(model: LeagueModel) -> Self {
        League {
            id: Id::new(model.id),
            name: model.name,
            description: model.description,
            signuppable: model.signuppable,
            roster_locked: model.roster_locked,
            matches_submittable: model.matches_submittable,
            transfers_require_approval: model.transfers_require_approval,
            forfeit_all_matches_when_roster_disbands: model
                .forfeit_all_matches_when_roster_disbands,
            min_players: model.min_players,
            max_players: model.max_players,
            status: parse_league_status(&model.status),
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
        for status in [LeagueStatus::Hidden, LeagueStatus::Running, LeagueStatus::Completed] {
            assert_eq!(parse_league_status(league_status_to_str(status)), status);
        }
    }

    #[test]
    fn test_unknown_status_is_hidden() {
        assert_eq!(parse_league_status("garbage"), LeagueStatus::Hidden);
    }
}
