//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where they carry free-form
//! input, `Validate`.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Team Requests
// ============================================================================

/// Create team request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 64, message = "Team name must be 1-64 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update team request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 64, message = "Team name must be 1-64 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 1000, message = "Notice must be at most 1000 characters"))]
    pub notice: Option<String>,
}

/// Invite a user to a team
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInviteRequest {
    pub user_id: i64,
}

// ============================================================================
// League Requests
// ============================================================================

/// Create league request (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLeagueRequest {
    #[validate(length(min = 1, max = 64, message = "League name must be 1-64 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub signuppable: bool,

    #[serde(default)]
    pub roster_locked: bool,

    #[serde(default)]
    pub matches_submittable: bool,

    #[serde(default = "default_true")]
    pub transfers_require_approval: bool,

    #[serde(default = "default_true")]
    pub forfeit_all_matches_when_roster_disbands: bool,

    /// Minimum roster size
    #[validate(range(min = 0, message = "min_players must be non-negative"))]
    pub min_players: i32,

    /// Maximum roster size; 0 means unbounded
    #[validate(range(min = 0, message = "max_players must be non-negative"))]
    pub max_players: i32,

    /// hidden | running | completed (defaults to hidden)
    pub status: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Update league request (admin); absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLeagueRequest {
    #[validate(length(min = 1, max = 64, message = "League name must be 1-64 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub signuppable: Option<bool>,
    pub roster_locked: Option<bool>,
    pub matches_submittable: Option<bool>,
    pub transfers_require_approval: Option<bool>,
    pub forfeit_all_matches_when_roster_disbands: Option<bool>,

    #[validate(range(min = 0, message = "min_players must be non-negative"))]
    pub min_players: Option<i32>,

    #[validate(range(min = 0, message = "max_players must be non-negative"))]
    pub max_players: Option<i32>,

    pub status: Option<String>,
}

/// Create division request (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDivisionRequest {
    #[validate(length(min = 1, max = 64, message = "Division name must be 1-64 characters"))]
    pub name: String,
}

// ============================================================================
// Roster Requests
// ============================================================================

/// League signup: create a roster with its initial player list
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRosterRequest {
    pub team_id: i64,
    pub division_id: i64,

    #[validate(length(min = 1, max = 64, message = "Roster name must be 1-64 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "At least one player is required"))]
    pub players: Vec<i64>,
}

/// Update roster attributes (captain or admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRosterRequest {
    #[validate(length(min = 1, max = 64, message = "Roster name must be 1-64 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 1000, message = "Notice must be at most 1000 characters"))]
    pub notice: Option<String>,

    #[validate(range(min = 1, message = "Ranking must be positive"))]
    pub ranking: Option<i32>,

    #[validate(range(min = 1, message = "Seeding must be positive"))]
    pub seeding: Option<i32>,
}

/// Approve a roster, optionally adjusting admin-editable attributes
/// in the same update
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct ApproveRosterRequest {
    #[validate(length(min = 1, max = 64, message = "Roster name must be 1-64 characters"))]
    pub name: Option<String>,

    pub division_id: Option<i64>,

    #[validate(range(min = 1, message = "Seeding must be positive"))]
    pub seeding: Option<i32>,
}

// ============================================================================
// Transfer Requests
// ============================================================================

/// File a transfer request for a roster
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTransferRequest {
    pub user_id: i64,

    /// true = join the roster, false = leave it
    pub is_joining: bool,

    /// On approval of a joining request, also add the user to the
    /// owning team if absent
    #[serde(default)]
    pub propagate: bool,
}

// ============================================================================
// Match Requests
// ============================================================================

/// Create a match (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMatchRequest {
    pub division_id: i64,
    pub home_roster_id: i64,

    /// Absent for a bye
    pub away_roster_id: Option<i64>,

    #[validate(range(min = 1, message = "Round must be positive"))]
    pub round: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_team_request_validation() {
        let valid = CreateTeamRequest {
            name: "Alpha Squad".to_string(),
            description: None,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateTeamRequest {
            name: String::new(),
            description: None,
        };
        assert!(empty_name.validate().is_err());

        let long_description = CreateTeamRequest {
            name: "Alpha".to_string(),
            description: Some("x".repeat(1001)),
        };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_create_roster_requires_players() {
        let request = CreateRosterRequest {
            team_id: 1,
            division_id: 2,
            name: "Roster".to_string(),
            description: None,
            players: vec![],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_league_bounds_validation() {
        let request = CreateLeagueRequest {
            name: "League".to_string(),
            description: None,
            signuppable: true,
            roster_locked: false,
            matches_submittable: false,
            transfers_require_approval: true,
            forfeit_all_matches_when_roster_disbands: true,
            min_players: -1,
            max_players: 0,
            status: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_roster_seeding_must_be_positive() {
        let request = UpdateRosterRequest {
            name: None,
            description: None,
            notice: None,
            ranking: None,
            seeding: Some(0),
        };
        assert!(request.validate().is_err());
    }
}
