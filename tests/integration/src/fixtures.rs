//! Test fixtures and data generators
//!
//! Request payloads for the API and lightweight mirrors of its
//! response bodies.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Request payloads
// ============================================================================

/// Create team request
#[derive(Debug, Serialize)]
pub struct CreateTeamReq {
    pub name: String,
    pub description: Option<String>,
}

impl CreateTeamReq {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Team {suffix}"),
            description: Some("A test team".to_string()),
        }
    }
}

/// Create league request; defaults to a running, signuppable league
/// with approval-gated transfers
#[derive(Debug, Serialize)]
pub struct CreateLeagueReq {
    pub name: String,
    pub description: Option<String>,
    pub signuppable: bool,
    pub roster_locked: bool,
    pub matches_submittable: bool,
    pub transfers_require_approval: bool,
    pub forfeit_all_matches_when_roster_disbands: bool,
    pub min_players: i32,
    pub max_players: i32,
    pub status: Option<String>,
}

impl CreateLeagueReq {
    pub fn unique(min_players: i32, max_players: i32) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test League {suffix}"),
            description: None,
            signuppable: true,
            roster_locked: false,
            matches_submittable: false,
            transfers_require_approval: true,
            forfeit_all_matches_when_roster_disbands: true,
            min_players,
            max_players,
            status: Some("running".to_string()),
        }
    }

    pub fn hidden(mut self) -> Self {
        self.status = Some("hidden".to_string());
        self
    }

    pub fn signups_closed(mut self) -> Self {
        self.signuppable = false;
        self
    }

    pub fn without_transfer_approval(mut self) -> Self {
        self.transfers_require_approval = false;
        self
    }

    pub fn sparing_confirmed_matches(mut self) -> Self {
        self.forfeit_all_matches_when_roster_disbands = false;
        self
    }
}

/// Create division request
#[derive(Debug, Serialize)]
pub struct CreateDivisionReq {
    pub name: String,
}

impl CreateDivisionReq {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Division {suffix}"),
        }
    }
}

/// Create roster request
#[derive(Debug, Serialize)]
pub struct CreateRosterReq {
    pub team_id: i64,
    pub division_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub players: Vec<i64>,
}

impl CreateRosterReq {
    pub fn new(team_id: i64, division_id: i64, players: Vec<i64>) -> Self {
        let suffix = unique_suffix();
        Self {
            team_id,
            division_id,
            name: format!("Test Roster {suffix}"),
            description: None,
            players,
        }
    }
}

/// Invite a user to a team
#[derive(Debug, Serialize)]
pub struct CreateInviteReq {
    pub user_id: i64,
}

/// File a transfer request
#[derive(Debug, Serialize)]
pub struct CreateTransferReq {
    pub user_id: i64,
    pub is_joining: bool,
    pub propagate: bool,
}

/// Create a match
#[derive(Debug, Serialize)]
pub struct CreateMatchReq {
    pub division_id: i64,
    pub home_roster_id: i64,
    pub away_roster_id: Option<i64>,
    pub round: i32,
}

// ============================================================================
// Response bodies (subset of fields the tests look at)
// ============================================================================

/// User response body
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: String,
    pub name: String,
    pub admin: bool,
}

/// Team response body
#[derive(Debug, Deserialize)]
pub struct TeamBody {
    pub id: String,
    pub name: String,
    pub captain_id: String,
}

/// League response body
#[derive(Debug, Deserialize)]
pub struct LeagueBody {
    pub id: String,
    pub name: String,
    pub status: String,
    pub min_players: i32,
    pub max_players: i32,
}

/// Division response body
#[derive(Debug, Deserialize)]
pub struct DivisionBody {
    pub id: String,
    pub league_id: String,
    pub name: String,
}

/// Roster response body
#[derive(Debug, Deserialize)]
pub struct RosterBody {
    pub id: String,
    pub team_id: String,
    pub division_id: String,
    pub name: String,
    pub approved: bool,
    pub disbanded: bool,
    pub player_count: i64,
}

/// Transfer request response body
#[derive(Debug, Deserialize)]
pub struct TransferRequestBody {
    pub id: String,
    pub roster_id: String,
    pub user_id: String,
    pub is_joining: bool,
    #[serde(default)]
    pub approved_by: Option<String>,
}

/// Team invite response body
#[derive(Debug, Deserialize)]
pub struct InviteBody {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub status: String,
}

/// Match response body
#[derive(Debug, Deserialize)]
pub struct MatchBody {
    pub id: String,
    pub division_id: String,
    pub home_roster_id: String,
    #[serde(default)]
    pub away_roster_id: Option<String>,
    pub status: String,
    pub forfeit_by: String,
}

/// Notification response body
#[derive(Debug, Deserialize)]
pub struct NotificationBody {
    pub id: String,
    pub message: String,
    pub read: bool,
}

/// Transfer ledger row body
#[derive(Debug, Deserialize)]
pub struct TransferBody {
    pub id: String,
    pub user_id: String,
    pub is_joining: bool,
}
