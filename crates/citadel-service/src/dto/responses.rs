//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Team Responses
// ============================================================================

/// Team response
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub captain_id: String,
    pub created_at: DateTime<Utc>,
}

/// One row of a team's transfer ledger
#[derive(Debug, Clone, Serialize)]
pub struct TeamTransferResponse {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub is_joining: bool,
    pub created_at: DateTime<Utc>,
}

/// Team invite response
#[derive(Debug, Clone, Serialize)]
pub struct TeamInviteResponse {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    /// pending | accepted | declined
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// League Responses
// ============================================================================

/// League response
#[derive(Debug, Clone, Serialize)]
pub struct LeagueResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub signuppable: bool,
    pub roster_locked: bool,
    pub matches_submittable: bool,
    pub transfers_require_approval: bool,
    pub forfeit_all_matches_when_roster_disbands: bool,
    pub min_players: i32,
    pub max_players: i32,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
}

/// Division response
#[derive(Debug, Clone, Serialize)]
pub struct DivisionResponse {
    pub id: String,
    pub league_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Roster Responses
// ============================================================================

/// Roster response
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub id: String,
    pub team_id: String,
    pub division_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeding: Option<i32>,
    pub approved: bool,
    pub disbanded: bool,
    pub player_count: i64,
    pub created_at: DateTime<Utc>,
}

/// One row of a roster's transfer ledger
#[derive(Debug, Clone, Serialize)]
pub struct RosterTransferResponse {
    pub id: String,
    pub roster_id: String,
    pub user_id: String,
    pub is_joining: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Transfer Request Responses
// ============================================================================

/// Transfer request response
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequestResponse {
    pub id: String,
    pub roster_id: String,
    pub user_id: String,
    pub is_joining: bool,
    pub propagate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Match Responses
// ============================================================================

/// Match response
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub id: String,
    pub division_id: String,
    pub home_roster_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_roster_id: Option<String>,
    pub round: i32,
    pub status: &'static str,
    pub forfeit_by: &'static str,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// Notification response
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
