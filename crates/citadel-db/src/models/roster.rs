//! Roster database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the rosters table
///
/// `player_count` is computed by subquery in every SELECT, not stored,
/// so it cannot drift from the membership rows.
#[derive(Debug, Clone, FromRow)]
pub struct RosterModel {
    pub id: i64,
    pub team_id: i64,
    pub division_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub notice: Option<String>,
    pub ranking: Option<i32>,
    pub seeding: Option<i32>,
    pub approved: bool,
    pub disbanded: bool,
    pub player_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
