//! League database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the leagues table
#[derive(Debug, Clone, FromRow)]
pub struct LeagueModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub signuppable: bool,
    pub roster_locked: bool,
    pub matches_submittable: bool,
    pub transfers_require_approval: bool,
    pub forfeit_all_matches_when_roster_disbands: bool,
    pub min_players: i32,
    pub max_players: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
