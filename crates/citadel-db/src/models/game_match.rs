//! Match database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the matches table
#[derive(Debug, Clone, FromRow)]
pub struct MatchModel {
    pub id: i64,
    pub division_id: i64,
    pub home_roster_id: i64,
    pub away_roster_id: Option<i64>,
    pub round: i32,
    pub status: String,
    pub forfeit_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
