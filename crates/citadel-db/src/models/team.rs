//! Team database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the teams table
#[derive(Debug, Clone, FromRow)]
pub struct TeamModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub notice: Option<String>,
    pub captain_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
